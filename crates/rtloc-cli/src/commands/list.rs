use std::path::Path;

use miette::Result;
use rtloc_util::progress;
use serde::Serialize;

use super::{print_json, Selector};

#[derive(Serialize)]
struct ListedFamily<'a> {
    family: &'a str,
    version: String,
    preview: bool,
    path: &'a Path,
}

pub fn exec(selector: &Selector, json: bool) -> Result<()> {
    let runtimes = selector.newest_runtimes();

    if runtimes.is_empty() {
        progress::status_warn("Warning", "no runtimes reported by `dotnet --list-runtimes`");
    }

    if json {
        let entries: Vec<ListedFamily<'_>> = runtimes
            .iter()
            .map(|(family, runtime)| ListedFamily {
                family,
                version: runtime.number().to_string(),
                preview: runtime.number().is_preview(),
                path: runtime.full_path(),
            })
            .collect();
        return print_json(&entries);
    }

    for (family, runtime) in runtimes.iter() {
        println!("{family} {} [{}]", runtime.number(), runtime.dir().display());
    }
    Ok(())
}
