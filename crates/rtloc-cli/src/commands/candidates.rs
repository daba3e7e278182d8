use miette::Result;
use rtloc_util::progress;

use super::{print_json, Selector};

pub fn exec(selector: &Selector, json: bool) -> Result<()> {
    let chain = selector.candidates();

    if chain.len() == 1 {
        progress::status_warn(
            "Fallback",
            "no installed runtimes found, only the bundled runtime is available",
        );
    }

    if json {
        return print_json(&chain);
    }

    for dir in &chain {
        println!("{}", dir.display());
    }
    Ok(())
}
