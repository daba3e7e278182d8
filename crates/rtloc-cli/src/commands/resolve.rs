use miette::Result;
use rtloc_util::progress;

use super::Selector;

pub fn exec(selector: &Selector, self_contained: bool) -> Result<()> {
    if self_contained {
        progress::status_info("Bundled", "self-contained mode, skipping runtime discovery");
    }

    let runtime = selector.resolve(self_contained);
    progress::status("Resolved", &runtime.display().to_string());
    println!("{}", runtime.display());
    Ok(())
}
