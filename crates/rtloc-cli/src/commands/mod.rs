//! Command dispatch and handler modules.

mod candidates;
mod list;
mod resolve;

use miette::Result;
use rtloc_runtime::config::RtlocConfig;
use rtloc_runtime::desktop::DiscoveryRules;
use rtloc_runtime::host::{DotnetCli, HostEnvironment, SystemHost};
use rtloc_runtime::selector::RuntimeSelector;
use rtloc_util::errors::RtlocError;
use serde::Serialize;

use crate::cli::{Cli, Command};

type Selector = RuntimeSelector<DotnetCli, SystemHost>;

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => RtlocConfig::load_from(path)?,
        None => RtlocConfig::load()?,
    };
    tracing::debug!("Using config {config:?}");
    let selector = build_selector(&config);

    match cli.command {
        Command::Resolve { self_contained } => {
            resolve::exec(&selector, self_contained || config.self_contained)
        }
        Command::Candidates { json } => candidates::exec(&selector, json),
        Command::List { json } => list::exec(&selector, json),
    }
}

fn build_selector(config: &RtlocConfig) -> Selector {
    let host = SystemHost::new().with_bundled_runtime(config.runtime.bundled_runtime.clone());
    let rules = DiscoveryRules::from_config(&config.discovery, host.is_windows());
    RuntimeSelector::new(DotnetCli::new(&config.runtime.dotnet), host).with_rules(rules)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| RtlocError::Output {
        message: format!("Failed to serialize JSON: {e}"),
    })?;
    println!("{json}");
    Ok(())
}
