//! CLI argument definitions for rtloc.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "rtloc",
    version,
    about = "Locate the managed runtime directory to load",
    long_about = "rtloc picks the installed .NET runtime an analysis tool should run against: \
                  the newest listed .NET Core or ASP.NET Core runtime, then desktop \
                  (.NET Framework / Mono) runtimes, then the tool's own bundled runtime."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of ~/.rtloc/config.toml
    #[arg(long, global = true, env = "RTLOC_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the runtime directory to use
    Resolve {
        /// Use the bundled runtime without searching for installed ones
        #[arg(long)]
        self_contained: bool,
    },

    /// Print every candidate runtime directory in priority order
    Candidates {
        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Print the runtime recorded for each listed family
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
