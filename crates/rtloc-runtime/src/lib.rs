//! Managed runtime selection: parse `dotnet --list-runtimes` output, order
//! runtime versions (previews below releases), discover desktop runtimes,
//! and build the fallback chain ending in the executing runtime.

pub mod config;
pub mod desktop;
pub mod error;
pub mod host;
pub mod listing;
pub mod selector;
pub mod version;
