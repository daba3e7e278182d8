//! Runtime selection: the ordered candidate chain and the resolved choice.

use std::path::PathBuf;

use crate::desktop::{self, DiscoveryRules};
use crate::host::{HostEnvironment, RuntimeListing};
use crate::listing::{self, RuntimeFamilyMap};

/// The core .NET runtime family.
pub const NETCORE_APP: &str = "Microsoft.NETCore.App";

/// The ASP.NET Core runtime family.
pub const ASPNETCORE_APP: &str = "Microsoft.AspNetCore.App";

/// Chooses the runtime directory to load.
///
/// Nothing is cached: every call re-runs the listing and re-reads the
/// filesystem.
pub struct RuntimeSelector<L, H> {
    listing: L,
    host: H,
    rules: DiscoveryRules,
}

impl<L: RuntimeListing, H: HostEnvironment> RuntimeSelector<L, H> {
    /// A selector using the conventional discovery locations for `host`'s platform.
    pub fn new(listing: L, host: H) -> Self {
        let rules = DiscoveryRules::for_platform(host.is_windows());
        Self {
            listing,
            host,
            rules,
        }
    }

    pub fn with_rules(mut self, rules: DiscoveryRules) -> Self {
        self.rules = rules;
        self
    }

    /// The version recorded per family by the listing command.
    ///
    /// When a family is listed more than once the last line wins.
    pub fn newest_runtimes(&self) -> RuntimeFamilyMap {
        listing::parse_runtimes(&self.listing.listed_runtimes())
    }

    pub fn desktop_runtimes(&self) -> Vec<PathBuf> {
        desktop::desktop_runtimes(&self.host, &self.rules)
    }

    /// Every candidate in priority order: .NET Core, ASP.NET Core, desktop
    /// runtimes, then the executing runtime. Never empty.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut chain = self.listed_candidates();
        chain.extend(self.desktop_runtimes());
        chain.push(self.host.executing_runtime_dir());
        chain
    }

    /// The runtime directory to use.
    ///
    /// With `use_self_contained` this is always the executing runtime.
    /// Otherwise it is the first candidate; later tiers are only
    /// evaluated when the earlier ones produced nothing.
    pub fn resolve(&self, use_self_contained: bool) -> PathBuf {
        if use_self_contained {
            return self.host.executing_runtime_dir();
        }

        let chosen = self
            .listed_candidates()
            .into_iter()
            .next()
            .or_else(|| self.desktop_runtimes().into_iter().next())
            .unwrap_or_else(|| self.host.executing_runtime_dir());
        tracing::info!("Selected runtime {}", chosen.display());
        chosen
    }

    fn listed_candidates(&self) -> Vec<PathBuf> {
        let newest = self.newest_runtimes();
        [NETCORE_APP, ASPNETCORE_APP]
            .into_iter()
            .filter_map(|family| match newest.get(family) {
                Ok(version) => Some(version.full_path().to_path_buf()),
                Err(e) => {
                    tracing::debug!("{e}");
                    None
                }
            })
            .collect()
    }
}
