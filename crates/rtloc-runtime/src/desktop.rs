//! Desktop runtime discovery: .NET Framework and Mono installs, found by
//! filesystem convention rather than by the listing command.

use std::path::{Path, PathBuf};

use globset::GlobBuilder;

use crate::config::DiscoveryConfig;
use crate::error::RuntimeError;
use crate::host::HostEnvironment;

/// Root of the 64-bit .NET Framework installs on Windows.
pub const FRAMEWORK_ROOT: &str = r"C:\Windows\Microsoft.NET\Framework64";

/// Conventional Mono library roots, probed in order.
pub const MONO_ROOTS: &[&str] = &["/usr/lib/mono", r"C:\Program Files\Mono\lib\mono"];

/// Framework version directories look like `v4.0.30319`.
const FRAMEWORK_DIR_PATTERN: &str = "v*";

/// Where to look for desktop runtimes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryRules {
    pub framework_root: PathBuf,
    pub mono_executable: String,
    pub mono_roots: Vec<PathBuf>,
}

impl DiscoveryRules {
    /// The conventional locations for the given platform.
    pub fn for_platform(is_windows: bool) -> Self {
        let mono_executable = if is_windows { "mono.exe" } else { "mono" };
        Self {
            framework_root: PathBuf::from(FRAMEWORK_ROOT),
            mono_executable: mono_executable.to_string(),
            mono_roots: MONO_ROOTS.iter().map(PathBuf::from).collect(),
        }
    }

    /// Platform defaults with any `[discovery]` overrides applied.
    pub fn from_config(config: &DiscoveryConfig, is_windows: bool) -> Self {
        let mut rules = Self::for_platform(is_windows);
        if let Some(root) = &config.framework_root {
            rules.framework_root = root.clone();
        }
        if let Some(exe) = &config.mono_executable {
            rules.mono_executable = exe.clone();
        }
        if let Some(roots) = &config.mono_roots {
            rules.mono_roots = roots.clone();
        }
        rules
    }
}

/// Desktop runtime directories, newest-looking name first.
///
/// On Windows an existing framework root wins outright and Mono is not
/// consulted. Otherwise the Mono root is the directory holding the `mono`
/// executable on the search path, or failing that the first existing
/// conventional root. No root at all yields an empty list.
pub fn desktop_runtimes(host: &impl HostEnvironment, rules: &DiscoveryRules) -> Vec<PathBuf> {
    if host.is_windows() && host.is_dir(&rules.framework_root) {
        tracing::debug!(
            "Using .NET Framework root {}",
            rules.framework_root.display()
        );
        return framework_runtimes(host, &rules.framework_root);
    }

    match mono_root(host, rules) {
        Ok(root) => {
            tracing::debug!("Using Mono root {}", root.display());
            let mut dirs: Vec<PathBuf> = host
                .subdirectories(&root)
                .into_iter()
                .filter(|d| file_name(d).starts_with(|c: char| c.is_ascii_digit()))
                .collect();
            sort_descending(&mut dirs);
            dirs
        }
        Err(e) => {
            tracing::debug!("{e}");
            Vec::new()
        }
    }
}

fn framework_runtimes(host: &impl HostEnvironment, root: &Path) -> Vec<PathBuf> {
    let matcher = match GlobBuilder::new(FRAMEWORK_DIR_PATTERN)
        .case_insensitive(true)
        .build()
    {
        Ok(glob) => glob.compile_matcher(),
        Err(e) => {
            tracing::warn!("Invalid framework directory pattern: {e}");
            return Vec::new();
        }
    };

    let mut dirs: Vec<PathBuf> = host
        .subdirectories(root)
        .into_iter()
        .filter(|d| matcher.is_match(file_name(d)))
        .collect();
    sort_descending(&mut dirs);
    dirs
}

fn mono_root(host: &impl HostEnvironment, rules: &DiscoveryRules) -> Result<PathBuf, RuntimeError> {
    if let Some(exe) = host.find_program(&rules.mono_executable) {
        tracing::debug!("Found {} on PATH at {}", rules.mono_executable, exe.display());
        return exe
            .parent()
            .filter(|dir| host.is_dir(dir))
            .map(Path::to_path_buf)
            .ok_or(RuntimeError::NoDesktopRoot);
    }

    rules
        .mono_roots
        .iter()
        .find(|root| host.is_dir(root))
        .cloned()
        .ok_or(RuntimeError::NoDesktopRoot)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn sort_descending(dirs: &mut [PathBuf]) {
    dirs.sort_by(|a, b| b.file_name().cmp(&a.file_name()));
}
