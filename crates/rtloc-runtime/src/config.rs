use std::path::{Path, PathBuf};

use rtloc_util::errors::{RtlocError, RtlocResult};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "RTLOC_CONFIG";

/// User configuration loaded from `~/.rtloc/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RtlocConfig {
    /// Always use the executing runtime, skipping discovery.
    #[serde(default)]
    pub self_contained: bool,

    #[serde(default)]
    pub runtime: RuntimeConfig,

    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

/// Runtime settings from `[runtime]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuntimeConfig {
    /// Program run with `--list-runtimes`.
    #[serde(default = "default_dotnet")]
    pub dotnet: String,
    /// Directory reported as the executing runtime.
    #[serde(default)]
    pub bundled_runtime: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            dotnet: default_dotnet(),
            bundled_runtime: None,
        }
    }
}

fn default_dotnet() -> String {
    "dotnet".to_string()
}

/// Desktop discovery overrides from `[discovery]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DiscoveryConfig {
    #[serde(default)]
    pub framework_root: Option<PathBuf>,
    #[serde(default)]
    pub mono_executable: Option<String>,
    #[serde(default)]
    pub mono_roots: Option<Vec<PathBuf>>,
}

impl RtlocConfig {
    /// Load from [`Self::default_path`], or return defaults if the file doesn't exist.
    pub fn load() -> RtlocResult<Self> {
        let path = Self::default_path();
        if path.is_file() {
            Self::load_from(&path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load from an explicit path; a missing file is an error.
    pub fn load_from(path: &Path) -> RtlocResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RtlocError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| {
            RtlocError::Config {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// `$RTLOC_CONFIG` if set, otherwise `~/.rtloc/config.toml`.
    pub fn default_path() -> PathBuf {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => dirs_path().join("config.toml"),
        }
    }
}

/// Returns the path to the rtloc data directory (`~/.rtloc/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".rtloc")
}
