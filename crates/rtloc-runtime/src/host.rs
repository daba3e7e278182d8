//! Collaborators the selector queries: the runtime listing command and the
//! host environment (executing runtime, platform, PATH, filesystem).

use std::fs;
use std::path::{Path, PathBuf};

use rtloc_util::process::CommandBuilder;

/// Source of raw `dotnet --list-runtimes` lines.
pub trait RuntimeListing {
    fn listed_runtimes(&self) -> Vec<String>;
}

/// A fixed set of lines, e.g. captured earlier or built in tests.
impl RuntimeListing for Vec<String> {
    fn listed_runtimes(&self) -> Vec<String> {
        self.clone()
    }
}

/// Host queries used for desktop discovery and the terminal fallback.
pub trait HostEnvironment {
    /// Directory of the runtime this tool is itself executing under.
    fn executing_runtime_dir(&self) -> PathBuf;

    fn is_windows(&self) -> bool;

    /// Full path of `program` if it is found on the search path.
    fn find_program(&self, program: &str) -> Option<PathBuf>;

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    /// Immediate subdirectories of `path`, in no particular order.
    /// An unreadable directory yields nothing.
    fn subdirectories(&self, path: &Path) -> Vec<PathBuf> {
        fs::read_dir(path)
            .into_iter()
            .flatten()
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_dir())
            .collect()
    }
}

/// Runs the `dotnet` CLI to list installed runtimes.
#[derive(Debug, Clone)]
pub struct DotnetCli {
    program: String,
}

impl DotnetCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for DotnetCli {
    fn default() -> Self {
        Self::new("dotnet")
    }
}

impl RuntimeListing for DotnetCli {
    /// A missing or failing `dotnet` lists nothing; selection then falls
    /// through to desktop runtimes and the executing runtime.
    fn listed_runtimes(&self) -> Vec<String> {
        match CommandBuilder::new(&self.program)
            .arg("--list-runtimes")
            .stdout_lines()
        {
            Ok(lines) => lines,
            Err(e) => {
                tracing::warn!("Could not list installed runtimes: {e}");
                Vec::new()
            }
        }
    }
}

/// The real host: `which` for PATH lookups and the current executable's
/// directory as the executing runtime.
#[derive(Debug, Clone, Default)]
pub struct SystemHost {
    bundled_runtime: Option<PathBuf>,
}

impl SystemHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `dir` as the executing runtime instead of the executable's directory.
    pub fn with_bundled_runtime(mut self, dir: Option<PathBuf>) -> Self {
        self.bundled_runtime = dir;
        self
    }
}

impl HostEnvironment for SystemHost {
    fn executing_runtime_dir(&self) -> PathBuf {
        if let Some(dir) = &self.bundled_runtime {
            return dir.clone();
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn is_windows(&self) -> bool {
        cfg!(windows)
    }

    fn find_program(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}
