#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rtloc_runtime::desktop::DiscoveryRules;
use rtloc_runtime::host::HostEnvironment;

/// A host with a fixed executing runtime, platform and PATH.
/// Directory queries go to the real filesystem (use a temp dir).
pub struct FixtureHost {
    pub executing: PathBuf,
    pub windows: bool,
    pub programs: HashMap<String, PathBuf>,
}

impl FixtureHost {
    pub fn new(executing: impl Into<PathBuf>) -> Self {
        Self {
            executing: executing.into(),
            windows: false,
            programs: HashMap::new(),
        }
    }

    pub fn windows(mut self) -> Self {
        self.windows = true;
        self
    }

    pub fn with_program(mut self, name: &str, path: impl Into<PathBuf>) -> Self {
        self.programs.insert(name.to_string(), path.into());
        self
    }
}

impl HostEnvironment for FixtureHost {
    fn executing_runtime_dir(&self) -> PathBuf {
        self.executing.clone()
    }

    fn is_windows(&self) -> bool {
        self.windows
    }

    fn find_program(&self, program: &str) -> Option<PathBuf> {
        self.programs.get(program).cloned()
    }
}

/// Rules pointing only at locations under `root`, so the machine running
/// the tests cannot leak real installs into the results.
pub fn rules_under(root: &Path) -> DiscoveryRules {
    DiscoveryRules {
        framework_root: root.join("Framework64"),
        mono_executable: "mono".to_string(),
        mono_roots: vec![root.join("usr-lib-mono"), root.join("program-files-mono")],
    }
}

pub fn mkdirs(root: &Path, names: &[&str]) {
    for name in names {
        std::fs::create_dir_all(root.join(name)).unwrap();
    }
}

pub fn lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}
