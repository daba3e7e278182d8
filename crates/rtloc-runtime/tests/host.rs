use std::path::{Path, PathBuf};

use rtloc_runtime::host::{DotnetCli, HostEnvironment, RuntimeListing, SystemHost};

#[test]
fn missing_dotnet_lists_nothing() {
    let cli = DotnetCli::new("nonexistent_dotnet_xyz_123");
    assert!(cli.listed_runtimes().is_empty());
}

#[cfg(unix)]
#[test]
fn failing_dotnet_lists_nothing() {
    let cli = DotnetCli::new("false");
    assert!(cli.listed_runtimes().is_empty());
}

#[test]
fn fixed_listing_returns_its_lines() {
    let lines = vec!["Microsoft.NETCore.App 7.0.2 [/x]".to_string()];
    assert_eq!(lines.listed_runtimes(), lines);
}

#[test]
fn bundled_runtime_overrides_executable_dir() {
    let host = SystemHost::new().with_bundled_runtime(Some(PathBuf::from("/opt/tool/runtime")));
    assert_eq!(host.executing_runtime_dir(), Path::new("/opt/tool/runtime"));
}

#[test]
fn executing_runtime_defaults_to_executable_dir() {
    let exe = std::env::current_exe().unwrap();
    let host = SystemHost::new();
    assert_eq!(host.executing_runtime_dir(), exe.parent().unwrap());
}

#[test]
fn system_host_platform_matches_target() {
    assert_eq!(SystemHost::new().is_windows(), cfg!(windows));
}

#[test]
fn find_program_misses_unknown_names() {
    assert_eq!(SystemHost::new().find_program("nonexistent_program_xyz_123"), None);
}

#[test]
fn subdirectories_lists_only_directories() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir(tmp.path().join("4.5")).unwrap();
    std::fs::write(tmp.path().join("README"), "").unwrap();

    let dirs = SystemHost::new().subdirectories(tmp.path());
    assert_eq!(dirs, [tmp.path().join("4.5")]);
    assert!(SystemHost::new()
        .subdirectories(&tmp.path().join("missing"))
        .is_empty());
}
