use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn rtloc() -> Command {
    Command::cargo_bin("rtloc").unwrap()
}

fn write_config(tmp: &Path, dotnet: &str) -> PathBuf {
    let path = tmp.join("config.toml");
    let root = tmp.display().to_string().replace('\\', "/");
    std::fs::write(
        &path,
        format!(
            r#"
[runtime]
dotnet = "{dotnet}"
bundled-runtime = "{root}/bundled"

[discovery]
framework-root = "{root}/Framework64"
mono-executable = "nonexistent_mono_xyz_123"
mono-roots = ["{root}/mono"]
"#
        ),
    )
    .unwrap();
    path
}

#[cfg(unix)]
fn fake_dotnet(tmp: &Path, lines: &[&str]) -> String {
    use std::os::unix::fs::PermissionsExt;

    let script = tmp.join("dotnet");
    let body: String = lines.iter().map(|l| format!("echo '{l}'\n")).collect();
    std::fs::write(&script, format!("#!/bin/sh\n{body}")).unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    script.display().to_string()
}

#[test]
fn candidates_only_bundled_warns() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(tmp.path(), "nonexistent_dotnet_xyz_123");

    rtloc()
        .arg("--config")
        .arg(&config)
        .arg("candidates")
        .assert()
        .success()
        .stdout(predicate::str::contains("bundled"))
        .stderr(predicate::str::contains("Fallback"));
}

#[test]
fn candidates_json_lists_desktop_then_bundled() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir_all(tmp.path().join("mono/4.5")).unwrap();
    std::fs::create_dir_all(tmp.path().join("mono/6.12")).unwrap();
    let config = write_config(tmp.path(), "nonexistent_dotnet_xyz_123");

    let output = rtloc()
        .arg("--config")
        .arg(&config)
        .args(["candidates", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let chain: Vec<PathBuf> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(chain.len(), 3);
    assert!(chain[0].ends_with("6.12"));
    assert!(chain[1].ends_with("4.5"));
    assert!(chain[2].ends_with("bundled"));
}

#[cfg(unix)]
#[test]
fn list_prints_parsed_families() {
    let tmp = TempDir::new().unwrap();
    let dotnet = fake_dotnet(
        tmp.path(),
        &[
            "Microsoft.NETCore.App 7.0.2 [/usr/share/dotnet/shared/Microsoft.NETCore.App]",
            "Microsoft.NETCore.App 8.0.0-preview.7.0.1 [/usr/share/dotnet/shared/Microsoft.NETCore.App]",
            "not a runtime line",
        ],
    );
    let config = write_config(tmp.path(), &dotnet);

    rtloc()
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .success()
        .stdout(
            "Microsoft.NETCore.App 8.0.0-preview.7.0.1 [/usr/share/dotnet/shared/Microsoft.NETCore.App]\n",
        );
}

#[cfg(unix)]
#[test]
fn list_json() {
    let tmp = TempDir::new().unwrap();
    let dotnet = fake_dotnet(tmp.path(), &["Microsoft.NETCore.App 8.0.0-preview.7.0.1 [/root]"]);
    let config = write_config(tmp.path(), &dotnet);

    let output = rtloc()
        .arg("--config")
        .arg(&config)
        .args(["list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entries[0]["family"], "Microsoft.NETCore.App");
    assert_eq!(entries[0]["version"], "8.0.0-preview.7.0.1");
    assert_eq!(entries[0]["preview"], true);
    assert_eq!(entries[0]["path"], "/root/8.0.0-preview.7.0.1");
}

#[test]
fn list_without_dotnet_warns() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(tmp.path(), "nonexistent_dotnet_xyz_123");

    rtloc()
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("no runtimes reported"));
}
