use std::path::{Path, PathBuf};

use switchu_core::LauncherConfig;
use tempfile::TempDir;

#[test]
fn test_missing_file_loads_defaults() {
    let temp = TempDir::new().unwrap();
    let config = LauncherConfig::load(&LauncherConfig::path(temp.path())).unwrap();
    assert_eq!(config.scan.max_entries, 12);
    assert_eq!(config.repeat.initial_delay_ms, 400);
    assert_eq!(config.repeat.repeat_interval_ms, 100);
}

#[test]
fn test_save_and_reload_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");

    let mut config = LauncherConfig::default();
    config.scan.max_entries = 24;
    config.repeat.repeat_interval_ms = 80;
    config.save(&path).unwrap();

    let reloaded = LauncherConfig::load(&path).unwrap();
    assert_eq!(reloaded.scan.max_entries, 24);
    assert_eq!(reloaded.repeat.repeat_interval_ms, 80);
    assert_eq!(reloaded.scan.apps_root, config.scan.apps_root);
}

#[test]
fn test_partial_file_fills_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[scan]\nmax_entries = 6\n").unwrap();

    let config = LauncherConfig::load(&path).unwrap();
    assert_eq!(config.scan.max_entries, 6);
    assert_eq!(config.scan.apps_root, PathBuf::from("wiiu/apps"));
    assert_eq!(config.repeat.initial_delay_ms, 400);
}

#[test]
fn test_rooted_resolves_against_mount_point() {
    let config = LauncherConfig::default();
    let scan = config.scan.rooted(Path::new("/vol/external01"));
    assert_eq!(scan.apps_root, PathBuf::from("/vol/external01/wiiu/apps"));
    assert_eq!(
        scan.ignore_file,
        PathBuf::from("/vol/external01/switchu/ignore.txt")
    );
}
