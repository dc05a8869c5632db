use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Launcher settings, persisted as `switchu/config.toml` under the SD root.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub repeat: RepeatConfig,
}

impl LauncherConfig {
    /// Returns the config file path under the given SD root.
    pub fn path(root: &Path) -> PathBuf {
        root.join("switchu").join("config.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, LauncherConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), LauncherConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Catalog scan settings. Paths are relative to the SD root; use
/// [`ScanConfig::rooted`] to resolve them against a concrete mount point.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_apps_root")]
    pub apps_root: PathBuf,
    #[serde(default = "default_custom_icon_dir")]
    pub custom_icon_dir: PathBuf,
    #[serde(default = "default_ignore_file")]
    pub ignore_file: PathBuf,
    #[serde(default = "default_report_file")]
    pub report_file: PathBuf,
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            apps_root: default_apps_root(),
            custom_icon_dir: default_custom_icon_dir(),
            ignore_file: default_ignore_file(),
            report_file: default_report_file(),
            max_entries: default_max_entries(),
        }
    }
}

impl ScanConfig {
    /// Resolves every path against `root`. Paths that are already absolute
    /// stay as they are.
    pub fn rooted(&self, root: &Path) -> Self {
        Self {
            apps_root: root.join(&self.apps_root),
            custom_icon_dir: root.join(&self.custom_icon_dir),
            ignore_file: root.join(&self.ignore_file),
            report_file: root.join(&self.report_file),
            max_entries: self.max_entries,
        }
    }
}

fn default_apps_root() -> PathBuf {
    PathBuf::from("wiiu/apps")
}

fn default_custom_icon_dir() -> PathBuf {
    PathBuf::from("switchu/icons")
}

fn default_ignore_file() -> PathBuf {
    PathBuf::from("switchu/ignore.txt")
}

fn default_report_file() -> PathBuf {
    PathBuf::from("switchu/scan_report.txt")
}

fn default_max_entries() -> usize {
    12
}

/// Directional auto-repeat timing.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RepeatConfig {
    /// Delay between the immediate first step and the second one.
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
    /// Interval between steps once fast repeat has started.
    #[serde(default = "default_repeat_interval_ms")]
    pub repeat_interval_ms: u64,
}

impl Default for RepeatConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: default_initial_delay_ms(),
            repeat_interval_ms: default_repeat_interval_ms(),
        }
    }
}

fn default_initial_delay_ms() -> u64 {
    400
}

fn default_repeat_interval_ms() -> u64 {
    100
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum LauncherConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
