use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use log::warn;

/// Folder names excluded from the homebrew scan. Loaded once before a scan;
/// immutable while it runs.
#[derive(Debug, Default)]
pub struct IgnoreSet {
    names: HashSet<String>,
}

impl IgnoreSet {
    /// Loads the ignore file: one folder name per line, whitespace-trimmed.
    /// A missing file yields an empty set, not an error.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(err) => {
                warn!("cannot read ignore file {}: {err}", path.display());
                Self::default()
            }
        }
    }

    pub fn parse(text: &str) -> Self {
        let names = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        Self { names }
    }

    pub fn contains(&self, folder: &str) -> bool {
        self.names.contains(folder)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
