use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use crate::types::AppEntry;

/// Writes the plain-text scan report: one line per entry with title, path,
/// device and title id. Diagnostic only, never read back.
pub(crate) fn write(path: &Path, entries: &[AppEntry]) -> io::Result<()> {
    let mut out = String::new();
    for entry in entries {
        let id = entry
            .title_id
            .map(|id| format!("{id:016x}"))
            .unwrap_or_else(|| "-".to_owned());
        // A write to a String cannot fail.
        let _ = writeln!(
            out,
            "{} | {} | {} | {}",
            entry.title, entry.launch_path, entry.storage_device, id
        );
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, out)
}
