use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Package bundle extension. A bundle always wins over a raw executable.
const BUNDLE_EXT: &str = "wuhb";
/// Raw executable extension, used only when the folder has no bundle.
const EXECUTABLE_EXT: &str = "rpx";

/// Finds the launchable file inside one app folder.
///
/// Stops at the first bundle; keeps scanning for an executable while only
/// that has been seen. `Ok(None)` means the folder holds nothing launchable.
pub(crate) fn find_launchable(dir: &Path) -> io::Result<Option<PathBuf>> {
    let mut executable = None;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some(BUNDLE_EXT) => return Ok(Some(path)),
            Some(EXECUTABLE_EXT) if executable.is_none() => executable = Some(path),
            _ => {}
        }
    }

    Ok(executable)
}
