use std::path::Path;

use log::debug;

use crate::types::Icon;

/// Custom-icon-first resolution for a homebrew folder: the override under
/// the custom icon directory wins over the folder's bundled `icon.png`.
pub(crate) fn resolve_homebrew(custom_dir: &Path, folder: &str, app_dir: &Path) -> Option<Icon> {
    load(&custom_dir.join(format!("{folder}.png"))).or_else(|| load(&app_dir.join("icon.png")))
}

/// Decodes an icon file. A missing or undecodable file is "no icon", never
/// an error.
pub(crate) fn load(path: &Path) -> Option<Icon> {
    if !path.is_file() {
        return None;
    }
    match image::open(path) {
        Ok(image) => Some(Icon::new(image)),
        Err(err) => {
            debug!("cannot decode icon {}: {err}", path.display());
            None
        }
    }
}

/// Decodes platform-provided icon bytes.
pub(crate) fn decode(bytes: &[u8]) -> Option<Icon> {
    match image::load_from_memory(bytes) {
        Ok(image) => Some(Icon::new(image)),
        Err(err) => {
            debug!("cannot decode platform icon: {err}");
            None
        }
    }
}
