use image::DynamicImage;

/// Storage device tag of the optical disc drive. Titles installed on it are
/// pinned to the front of the catalog.
pub const ODD_DEVICE: &str = "odd";

/// Which source a catalog entry was discovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Sideloaded application folder under the homebrew apps root.
    Homebrew,
    /// Installed title from the platform title database.
    SystemTitle,
}

/// Decoded icon pixels, owned by the catalog for one build generation.
/// Dropped wholesale when the catalog is replaced.
#[derive(Debug, Clone)]
pub struct Icon {
    image: DynamicImage,
}

impl Icon {
    pub fn new(image: DynamicImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The decoded pixels, for upload into whatever texture format the
    /// renderer wants.
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }
}

/// One launchable application.
#[derive(Debug, Clone)]
pub struct AppEntry {
    /// Display name. Never empty; metadata failures fall back to a
    /// placeholder before construction.
    pub title: String,
    /// Filesystem path of the launchable file (homebrew) or the title's
    /// install path (system titles).
    pub launch_path: String,
    pub source: SourceKind,
    /// Origin medium tag ("sd", "mlc", "odd", ...).
    pub storage_device: String,
    /// Platform title id; `Some` for every `SystemTitle` entry.
    pub title_id: Option<u64>,
    /// `None` means "missing" and the renderer draws a placeholder box; the
    /// entry is still selectable and launchable.
    pub icon: Option<Icon>,
}
