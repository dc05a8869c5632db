use error::TitleDbError;

/// Application categories in the platform title database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleCategory {
    Game,
    GameDemo,
    SystemApplication,
}

/// The categories that show up as tiles. System applets never do.
pub(crate) const GAME_CATEGORIES: &[TitleCategory] =
    &[TitleCategory::Game, TitleCategory::GameDemo];

/// One installed title as reported by the platform.
#[derive(Debug, Clone)]
pub struct TitleRecord {
    pub title_id: u64,
    /// Install path of the title's content.
    pub path: String,
    /// Origin medium tag ("mlc", "usb", "odd", ...).
    pub storage_device: String,
    pub category: TitleCategory,
}

/// Platform title-database seam. The core only ever sees records and raw
/// metadata blobs; decoding happens on this side.
pub trait TitleDatabase {
    /// Lists installed titles restricted to `categories`.
    fn installed_titles(&self, categories: &[TitleCategory])
    -> Result<Vec<TitleRecord>, TitleDbError>;

    /// Raw contents of the title's `meta.xml`, if readable.
    fn title_meta_xml(&self, title_id: u64) -> Option<String>;

    /// Platform-provided icon image bytes, if present.
    fn title_icon(&self, title_id: u64) -> Option<Vec<u8>>;
}

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum TitleDbError {
        #[error("title database unavailable: {0}")]
        Unavailable(String),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
    }
}

/// Pulls the display name out of a `meta.xml`-style blob: the text between
/// the first `<name>` and the following `</name>`. No full XML parse; the
/// platform writes these files, they are not adversarial.
pub(crate) fn extract_meta_name(xml: &str) -> Option<String> {
    let start = xml.find("<name>")? + "<name>".len();
    let end = xml[start..].find("</name>")? + start;
    let name = xml[start..end].trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_owned())
    }
}

/// Folder-name-safe key for custom icon overrides: alphanumerics kept,
/// spaces become underscores, everything else dropped.
pub(crate) fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() {
                Some(c)
            } else if c == ' ' {
                Some('_')
            } else {
                None
            }
        })
        .collect()
}
