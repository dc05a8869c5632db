//! Application discovery: merges sideloaded homebrew folders and installed
//! system titles into one ordered catalog.

use std::fs;

use log::{debug, error, warn};

use crate::types::{AppEntry, ODD_DEVICE, ScanConfig, SourceKind};

pub(crate) mod homebrew;
pub(crate) mod icons;
pub(crate) mod ignore;
pub(crate) mod report;
pub(crate) mod titles;

pub use ignore::IgnoreSet;
pub use titles::{TitleCategory, TitleDatabase, TitleRecord, error::TitleDbError};

/// Display name used when a title's metadata cannot be read.
pub const PLACEHOLDER_TITLE: &str = "Unknown";

/// The ordered application list produced by one scan. Owns every icon it
/// resolved; replacing the catalog drops them all.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<AppEntry>,
}

impl Catalog {
    /// Wraps an already-assembled entry list. Scans go through
    /// [`CatalogBuilder`]; this is for synthetic lists.
    pub fn from_entries(entries: Vec<AppEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[AppEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&AppEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Scans the configured sources and assembles a [`Catalog`].
///
/// Per-entry failures degrade or skip that entry; an unreachable source
/// contributes nothing. Building never fails outright.
pub struct CatalogBuilder<'a> {
    scan: &'a ScanConfig,
    title_db: Option<&'a dyn TitleDatabase>,
}

impl<'a> CatalogBuilder<'a> {
    pub fn new(scan: &'a ScanConfig) -> Self {
        Self {
            scan,
            title_db: None,
        }
    }

    /// Attaches the platform title database. Without one the catalog holds
    /// homebrew entries only.
    pub fn with_title_database(mut self, db: &'a dyn TitleDatabase) -> Self {
        self.title_db = Some(db);
        self
    }

    pub fn build(&self) -> Catalog {
        let ignore = IgnoreSet::load(&self.scan.ignore_file);
        let mut entries = Vec::new();

        self.scan_homebrew(&ignore, &mut entries);
        self.scan_titles(&mut entries);

        if let Err(err) = report::write(&self.scan.report_file, &entries) {
            warn!(
                "could not write scan report {}: {err}",
                self.scan.report_file.display()
            );
        }

        Catalog { entries }
    }

    fn scan_homebrew(&self, ignore: &IgnoreSet, entries: &mut Vec<AppEntry>) {
        let root = &self.scan.apps_root;
        let dir = match fs::read_dir(root) {
            Ok(dir) => dir,
            Err(err) => {
                error!("homebrew root {} unreachable: {err}", root.display());
                return;
            }
        };

        // Directory iteration order is platform-defined; sort by folder name
        // so the tile row is stable across scans.
        let mut folders: Vec<_> = dir
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(err) => {
                    warn!("unreadable entry under {}: {err}", root.display());
                    None
                }
            })
            .filter(|path| path.is_dir())
            .collect();
        folders.sort();

        for path in folders {
            if entries.len() >= self.scan.max_entries {
                break;
            }
            let Some(folder) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if ignore.contains(folder) {
                debug!("skipping ignored folder {folder}");
                continue;
            }
            let launchable = match homebrew::find_launchable(&path) {
                Ok(Some(launchable)) => launchable,
                Ok(None) => {
                    warn!("no launchable file in {folder}");
                    continue;
                }
                Err(err) => {
                    warn!("cannot scan {folder}: {err}");
                    continue;
                }
            };
            let Some(icon) = icons::resolve_homebrew(&self.scan.custom_icon_dir, folder, &path)
            else {
                warn!("no icon for {folder}, skipping");
                continue;
            };
            entries.push(AppEntry {
                title: folder.to_owned(),
                launch_path: launchable.display().to_string(),
                source: SourceKind::Homebrew,
                storage_device: "sd".to_owned(),
                title_id: None,
                icon: Some(icon),
            });
        }
    }

    fn scan_titles(&self, entries: &mut Vec<AppEntry>) {
        let Some(db) = self.title_db else {
            return;
        };
        let records = match db.installed_titles(titles::GAME_CATEGORIES) {
            Ok(records) => records,
            Err(err) => {
                error!("title database unreachable: {err}");
                return;
            }
        };

        for record in records {
            if entries.len() >= self.scan.max_entries {
                break;
            }
            let title = db
                .title_meta_xml(record.title_id)
                .and_then(|xml| titles::extract_meta_name(&xml))
                .unwrap_or_else(|| {
                    debug!("no metadata name for title {:016x}", record.title_id);
                    PLACEHOLDER_TITLE.to_owned()
                });

            let custom = self
                .scan
                .custom_icon_dir
                .join(format!("{}.png", titles::sanitize_title(&title)));
            let icon = icons::load(&custom).or_else(|| {
                db.title_icon(record.title_id)
                    .and_then(|bytes| icons::decode(&bytes))
            });
            if icon.is_none() {
                debug!("no icon for title {:016x}", record.title_id);
            }

            let entry = AppEntry {
                title,
                launch_path: record.path,
                source: SourceKind::SystemTitle,
                storage_device: record.storage_device,
                title_id: Some(record.title_id),
                icon,
            };

            // The disc title is always the first tile.
            if entry.storage_device == ODD_DEVICE {
                entries.insert(0, entry);
            } else {
                entries.push(entry);
            }
        }
    }
}
