pub(crate) mod config;
pub use config::{LauncherConfig, LauncherConfigError, RepeatConfig, ScanConfig};

pub(crate) mod entry;
pub use entry::{AppEntry, Icon, ODD_DEVICE, SourceKind};

pub(crate) mod layout;
pub use layout::Layout;
