pub mod catalog;
pub mod input;
pub mod menu;
pub mod types;

pub use catalog::{Catalog, CatalogBuilder, IgnoreSet, TitleCategory, TitleDatabase, TitleRecord};
pub use input::{ButtonState, Buttons, CombinedInput, InputSource};
pub use menu::{LaunchTarget, MenuState, Row};
pub use types::{AppEntry, Icon, LauncherConfig, Layout, SourceKind};
