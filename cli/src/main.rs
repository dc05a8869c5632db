//! Scans an SD-card-shaped directory tree the way the launcher would on
//! console and prints the resulting catalog. Useful for checking a card
//! layout (and the ignore list) from a PC before putting it in the console.

use std::path::PathBuf;
use std::process::ExitCode;

use log::warn;
use switchu_core::{CatalogBuilder, LauncherConfig, SourceKind};

fn main() -> ExitCode {
    env_logger::init();

    let root = match std::env::args().nth(1) {
        Some(root) => PathBuf::from(root),
        None => {
            eprintln!("usage: switchu <sd-root>");
            return ExitCode::FAILURE;
        }
    };

    let config = match LauncherConfig::load(&LauncherConfig::path(&root)) {
        Ok(config) => config,
        Err(err) => {
            warn!("config unreadable, using defaults: {err}");
            LauncherConfig::default()
        }
    };

    // No title database on a PC host; the catalog holds homebrew only.
    let scan = config.scan.rooted(&root);
    let catalog = CatalogBuilder::new(&scan).build();

    println!("{} application(s)", catalog.len());
    for entry in catalog.entries() {
        let kind = match entry.source {
            SourceKind::Homebrew => "homebrew",
            SourceKind::SystemTitle => "title",
        };
        let icon = match &entry.icon {
            Some(icon) => format!("{}x{}", icon.width(), icon.height()),
            None => "missing".to_owned(),
        };
        println!(
            "  [{kind}] {} -> {} (icon {icon})",
            entry.title, entry.launch_path
        );
    }
    println!("report written to {}", scan.report_file.display());

    ExitCode::SUCCESS
}
