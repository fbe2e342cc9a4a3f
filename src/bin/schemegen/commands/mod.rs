//! Command implementations

pub mod completions;
pub mod generate;
pub mod list;

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::cli::ScanArgs;
use schemegen::util::config::{global_config_path, load_config, project_config_path};
use schemegen::util::Config;

/// Resolve the scan root and load the configuration for it.
///
/// An explicit `--config` file replaces the project config; command-line
/// flags override both.
pub fn load_scan_config(scan: &ScanArgs) -> Result<(PathBuf, Config)> {
    let root = match &scan.root {
        Some(root) => root.clone(),
        None => std::env::current_dir()?,
    };
    if !root.is_dir() {
        bail!("`{}` is not a directory", root.display());
    }

    let global = global_config_path();
    let mut config = match &scan.config {
        Some(path) => {
            let mut config = load_config(global.as_deref(), &PathBuf::new())?;
            config.merge(Config::load(path)?);
            config
        }
        None => load_config(global.as_deref(), &project_config_path(&root))?,
    };

    if let Some(pattern) = &scan.pattern {
        config.discover.pattern = Some(pattern.clone());
    }

    Ok((root, config))
}
