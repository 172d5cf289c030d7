//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/deck/`, `~/.cache/deck/`
//! - macOS: `~/Library/Application Support/deck/`, `~/Library/Caches/deck/`
//! - Windows: `%APPDATA%\deck\`, `%LOCALAPPDATA%\deck\`

use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "deck";
const STORAGE_FILE: &str = "storage.json";

/// Get the application config directory
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory, where release builds write their logs
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to the persisted user/preferences file
pub fn storage_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(STORAGE_FILE))
}
