//! Data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.cache/go-resources/`
//! - macOS: `~/Library/Caches/go-resources/`
//! - Windows: `%LOCALAPPDATA%\go-resources\`

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "go-resources";

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    app_dir_in(&base)
}

/// `<base>/go-resources`, created if missing
fn app_dir_in(base: &Path) -> Result<PathBuf> {
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}
