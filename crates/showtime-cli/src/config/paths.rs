//! Config file location.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Config file name inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Resolves the config file path.
///
/// Order: `dir` (from `--dir`), then `$XDG_CONFIG_HOME/showtime`, then
/// `$HOME/.config/showtime`.
///
/// # Errors
///
/// Returns an error if no `dir` is given and neither `XDG_CONFIG_HOME` nor
/// `HOME` is set.
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    let xdg = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
    let home = std::env::var_os("HOME").map(PathBuf::from);
    config_path_from(dir.map(PathBuf::as_path), xdg.as_deref(), home.as_deref())
}

/// Picks the config path from explicit inputs. Empty env values count as unset.
fn config_path_from(
    dir: Option<&Path>,
    xdg: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.join(CONFIG_FILE));
    }
    let non_empty = |p: &&Path| !p.as_os_str().is_empty();
    if let Some(base) = xdg.filter(non_empty) {
        return Ok(base.join("showtime").join(CONFIG_FILE));
    }
    if let Some(base) = home.filter(non_empty) {
        return Ok(base.join(".config").join("showtime").join(CONFIG_FILE));
    }
    bail!("cannot locate config directory: set --dir, XDG_CONFIG_HOME or HOME");
}
