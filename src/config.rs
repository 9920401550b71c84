use crate::error::{Result, ScreenerError};
use crate::types::config::ScreenerConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "screener.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".screener/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/screener/config.toml";

/// Loads the layered configuration for a screening run rooted at `root`.
///
/// Layers, lowest precedence first: the global file under `$HOME`, then
/// `screener.toml` (or `explicit` when given) and `.screener/local.toml`
/// in the root directory. Returns `None` when no layer exists.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Option<ScreenerConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<Option<ScreenerConfig>> {
    // a single resume file is screened with the config beside it
    let root = if root.is_file() {
        root.parent().unwrap_or(Path::new("."))
    } else {
        root
    };

    let repo_path = match explicit {
        Some(path) if !path.exists() => {
            return Err(ScreenerError::PathNotFound(path.display().to_string()));
        }
        Some(path) => path.to_path_buf(),
        None => root.join(DEFAULT_CONFIG_FILE),
    };

    let local_path = root.join(DEFAULT_LOCAL_FILE);
    let mut merged = Value::Table(Map::new());
    let mut found = false;
    for path in [global_path, Some(repo_path.as_path()), Some(local_path.as_path())]
        .into_iter()
        .flatten()
    {
        found |= merge_file_if_exists(&mut merged, path)?;
    }
    if !found {
        return Ok(None);
    }

    let cfg: ScreenerConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ScreenerError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }
    debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ScreenerError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
