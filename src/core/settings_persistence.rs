//! Settings persistence
//!
//! Saves and loads [`SessionConfig`] to/from a JSON file.
//!
//! # File Location
//!
//! By default settings live in `settings.json` under the user's configuration
//! directory (see [`settings_path`]). Callers may pass any other path.
//!
//! # Error Handling
//!
//! [`load_settings`] and [`save_settings`] return errors. The
//! [`load_settings_or_default`] variant logs failures and falls back to the
//! defaults, so a broken settings file never stops a game from starting.

use crate::core::error::SessionResult;
use crate::core::settings::SessionConfig;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Resolve the default settings file path
///
/// Returns `settings.json` in the user's configuration directory, e.g.
/// `~/.config/shashki/settings.json` on Linux. Falls back to a local
/// `settings.json` if the system config dir cannot be found.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "Shashki") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and parse a settings file
pub fn load_settings(path: &Path) -> SessionResult<SessionConfig> {
    let contents = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&contents)?;
    info!("[SETTINGS] Loaded settings from {:?}", path);
    Ok(settings)
}

/// Load settings, falling back to defaults if the file is missing or invalid
pub fn load_settings_or_default(path: &Path) -> SessionConfig {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return SessionConfig::default();
    }

    match load_settings(path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            SessionConfig::default()
        }
    }
}

/// Write settings as pretty JSON, creating the parent directory if needed
pub fn save_settings(settings: &SessionConfig, path: &Path) -> SessionResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
