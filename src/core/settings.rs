//! Session settings

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default move log file name, relative to the working directory
pub const DEFAULT_LOG_FILENAME: &str = "log.txt";

/// User-adjustable session settings
///
/// Missing fields fall back to [`SessionConfig::default`], so older or
/// hand-written settings files keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Where the text move log is written
    pub log_path: PathBuf,
    /// Keep earlier games in the log instead of truncating it on start
    pub append: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            log_path: PathBuf::from(DEFAULT_LOG_FILENAME),
            append: true,
        }
    }
}
