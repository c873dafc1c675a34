//! Core module - session infrastructure
//!
//! - [`SessionConfig`] - user settings (move log location and mode)
//! - [`settings_persistence`] - JSON load/save of the settings
//! - [`SessionError`] - the session-wide error type
//! - [`init_tracing`] - log output setup

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_persistence;

// Re-export commonly used items
pub use error::{SessionError, SessionResult};
pub use logging::init_tracing;
pub use settings::SessionConfig;
pub use settings_persistence::{load_settings, load_settings_or_default, save_settings, settings_path};
