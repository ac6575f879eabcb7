//! Theme and settings for npmtag.
//!
//! Palette, user settings, and key bindings are read from plain
//! `key = value` files in the config directory.

/// Default file contents written on first run.
mod config;
/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings loading.
mod settings;
/// Palette store.
mod store;
/// Theme type definitions.
mod types;

pub use paths::{config_dir, logs_dir};
pub use settings::{load_settings_from, parse_settings, settings};
pub use store::theme;
pub use types::{KeyChord, KeyMap, Settings, Theme};
