//! Path utilities for the orders CLI.

use std::path::PathBuf;

/// Returns the booktown home directory (`~/.booktown/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".booktown")
}

/// Returns the default config file path (`~/.booktown/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
