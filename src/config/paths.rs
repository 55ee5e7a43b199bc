// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (CLI, tests)
//! 2. **Environment variable** (`STUDIO_GALLERY_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "StudioGallery";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "STUDIO_GALLERY_CONFIG_DIR";

/// Returns the application config directory path.
///
/// - Linux: `~/.config/StudioGallery/`
/// - macOS: `~/Library/Application Support/StudioGallery/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\StudioGallery\`
#[must_use]
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the config directory with an optional override.
#[must_use]
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    resolve_config_dir(std::env::var(ENV_CONFIG_DIR).ok())
}

/// Picks the environment value when non-empty, else the platform default.
fn resolve_config_dir(env_value: Option<String>) -> Option<PathBuf> {
    if let Some(env_path) = env_value.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(env_path));
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
