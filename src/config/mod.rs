// SPDX-License-Identifier: MPL-2.0
//! This module handles the gallery configuration, including loading and saving
//! it to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[store]` - Hosted photo store URL, key and request timeout
//! - `[gallery]` - Page size, scroll trigger and prefetch counts
//! - `[prefetch]` - Asset cache limits
//! - `[diagnostics]` - Event log capacity
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `STUDIO_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! `SUPABASE_URL` and `SUPABASE_ANON_KEY` override the `[store]` section
//! when set, see [`Config::apply_env_overrides`].
//!
//! # Examples
//!
//! ```no_run
//! use studio_gallery::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.gallery.page_size = Some(30);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::application::gallery::LoaderSettings;
use crate::diagnostics::BufferCapacity;
use crate::domain::gallery::{PageSize, PrefetchCount, ScrollThreshold};
use crate::error::{Error, Result};
use crate::infrastructure::rest::RestStoreConfig;
use crate::media::prefetch::PrefetchConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding `[store] base_url`.
pub const ENV_STORE_URL: &str = "SUPABASE_URL";

/// Environment variable overriding `[store] anon_key`.
pub const ENV_STORE_KEY: &str = "SUPABASE_ANON_KEY";

// =============================================================================
// Section Structs
// =============================================================================

/// Hosted photo store connection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Project URL, e.g. `https://abc.supabase.co`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Public anonymous API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anon_key: Option<String>,

    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            anon_key: None,
            request_timeout_secs: Some(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl StoreConfig {
    /// Request timeout, clamped to valid bounds.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Connection settings for the REST store, `None` unless both the URL
    /// and the key are set.
    #[must_use]
    pub fn rest_config(&self) -> Option<RestStoreConfig> {
        let base_url = self.base_url.as_deref().filter(|s| !s.trim().is_empty())?;
        let anon_key = self.anon_key.as_deref().filter(|s| !s.trim().is_empty())?;
        Some(RestStoreConfig::new(base_url.trim(), anon_key.trim()).with_timeout(self.request_timeout()))
    }
}

/// Paging and scroll trigger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    #[serde(default = "default_page_size", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Remaining distance (px) below the viewport that triggers the next page.
    #[serde(
        default = "default_scroll_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_threshold_px: Option<f64>,

    /// Thumbnails warmed for each new page.
    #[serde(
        default = "default_thumbnail_prefetch",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_prefetch: Option<usize>,

    /// Full-size images warmed ahead of the lightbox.
    #[serde(
        default = "default_viewer_prefetch",
        skip_serializing_if = "Option::is_none"
    )]
    pub viewer_prefetch: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            scroll_threshold_px: default_scroll_threshold_px(),
            thumbnail_prefetch: default_thumbnail_prefetch(),
            viewer_prefetch: default_viewer_prefetch(),
        }
    }
}

/// Asset cache limits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrefetchCacheConfig {
    #[serde(default = "default_prefetch_enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default = "default_prefetch_max_bytes", skip_serializing_if = "Option::is_none")]
    pub max_bytes: Option<usize>,

    #[serde(
        default = "default_prefetch_max_entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_entries: Option<usize>,
}

impl Default for PrefetchCacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_prefetch_enabled(),
            max_bytes: default_prefetch_max_bytes(),
            max_entries: default_prefetch_max_entries(),
        }
    }
}

/// Event log settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticsConfig {
    #[serde(
        default = "default_event_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_event_buffer_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Complete gallery configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub prefetch: PrefetchCacheConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Loader tunables derived from this configuration, clamped to valid
    /// ranges.
    #[must_use]
    pub fn loader_settings(&self) -> LoaderSettings {
        let gallery = &self.gallery;
        let prefetch = if self.prefetch.enabled.unwrap_or(true) {
            PrefetchConfig::new(
                self.prefetch.max_bytes.unwrap_or(DEFAULT_PREFETCH_MAX_BYTES),
                self.prefetch.max_entries.unwrap_or(DEFAULT_PREFETCH_MAX_ENTRIES),
            )
        } else {
            PrefetchConfig::disabled()
        };

        LoaderSettings {
            page_size: PageSize::new(gallery.page_size.unwrap_or(DEFAULT_PAGE_SIZE)),
            scroll_threshold: ScrollThreshold::new(
                gallery
                    .scroll_threshold_px
                    .unwrap_or(DEFAULT_SCROLL_THRESHOLD_PX),
            ),
            thumbnail_prefetch: PrefetchCount::new(
                gallery
                    .thumbnail_prefetch
                    .unwrap_or(DEFAULT_THUMBNAIL_PREFETCH),
            ),
            viewer_prefetch: PrefetchCount::new(
                gallery.viewer_prefetch.unwrap_or(DEFAULT_VIEWER_PREFETCH),
            ),
            prefetch,
            log_capacity: BufferCapacity::new(
                self.diagnostics
                    .buffer_capacity
                    .unwrap_or(DEFAULT_EVENT_BUFFER_CAPACITY),
            ),
        }
    }

    /// Applies `SUPABASE_URL` / `SUPABASE_ANON_KEY` from the process
    /// environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|name| std::env::var(name).ok());
    }

    /// Applies store overrides from any variable lookup. Empty values are
    /// ignored.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(ENV_STORE_URL) {
            self.store.base_url = Some(url);
        }
        if let Some(key) = non_empty(ENV_STORE_KEY) {
            self.store.anon_key = Some(key);
        }
    }
}

// =============================================================================
// Default Value Functions (for serde)
// =============================================================================

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_page_size() -> Option<u32> {
    Some(DEFAULT_PAGE_SIZE)
}

fn default_scroll_threshold_px() -> Option<f64> {
    Some(DEFAULT_SCROLL_THRESHOLD_PX)
}

fn default_thumbnail_prefetch() -> Option<usize> {
    Some(DEFAULT_THUMBNAIL_PREFETCH)
}

fn default_viewer_prefetch() -> Option<usize> {
    Some(DEFAULT_VIEWER_PREFETCH)
}

fn default_prefetch_enabled() -> Option<bool> {
    Some(true)
}

fn default_prefetch_max_bytes() -> Option<usize> {
    Some(DEFAULT_PREFETCH_MAX_BYTES)
}

fn default_prefetch_max_entries() -> Option<usize> {
    Some(DEFAULT_PREFETCH_MAX_ENTRIES)
}

fn default_event_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_EVENT_BUFFER_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional directory override.
#[must_use]
pub fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(e) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "Could not load {}, using defaults: {e}",
                            path.display()
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
///
/// # Errors
///
/// Returns an error if the parent directory or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            store: StoreConfig {
                base_url: Some("https://abc.example.co".to_string()),
                anon_key: Some("anon".to_string()),
                request_timeout_secs: Some(10),
            },
            gallery: GalleryConfig {
                page_size: Some(12),
                scroll_threshold_px: Some(400.0),
                thumbnail_prefetch: Some(2),
                viewer_prefetch: Some(4),
            },
            prefetch: PrefetchCacheConfig {
                enabled: Some(false),
                max_bytes: Some(8 * 1024 * 1024),
                max_entries: Some(32),
            },
            diagnostics: DiagnosticsConfig {
                buffer_capacity: Some(64),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[gallery]\npage_size = 40\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.gallery.page_size, Some(40));
        assert_eq!(loaded.gallery.viewer_prefetch, Some(DEFAULT_VIEWER_PREFETCH));
        assert_eq!(loaded.store, StoreConfig::default());
        assert_eq!(loaded.diagnostics, DiagnosticsConfig::default());
    }

    #[test]
    fn load_from_path_errors_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        let warning = warning.expect("should warn about parse error");
        assert!(warning.contains("settings.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().join("deep");

        save_with_override(&Config::default(), Some(base_dir.clone())).expect("save should succeed");
        assert!(base_dir.join("settings.toml").exists());
    }

    #[test]
    fn loader_settings_clamp_out_of_range_values() {
        let config = Config {
            gallery: GalleryConfig {
                page_size: Some(0),
                scroll_threshold_px: Some(-50.0),
                thumbnail_prefetch: Some(1000),
                viewer_prefetch: None,
            },
            diagnostics: DiagnosticsConfig {
                buffer_capacity: Some(1),
            },
            ..Config::default()
        };

        let settings = config.loader_settings();
        assert_eq!(settings.page_size.value(), 1);
        assert!(settings.scroll_threshold.value().abs() < f64::EPSILON);
        assert_eq!(settings.thumbnail_prefetch.value(), 20);
        assert_eq!(settings.viewer_prefetch.value(), DEFAULT_VIEWER_PREFETCH);
        assert_eq!(settings.log_capacity.value(), 16);
    }

    #[test]
    fn loader_settings_honor_disabled_prefetch() {
        let config = Config {
            prefetch: PrefetchCacheConfig {
                enabled: Some(false),
                ..PrefetchCacheConfig::default()
            },
            ..Config::default()
        };
        assert!(!config.loader_settings().prefetch.enabled);
    }

    #[test]
    fn default_settings_match_loader_defaults() {
        assert_eq!(Config::default().loader_settings(), LoaderSettings::default());
    }

    #[test]
    fn env_overrides_replace_store_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_STORE_URL, "https://env.example.co"),
            (ENV_STORE_KEY, ""),
        ]);
        let mut config = Config::default();
        config.store.anon_key = Some("file-key".to_string());

        config.apply_overrides_from(|name| vars.get(name).map(ToString::to_string));

        assert_eq!(config.store.base_url.as_deref(), Some("https://env.example.co"));
        assert_eq!(config.store.anon_key.as_deref(), Some("file-key"));
    }

    #[test]
    fn rest_config_requires_url_and_key() {
        let mut store = StoreConfig::default();
        assert!(store.rest_config().is_none());

        store.base_url = Some("https://abc.example.co".to_string());
        assert!(store.rest_config().is_none());

        store.anon_key = Some("anon".to_string());
        store.request_timeout_secs = Some(10_000);
        let rest = store.rest_config().expect("both values set");
        assert_eq!(rest.timeout, Duration::from_secs(MAX_REQUEST_TIMEOUT_SECS));
    }
}
