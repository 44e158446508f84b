//! Application settings stored in `~/.config/ardu-shelf/settings.toml`.
//!
//! Every key is optional; missing keys take their defaults. Updates go
//! through `toml::Value` so unknown keys written by hand survive.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use ardu_shelf_catalog::PLACEHOLDER_IMAGE;
use ardu_shelf_frontend::DEFAULT_VIEWPORT_WIDTH;

use crate::error::SettingsError;
use crate::fetch::{DEFAULT_CATALOG_PATH, DEFAULT_RELAY, target_from_query};

/// Canonical path to the settings file: `~/.config/ardu-shelf/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("ardu-shelf").join("settings.toml")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub fetch: FetchSettings,
    pub render: RenderSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Target loaded when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    /// Prefix for external catalog URLs when relaying is requested.
    pub relay: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            relay: DEFAULT_RELAY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub placeholder_image: String,
    /// Page URL used when printing shareable links.
    pub page_base: String,
    /// Viewport width the list stylesheet is evaluated against on load.
    pub viewport_width: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            page_base: "index.html".to_string(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
        }
    }
}

/// Parse settings from a file. A missing file yields the defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(toml::from_str(&contents)?)
}

/// Load the settings file, falling back to defaults when it is unreadable.
pub fn load_settings() -> Settings {
    let path = settings_path();
    match load_settings_from(&path) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Ignoring {}: {e}", path.display());
            Settings::default()
        }
    }
}

/// Pick the catalog target using a priority chain:
///
/// 1. Explicit target argument
/// 2. Target carried in a page query string
/// 3. `catalog.default_source` from settings
/// 4. [`DEFAULT_CATALOG_PATH`]
pub fn resolve_target(
    explicit: Option<String>,
    query: Option<&str>,
    settings: &Settings,
) -> String {
    if let Some(t) = explicit {
        return t;
    }
    if let Some(t) = query.and_then(target_from_query) {
        return t.to_string();
    }
    if let Some(ref t) = settings.catalog.default_source {
        return t.clone();
    }
    DEFAULT_CATALOG_PATH.to_string()
}

/// Save (or clear) `catalog.default_source` in the settings file.
pub fn save_default_source(source: Option<&str>) -> io::Result<()> {
    save_default_source_to(&settings_path(), source)
}

/// Save (or clear) `catalog.default_source` in a specific settings file.
pub fn save_default_source_to(settings: &Path, source: Option<&str>) -> io::Result<()> {
    let mut doc: toml::Value = match std::fs::read_to_string(settings) {
        Ok(contents) => contents.parse::<toml::Value>().map_err(|e| {
            io::Error::other(format!("{} is not valid TOML: {e}", settings.display()))
        })?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => toml::Value::Table(Default::default()),
        Err(e) => return Err(e),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let catalog = table
        .entry("catalog")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let catalog_table = catalog
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[catalog] is not a table"))?;

    match source {
        Some(s) => {
            catalog_table.insert(
                "default_source".to_string(),
                toml::Value::String(s.to_string()),
            );
        }
        None => {
            catalog_table.remove("default_source");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Effective settings rendered as TOML, for display.
pub fn settings_string(settings: &Settings) -> Option<String> {
    toml::to_string_pretty(settings).ok()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
