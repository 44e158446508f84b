//! Data model types for repository catalogs.
//!
//! A catalog is one JSON document: a repository header plus a loosely typed
//! list of items. Every item field is optional and presence is explicit
//! through `Option`, so the projection rules can test it directly.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ── Catalog ─────────────────────────────────────────────────────────────────

/// The top-level repository document.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    /// Display name of the repository.
    pub repository: String,
    #[serde(default, deserialize_with = "text")]
    pub maintainer: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Catalog {
    /// Header line for the page: the repository name, followed by
    /// `by {maintainer}` when the catalog names one.
    pub fn header_text(&self) -> String {
        match self.maintainer {
            Some(ref maintainer) => format!("{} by {}", self.repository, maintainer),
            None => self.repository.clone(),
        }
    }
}

// ── Item ────────────────────────────────────────────────────────────────────

/// One downloadable work in a catalog.
///
/// Text fields accept strings, numbers and booleans; `null` and nested
/// values count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Item {
    #[serde(default, deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "file_refs")]
    pub screenshots: Vec<FileRef>,
    #[serde(default, deserialize_with = "text")]
    pub cover: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub banner: Option<String>,
    #[serde(default, deserialize_with = "file_refs")]
    pub binaries: Vec<FileRef>,
    /// Packaged `.arduboy` archive URL.
    #[serde(default, deserialize_with = "text")]
    pub arduboy: Option<String>,
    /// Bare `.hex` image URL.
    #[serde(default, deserialize_with = "text")]
    pub hex: Option<String>,

    // Descriptive fields shown by listings only; they never reach the page.
    #[serde(default, deserialize_with = "text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub url: Option<String>,
    #[serde(default, rename = "sourceUrl", deserialize_with = "text")]
    pub source_url: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub date: Option<String>,
}

/// An entry of the `screenshots` or `binaries` sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileRef {
    pub filename: Option<String>,
}

impl FileRef {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
        }
    }
}

// ── Lenient field decoding ──────────────────────────────────────────────────

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(scalar_text))
}

/// A sequence of `{ "filename": ... }` objects. Anything that is not an
/// array decodes as empty; array entries without a usable filename are kept
/// as `FileRef { filename: None }` so positions are preserved.
fn file_refs<'de, D>(deserializer: D) -> Result<Vec<FileRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(entries)) = value else {
        return Ok(Vec::new());
    };
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            Value::Object(mut map) => FileRef {
                filename: map.remove("filename").and_then(scalar_text),
            },
            _ => FileRef::default(),
        })
        .collect())
}
