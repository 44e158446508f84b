//! Fallback policy that turns an [`Item`] into a render-ready
//! [`DisplayProjection`].
//!
//! Each display field is resolved from an ordered chain of [`FieldSource`]s.
//! The first source that yields a value wins; sources are never merged.

use serde::Serialize;

use crate::types::{Catalog, Item};

/// Title used when an item has neither `title` nor `name`.
pub const NO_TITLE: &str = "(no title)";

/// Image shown when an item has no screenshot, cover or banner.
pub const PLACEHOLDER_IMAGE: &str = "img/blank.gif";

/// One tier of a fallback chain.
#[derive(Clone, Copy)]
pub struct FieldSource {
    /// Catalog field the tier reads (e.g. `"screenshots"`, `"cover"`).
    pub field: &'static str,
    extract: fn(&Item) -> Option<&str>,
}

impl FieldSource {
    const fn new(field: &'static str, extract: fn(&Item) -> Option<&str>) -> Self {
        Self { field, extract }
    }

    /// The value this tier provides for `item`, if present.
    pub fn extract<'a>(&self, item: &'a Item) -> Option<&'a str> {
        (self.extract)(item)
    }
}

impl std::fmt::Debug for FieldSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FieldSource").field(&self.field).finish()
    }
}

fn title(item: &Item) -> Option<&str> {
    item.title.as_deref()
}
fn name(item: &Item) -> Option<&str> {
    item.name.as_deref()
}
fn version(item: &Item) -> Option<&str> {
    item.version.as_deref()
}
fn author(item: &Item) -> Option<&str> {
    item.author.as_deref()
}
fn genre(item: &Item) -> Option<&str> {
    item.genre.as_deref()
}
fn first_screenshot(item: &Item) -> Option<&str> {
    item.screenshots.first().and_then(|f| f.filename.as_deref())
}
fn cover(item: &Item) -> Option<&str> {
    item.cover.as_deref()
}
fn banner(item: &Item) -> Option<&str> {
    item.banner.as_deref()
}
fn first_binary(item: &Item) -> Option<&str> {
    item.binaries.first().and_then(|f| f.filename.as_deref())
}
fn arduboy(item: &Item) -> Option<&str> {
    item.arduboy.as_deref()
}
fn hex(item: &Item) -> Option<&str> {
    item.hex.as_deref()
}

pub const TITLE_SOURCES: &[FieldSource] = &[
    FieldSource::new("title", title),
    FieldSource::new("name", name),
];

pub const IMAGE_SOURCES: &[FieldSource] = &[
    FieldSource::new("screenshots", first_screenshot),
    FieldSource::new("cover", cover),
    FieldSource::new("banner", banner),
];

pub const BINARY_SOURCES: &[FieldSource] = &[
    FieldSource::new("binaries", first_binary),
    FieldSource::new("arduboy", arduboy),
    FieldSource::new("hex", hex),
];

/// Info lines in display order, each as `(prefix, source)`.
pub const INFO_SOURCES: &[(&str, FieldSource)] = &[
    ("version ", FieldSource::new("version", version)),
    ("by ", FieldSource::new("author", author)),
    ("Genre: ", FieldSource::new("genre", genre)),
];

/// Walk a chain and return the first tier that yields a value, along with
/// the value.
pub fn resolve<'a>(chain: &[FieldSource], item: &'a Item) -> Option<(&'static str, &'a str)> {
    chain
        .iter()
        .find_map(|source| source.extract(item).map(|value| (source.field, value)))
}

/// Normalized, render-ready view of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayProjection {
    pub title: String,
    pub info_lines: Vec<String>,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_url: Option<String>,
}

impl DisplayProjection {
    /// Whether the projection can produce a visible block.
    pub fn is_renderable(&self) -> bool {
        self.binary_url.as_deref().is_some_and(|b| !b.is_empty())
    }
}

/// Applies the fallback policy. Only the placeholder image is configurable.
#[derive(Debug, Clone)]
pub struct Projector {
    placeholder_image: String,
}

impl Default for Projector {
    fn default() -> Self {
        Self::new()
    }
}

impl Projector {
    pub fn new() -> Self {
        Self {
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder_image = placeholder.into();
        self
    }

    pub fn placeholder_image(&self) -> &str {
        &self.placeholder_image
    }

    /// Resolve every display field of `item`. The result may lack a binary
    /// URL; see [`Projector::project`] for the filtering variant.
    pub fn resolve(&self, item: &Item) -> DisplayProjection {
        let title = resolve(TITLE_SOURCES, item)
            .map(|(_, v)| v)
            .unwrap_or(NO_TITLE);

        let info_lines = INFO_SOURCES
            .iter()
            .filter_map(|(prefix, source)| source.extract(item).map(|v| format!("{prefix}{v}")))
            .collect();

        let image_url = resolve(IMAGE_SOURCES, item)
            .map(|(_, v)| v)
            .unwrap_or(&self.placeholder_image);

        // An empty value still wins its tier; it just cannot be downloaded.
        let binary_url = resolve(BINARY_SOURCES, item)
            .map(|(_, v)| v)
            .filter(|v| !v.is_empty())
            .map(str::to_string);

        DisplayProjection {
            title: title.to_string(),
            info_lines,
            image_url: image_url.to_string(),
            binary_url,
        }
    }

    /// Project an item, or `None` when no binary URL resolves (the item is
    /// skipped).
    pub fn project(&self, item: &Item) -> Option<DisplayProjection> {
        let projection = self.resolve(item);
        projection.is_renderable().then_some(projection)
    }

    /// Project every item of a catalog in catalog order, dropping skipped ones.
    pub fn project_catalog(&self, catalog: &Catalog) -> Vec<DisplayProjection> {
        catalog
            .items
            .iter()
            .filter_map(|item| self.project(item))
            .collect()
    }
}
