//! Catalog loading for the ardu-shelf tools.
//!
//! Resolves catalog targets, fetches and parses the document, and keeps the
//! live view state that the page is written from.

pub mod error;
pub mod fetch;
pub mod session;
pub mod settings;

pub use error::{FetchError, SettingsError};
pub use fetch::{
    CatalogFetcher, CatalogSource, DEFAULT_CATALOG_PATH, DEFAULT_RELAY, HttpFetcher,
    fetch_catalog, is_external, permalink, target_from_query,
};
pub use session::{LoadOutcome, ViewState};
pub use settings::{Settings, load_settings, resolve_target, settings_path};

// Re-export the types callers need alongside the view state.
pub use ardu_shelf_catalog::{Catalog, DisplayProjection, Item, Projector};
pub use ardu_shelf_frontend::{PageLayout, RenderOptions, RenderedView};
