//! Repository catalog data model, JSON loading, and the display fallback
//! policy.
//!
//! This crate knows nothing about HTML or networking. It turns catalog JSON
//! into typed [`Catalog`]/[`Item`] values and projects items into
//! [`DisplayProjection`]s ready for a renderer.

pub mod json;
pub mod projection;
pub mod types;

pub use json::{CatalogError, parse_catalog};
pub use projection::{
    DisplayProjection, FieldSource, NO_TITLE, PLACEHOLDER_IMAGE, Projector, resolve,
};
pub use types::*;
