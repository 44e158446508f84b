//! JSON decoding for repository catalogs.

use thiserror::Error;

use crate::types::Catalog;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a catalog document from its JSON text.
pub fn parse_catalog(text: &str) -> Result<Catalog, CatalogError> {
    Ok(serde_json::from_str(text)?)
}
