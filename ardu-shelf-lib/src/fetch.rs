//! Catalog fetching: target resolution and a single GET + JSON parse.

use std::fmt;
use std::path::{Path, PathBuf};

use ardu_shelf_catalog::{Catalog, parse_catalog};

use crate::error::FetchError;

/// Catalog path used when no target is given.
pub const DEFAULT_CATALOG_PATH: &str = "repository.json";

/// Public CORS relay used to reach catalogs on other hosts.
pub const DEFAULT_RELAY: &str = "https://cors-anywhere.herokuapp.com/";

/// Extract the catalog target from a page query string.
///
/// Everything after the first `?` is the target, verbatim; it is not split
/// into key/value pairs. Accepts a bare query (`?https://...`) or a whole
/// page URL. Returns `None` when there is no query or it is empty.
pub fn target_from_query(search: &str) -> Option<&str> {
    let (_, target) = search.split_once('?')?;
    if target.is_empty() { None } else { Some(target) }
}

/// Shareable page URL that reloads `target` when opened.
pub fn permalink(page_base: &str, target: &str) -> String {
    let base = page_base.split_once('?').map_or(page_base, |(b, _)| b);
    format!("{base}?{target}")
}

/// Whether a target points at another host.
pub fn is_external(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

/// Where a catalog document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Remote(String),
    Local(PathBuf),
}

impl CatalogSource {
    /// Resolve a target. External URLs become remote sources, prefixed with
    /// `relay` when one is given; anything else is a path relative to
    /// `base_dir`.
    pub fn resolve(target: &str, relay: Option<&str>, base_dir: &Path) -> Self {
        if is_external(target) {
            match relay {
                Some(prefix) => Self::Remote(format!("{prefix}{target}")),
                None => Self::Remote(target.to_string()),
            }
        } else {
            Self::Local(base_dir.join(target))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => f.write_str(url),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Reads the raw text of a catalog document.
pub trait CatalogFetcher {
    fn fetch_text(&self, source: &CatalogSource) -> Result<String, FetchError>;
}

/// Fetcher backed by a blocking HTTP client for remote sources and the file
/// system for local ones.
pub struct HttpFetcher {
    http: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("ardu-shelf/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }
}

impl CatalogFetcher for HttpFetcher {
    fn fetch_text(&self, source: &CatalogSource) -> Result<String, FetchError> {
        match source {
            CatalogSource::Remote(url) => {
                let resp = self.http.get(url).send()?;
                let status = resp.status();
                if !status.is_success() {
                    return Err(FetchError::Status {
                        status: status.as_u16(),
                        url: url.clone(),
                    });
                }
                Ok(resp.text()?)
            }
            CatalogSource::Local(path) => read_local(path),
        }
    }
}

fn read_local(path: &Path) -> Result<String, FetchError> {
    std::fs::read_to_string(path).map_err(|e| FetchError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

/// Fetch and parse a catalog. Transport and parse failures both come back
/// as [`FetchError`].
pub fn fetch_catalog(
    fetcher: &dyn CatalogFetcher,
    source: &CatalogSource,
) -> Result<Catalog, FetchError> {
    let text = fetcher.fetch_text(source)?;
    log::debug!("Fetched {} bytes from {source}", text.len());
    Ok(parse_catalog(&text)?)
}

#[cfg(test)]
#[path = "tests/fetch_tests.rs"]
mod tests;
