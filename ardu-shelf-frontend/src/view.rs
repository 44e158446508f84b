//! Pure rendering from header text and projections to a view tree.
//!
//! Nothing here touches the output medium. A [`RenderedView`] is a complete
//! description of the header and the result container; the page writer in
//! [`crate::html`] serializes it.

use ardu_shelf_catalog::DisplayProjection;

use crate::emulator;
use crate::escape::escape_html;

/// Custom URL scheme handed to an external loader application.
pub const DEEP_LINK_SCHEME: &str = "arduboy:";

/// Header shown while a catalog load is in flight.
pub const LOADING_TEXT: &str = "Loading...";

/// Header shown after a failed load.
pub const FAILURE_TEXT: &str = "Error!!";

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Attach a "play" link per item that opens the embedded emulator.
    pub emulator: bool,
}

/// One visual block in the result container.
///
/// `title_html` and `info_spans` are markup; the URL fields are raw values
/// and are escaped when written as attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBlock {
    pub image_src: String,
    /// Catalog title, passed through unescaped.
    pub title_html: String,
    pub binary_href: String,
    pub deep_link_href: String,
    pub info_spans: Vec<String>,
    pub play_href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub header_html: String,
    pub blocks: Vec<ItemBlock>,
    pub result_visible: bool,
}

impl RenderedView {
    /// A view with only a header: used for the loading and failure states.
    pub fn status(text: &str) -> Self {
        Self {
            header_html: escape_html(text),
            blocks: Vec::new(),
            result_visible: false,
        }
    }

    pub fn loading() -> Self {
        Self::status(LOADING_TEXT)
    }

    pub fn failure() -> Self {
        Self::status(FAILURE_TEXT)
    }
}

/// Deep link for a binary under the custom scheme.
pub fn deep_link(binary_url: &str) -> String {
    format!("{DEEP_LINK_SCHEME}{binary_url}")
}

/// Render a header and a sequence of projections.
///
/// Projections without a binary URL produce no block. The result container
/// is visible only when at least one block was produced.
pub fn render_view(
    header_text: &str,
    projections: &[DisplayProjection],
    options: &RenderOptions,
) -> RenderedView {
    let blocks: Vec<ItemBlock> = projections
        .iter()
        .filter_map(|p| render_block(p, options))
        .collect();

    RenderedView {
        header_html: escape_html(header_text),
        result_visible: !blocks.is_empty(),
        blocks,
    }
}

fn render_block(projection: &DisplayProjection, options: &RenderOptions) -> Option<ItemBlock> {
    let binary_url = projection.binary_url.as_deref().filter(|b| !b.is_empty())?;

    Some(ItemBlock {
        image_src: projection.image_url.clone(),
        title_html: projection.title.clone(),
        binary_href: binary_url.to_string(),
        deep_link_href: deep_link(binary_url),
        info_spans: projection
            .info_lines
            .iter()
            .map(|line| escape_html(line))
            .collect(),
        play_href: options.emulator.then(|| emulator::embed_url(binary_url)),
    })
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
