//! The view context: live page state and the load orchestration.
//!
//! A [`ViewState`] is created once and lives for the whole session. It owns
//! the header, the result container, the stylesheet toggle and the emulator
//! panel. [`ViewState::load`] is the error boundary: fetch and parse failures
//! become a failure header, never an error returned to the caller.

use ardu_shelf_catalog::{Catalog, DisplayProjection, Projector};
use ardu_shelf_frontend::{
    DEFAULT_VIEWPORT_WIDTH, EmulatorInstance, EmulatorPanel, PageLayout, RenderOptions,
    RenderedView, StyleToggle, render_view, write_page,
};

use crate::fetch::{CatalogFetcher, CatalogSource, fetch_catalog};

/// Result of a catalog load, as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { rendered: usize, skipped: usize },
    Failed,
}

pub struct ViewState {
    projector: Projector,
    options: RenderOptions,
    view: RenderedView,
    catalog: Option<Catalog>,
    projections: Vec<DisplayProjection>,
    style: StyleToggle,
    viewport_width: u32,
    emulator: EmulatorPanel,
}

impl ViewState {
    pub fn new(projector: Projector, options: RenderOptions) -> Self {
        Self {
            projector,
            options,
            view: RenderedView::status(""),
            catalog: None,
            projections: Vec::new(),
            style: StyleToggle::default(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            emulator: EmulatorPanel::new(),
        }
    }

    /// Set the viewport width the stylesheet is evaluated against on load.
    pub fn with_viewport_width(mut self, width: u32) -> Self {
        self.viewport_width = width;
        self
    }

    /// Current view tree.
    pub fn view(&self) -> &RenderedView {
        &self.view
    }

    /// The last successfully loaded catalog.
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// Projections behind the rendered blocks, in block order.
    pub fn projections(&self) -> &[DisplayProjection] {
        &self.projections
    }

    pub fn style(&self) -> &StyleToggle {
        &self.style
    }

    pub fn emulator(&self) -> &EmulatorPanel {
        &self.emulator
    }

    /// Remove every rendered block and hide the result container.
    pub fn clear(&mut self) {
        self.view.blocks.clear();
        self.view.result_visible = false;
        self.catalog = None;
        self.projections.clear();
    }

    /// Install a rendered view as the live one.
    pub fn apply(&mut self, view: RenderedView) {
        self.view = view;
    }

    /// Clear, fetch, and render a catalog.
    ///
    /// The stylesheet is evaluated first, forced, against the configured
    /// viewport width. On failure the header shows the failure text, no
    /// blocks are present and the result container stays hidden. The error is
    /// only logged.
    pub fn load(&mut self, fetcher: &dyn CatalogFetcher, source: &CatalogSource) -> LoadOutcome {
        self.resize(self.viewport_width, true);
        self.clear();
        self.apply(RenderedView::loading());
        log::debug!("Loading catalog from {source}");

        let catalog = match fetch_catalog(fetcher, source) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("Failed to load catalog from {source}: {e}");
                self.apply(RenderedView::failure());
                return LoadOutcome::Failed;
            }
        };

        let projections = self.projector.project_catalog(&catalog);
        let skipped = catalog.items.len() - projections.len();
        if skipped > 0 {
            log::debug!("Skipped {skipped} item(s) without a binary");
        }

        let view = render_view(&catalog.header_text(), &projections, &self.options);
        let rendered = view.blocks.len();
        self.apply(view);
        self.projections = projections;
        self.catalog = Some(catalog);

        LoadOutcome::Loaded { rendered, skipped }
    }

    /// Re-evaluate the list stylesheet for a viewport width.
    pub fn resize(&mut self, viewport_width: u32, force: bool) -> bool {
        self.viewport_width = viewport_width;
        self.style.switch(viewport_width, force)
    }

    /// Open the emulator on the binary of a rendered block.
    pub fn play(&mut self, index: usize) -> Option<&EmulatorInstance> {
        let binary = self.view.blocks.get(index)?.binary_href.clone();
        Some(self.emulator.play(&binary))
    }

    /// Close the most recently opened emulator.
    pub fn close_emulator(&mut self) -> Option<EmulatorInstance> {
        self.emulator.close()
    }

    /// Serialize the current state as a page.
    pub fn to_html(&self, layout: &PageLayout) -> String {
        write_page(&self.view, layout, &self.style, &self.emulator)
    }
}
