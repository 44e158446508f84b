use std::cell::RefCell;
use std::path::PathBuf;

use ardu_shelf_lib::{
    CatalogFetcher, CatalogSource, FetchError, LoadOutcome, PageLayout, Projector, RenderOptions,
    ViewState,
};

/// Serves canned responses in order and records what was requested.
struct ScriptedFetcher {
    responses: RefCell<Vec<Result<String, FetchError>>>,
    requested: RefCell<Vec<CatalogSource>>,
}

impl ScriptedFetcher {
    fn new(responses: Vec<Result<String, FetchError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into_iter().rev().collect()),
            requested: RefCell::new(Vec::new()),
        }
    }
}

impl CatalogFetcher for ScriptedFetcher {
    fn fetch_text(&self, source: &CatalogSource) -> Result<String, FetchError> {
        self.requested.borrow_mut().push(source.clone());
        self.responses
            .borrow_mut()
            .pop()
            .expect("unexpected fetch")
    }
}

fn network_down() -> FetchError {
    FetchError::Io {
        path: "repository.json".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
    }
}

fn source() -> CatalogSource {
    CatalogSource::Local(PathBuf::from("repository.json"))
}

const DEMO: &str =
    r#"{"repository":"Demo","items":[{"name":"Game A","hex":"a.hex"},{"name":"Game B"}]}"#;

#[test]
fn demo_catalog_renders_one_block() {
    let fetcher = ScriptedFetcher::new(vec![Ok(DEMO.to_string())]);
    let mut state = ViewState::new(Projector::new(), RenderOptions::default());

    let outcome = state.load(&fetcher, &source());
    assert_eq!(outcome, LoadOutcome::Loaded { rendered: 1, skipped: 1 });

    let view = state.view();
    assert_eq!(view.header_html, "Demo");
    assert!(view.result_visible);
    assert_eq!(view.blocks.len(), 1);
    assert_eq!(view.blocks[0].title_html, "Game A");
    assert_eq!(state.projections().len(), 1);
    assert_eq!(fetcher.requested.borrow().as_slice(), &[source()]);
}

#[test]
fn fetch_failure_shows_failure_header() {
    let fetcher = ScriptedFetcher::new(vec![Err(network_down())]);
    let mut state = ViewState::new(Projector::new(), RenderOptions::default());

    assert_eq!(state.load(&fetcher, &source()), LoadOutcome::Failed);
    assert_eq!(state.view().header_html, "Error!!");
    assert!(state.view().blocks.is_empty());
    assert!(!state.view().result_visible);
}

#[test]
fn malformed_json_shows_failure_header() {
    let fetcher = ScriptedFetcher::new(vec![Ok("<html>404</html>".to_string())]);
    let mut state = ViewState::new(Projector::new(), RenderOptions::default());

    assert_eq!(state.load(&fetcher, &source()), LoadOutcome::Failed);
    assert_eq!(state.view().header_html, "Error!!");
    assert!(!state.view().result_visible);
}

#[test]
fn failed_reload_clears_previous_items() {
    let fetcher = ScriptedFetcher::new(vec![Ok(DEMO.to_string()), Err(network_down())]);
    let mut state = ViewState::new(Projector::new(), RenderOptions::default());

    state.load(&fetcher, &source());
    assert_eq!(state.view().blocks.len(), 1);

    state.load(&fetcher, &source());
    assert!(state.view().blocks.is_empty());
    assert!(state.projections().is_empty());
    assert!(!state.view().result_visible);
}

#[test]
fn catalog_without_renderable_items_stays_hidden() {
    let fetcher = ScriptedFetcher::new(vec![Ok(
        r#"{"repository":"Empty","maintainer":"nobody","items":[{"name":"No Binary"}]}"#.to_string(),
    )]);
    let mut state = ViewState::new(Projector::new(), RenderOptions::default());

    let outcome = state.load(&fetcher, &source());
    assert_eq!(outcome, LoadOutcome::Loaded { rendered: 0, skipped: 1 });
    assert_eq!(state.view().header_html, "Empty by nobody");
    assert!(!state.view().result_visible);
}

#[test]
fn play_and_close_emulator() {
    let fetcher = ScriptedFetcher::new(vec![Ok(DEMO.to_string())]);
    let mut state = ViewState::new(Projector::new(), RenderOptions { emulator: true });
    state.load(&fetcher, &source());

    assert!(state.play(5).is_none());
    let instance = state.play(0).unwrap();
    assert_eq!(instance.binary_url, "a.hex");
    assert!(state.emulator().is_visible());

    let html = state.to_html(&PageLayout::default());
    assert!(html.contains("class=\"emulator_frame\""));
    assert!(html.contains("class=\"item_play\""));

    let closed = state.close_emulator().unwrap();
    assert_eq!(closed.binary_url, "a.hex");
    assert!(!state.emulator().is_visible());
    assert!(state.emulator().instances().is_empty());
}

#[test]
fn resize_toggles_list_stylesheet() {
    let mut state = ViewState::new(Projector::new(), RenderOptions::default());
    assert!(state.resize(320, true));
    assert!(!state.style().is_disabled());
    assert!(state.resize(1280, false));
    assert!(!state.resize(1280, false));

    let html = state.to_html(&PageLayout::default());
    assert!(html.contains("href=\"css/list.css\" disabled>"));
}

#[test]
fn load_evaluates_stylesheet_for_default_width() {
    let fetcher = ScriptedFetcher::new(vec![Ok(DEMO.to_string())]);
    let mut state = ViewState::new(Projector::new(), RenderOptions::default());
    assert!(!state.style().is_disabled());

    state.load(&fetcher, &source());
    assert!(state.style().is_disabled());
    let html = state.to_html(&PageLayout::default());
    assert!(html.contains("href=\"css/list.css\" disabled>"));
}

#[test]
fn load_evaluates_stylesheet_for_narrow_width() {
    let fetcher = ScriptedFetcher::new(vec![Err(network_down())]);
    let mut state =
        ViewState::new(Projector::new(), RenderOptions::default()).with_viewport_width(320);

    assert_eq!(state.load(&fetcher, &source()), LoadOutcome::Failed);
    assert!(!state.style().is_disabled());
}
