pub(crate) mod config;
pub(crate) mod list;
pub(crate) mod play;
pub(crate) mod render;

use std::io::Write;
use std::path::PathBuf;

use ardu_shelf_lib::{
    CatalogSource, HttpFetcher, LoadOutcome, Projector, RenderOptions, Settings, ViewState,
    resolve_target,
};

use crate::cli_types::SourceArgs;
use crate::error::CliError;
use crate::spinner::fetch_spinner;

/// A catalog load driven by command-line arguments.
pub(crate) struct LoadedCatalog {
    pub target: String,
    pub state: ViewState,
    pub outcome: LoadOutcome,
}

/// Resolve the target from arguments and settings, fetch it, and render it
/// into a fresh view state. `width` overrides `render.viewport_width`.
pub(crate) fn load_from_args(
    settings: &Settings,
    args: &SourceArgs,
    options: RenderOptions,
    width: Option<u32>,
    quiet: bool,
) -> Result<LoadedCatalog, CliError> {
    let target = resolve_target(args.target.clone(), args.query.as_deref(), settings);
    let relay = args.relay.then_some(settings.fetch.relay.as_str());
    let base_dir = match args.base_dir {
        Some(ref dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let source = CatalogSource::resolve(&target, relay, &base_dir);

    let fetcher = HttpFetcher::new()?;
    let projector = Projector::new().with_placeholder(settings.render.placeholder_image.clone());
    let mut state = ViewState::new(projector, options)
        .with_viewport_width(width.unwrap_or(settings.render.viewport_width));

    let spinner = fetch_spinner(format!("Fetching {target}"), quiet);
    let outcome = state.load(&fetcher, &source);
    spinner.finish_and_clear();

    match outcome {
        LoadOutcome::Loaded { rendered, skipped } => {
            log::debug!("Rendered {rendered} item(s), skipped {skipped}");
        }
        LoadOutcome::Failed => {
            log::warn!("Catalog could not be loaded; the page shows the failure header");
        }
    }

    Ok(LoadedCatalog {
        target,
        state,
        outcome,
    })
}

/// Write text to a file, or to stdout when no path is given.
pub(crate) fn emit(out: Option<PathBuf>, html: &str) -> Result<(), CliError> {
    match out {
        Some(path) => {
            ardu_shelf_frontend::save_page(&path, html)?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
