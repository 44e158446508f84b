use std::path::PathBuf;

use ardu_shelf_lib::{LoadOutcome, PageLayout, RenderOptions, Settings, permalink};

use crate::cli_types::SourceArgs;
use crate::commands::{emit, load_from_args};
use crate::error::CliError;

/// Run the render command.
///
/// The page is written even when the load fails; it then carries only the
/// failure header.
pub(crate) fn run_render(
    settings: &Settings,
    source: &SourceArgs,
    out: Option<PathBuf>,
    emulator: bool,
    width: Option<u32>,
    quiet: bool,
) -> Result<(), CliError> {
    let loaded = load_from_args(settings, source, RenderOptions { emulator }, width, quiet)?;

    let html = loaded.state.to_html(&PageLayout::default());
    emit(out, &html)?;

    match loaded.outcome {
        LoadOutcome::Loaded { .. } => {
            log::info!(
                "Share: {}",
                permalink(&settings.render.page_base, &loaded.target)
            );
            Ok(())
        }
        LoadOutcome::Failed => Err(CliError::load_failed(loaded.target)),
    }
}
