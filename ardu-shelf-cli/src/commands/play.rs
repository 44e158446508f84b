use std::path::PathBuf;

use ardu_shelf_lib::{DisplayProjection, LoadOutcome, PageLayout, RenderOptions, Settings};

use crate::cli_types::SourceArgs;
use crate::commands::{emit, load_from_args};
use crate::error::CliError;

pub(crate) fn run_play(
    settings: &Settings,
    source: &SourceArgs,
    selection: &str,
    out: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    let mut loaded = load_from_args(settings, source, RenderOptions { emulator: true }, None, quiet)?;
    if loaded.outcome == LoadOutcome::Failed {
        return Err(CliError::load_failed(loaded.target));
    }

    let index = select_item(loaded.state.projections(), selection)
        .ok_or_else(|| CliError::item_not_found(selection))?;

    let instance = loaded
        .state
        .play(index)
        .ok_or_else(|| CliError::item_not_found(selection))?;
    log::info!("Emulator: {}", instance.src);

    let html = loaded.state.to_html(&PageLayout::default());
    emit(out, &html)
}

/// Pick an item by 1-based number or by case-insensitive title.
fn select_item(projections: &[DisplayProjection], selection: &str) -> Option<usize> {
    if let Ok(n) = selection.parse::<usize>() {
        return (1..=projections.len()).contains(&n).then(|| n - 1);
    }
    projections
        .iter()
        .position(|p| p.title.eq_ignore_ascii_case(selection))
}
