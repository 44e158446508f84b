use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ardu_shelf_catalog::projection::{BINARY_SOURCES, IMAGE_SOURCES, TITLE_SOURCES};
use ardu_shelf_catalog::{Item, NO_TITLE, resolve};
use ardu_shelf_lib::{LoadOutcome, RenderOptions, Settings};

use crate::cli_types::SourceArgs;
use crate::commands::load_from_args;
use crate::error::CliError;

pub(crate) fn run_list(
    settings: &Settings,
    source: &SourceArgs,
    details: bool,
    json: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let loaded = load_from_args(settings, source, RenderOptions::default(), None, quiet)?;
    if loaded.outcome == LoadOutcome::Failed {
        return Err(CliError::load_failed(loaded.target));
    }
    let state = &loaded.state;

    if json {
        let text = serde_json::to_string_pretty(state.projections())
            .map_err(|e| CliError::other(format!("JSON output failed: {e}")))?;
        println!("{text}");
        return Ok(());
    }

    let Some(catalog) = state.catalog() else {
        return Err(CliError::load_failed(loaded.target));
    };

    println!(
        "{}",
        catalog.header_text().if_supports_color(Stdout, |t| t.bold())
    );
    println!();

    if details {
        for item in &catalog.items {
            print_item_details(item);
        }
        return Ok(());
    }

    if state.projections().is_empty() {
        println!(
            "{}",
            "No downloadable items".if_supports_color(Stdout, |t| t.dimmed())
        );
        return Ok(());
    }

    for (i, p) in state.projections().iter().enumerate() {
        println!(
            "{:>3}. {}",
            i + 1,
            p.title.if_supports_color(Stdout, |t| t.cyan())
        );
        if !p.info_lines.is_empty() {
            println!("     {}", p.info_lines.join(" / "));
        }
        if let Some(ref binary) = p.binary_url {
            println!("     {}", binary.if_supports_color(Stdout, |t| t.dimmed()));
        }
    }

    Ok(())
}

/// Show every item, including skipped ones, with the field each display
/// value was taken from.
fn print_item_details(item: &Item) {
    let title = resolve(TITLE_SOURCES, item);
    let binary = resolve(BINARY_SOURCES, item);

    let label = title.map_or(NO_TITLE, |(_, v)| v);
    if binary.is_some_and(|(_, v)| !v.is_empty()) {
        println!("{}", label.if_supports_color(Stdout, |t| t.cyan()));
    } else {
        println!(
            "{} {}",
            label.if_supports_color(Stdout, |t| t.dimmed()),
            "(skipped: no binary)".if_supports_color(Stdout, |t| t.yellow())
        );
    }

    println!("  title:  {}", describe(title));
    println!("  image:  {}", describe(resolve(IMAGE_SOURCES, item)));
    println!("  binary: {}", describe(binary));
    if let Some(ref description) = item.description {
        println!("  about:  {description}");
    }
    if let Some(ref date) = item.date {
        println!("  date:   {date}");
    }
    if let Some(ref url) = item.url {
        println!("  page:   {url}");
    }
    if let Some(ref source_url) = item.source_url {
        println!("  source: {source_url}");
    }
    println!();
}

fn describe(resolved: Option<(&'static str, &str)>) -> String {
    match resolved {
        Some((field, value)) => format!("{value} (from {field})"),
        None => "-".to_string(),
    }
}
