//! ardu-shelf CLI
//!
//! Command-line interface for rendering Arduboy game repository catalogs.

mod cli_types;
mod commands;
mod error;
mod spinner;

use std::fs;
use std::io::Write;
use std::path::Path;

use clap::Parser;
use log::LevelFilter;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(2);
    }

    let settings = ardu_shelf_lib::load_settings();

    let result = match cli.command {
        Commands::Render {
            source,
            out,
            emulator,
            width,
        } => commands::render::run_render(&settings, &source, out, emulator, width, cli.quiet),
        Commands::List {
            source,
            details,
            json,
        } => commands::list::run_list(&settings, &source, details, json, cli.quiet),
        Commands::Play { source, item, out } => {
            commands::play::run_play(&settings, &source, &item, out, cli.quiet)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&settings),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::SetSource { source } => commands::config::run_config_set_source(&source),
            ConfigAction::ClearSource => commands::config::run_config_clear_source(),
        },
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

/// Install the logger. Normal runs print bare messages; `--verbose` adds
/// timestamps and levels. `RUST_LOG` overrides the level.
fn init_logging(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();

    if !verbose {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }

    if let Some(path) = logfile {
        let file = fs::File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(
            strip_ansi_escapes::Writer::new(file),
        )));
    }

    builder
        .try_init()
        .map_err(|e| CliError::other(e.to_string()))
}
