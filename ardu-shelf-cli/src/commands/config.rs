use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ardu_shelf_lib::settings::{save_default_source, settings_string};
use ardu_shelf_lib::{Settings, settings_path};

use crate::error::CliError;

pub(crate) fn run_config_show(settings: &Settings) -> Result<(), CliError> {
    let path = settings_path();
    let origin = if path.exists() {
        "settings file"
    } else {
        "defaults (no settings file)"
    };
    println!(
        "{} {}",
        "Settings:".if_supports_color(Stdout, |t| t.bold()),
        path.display()
    );
    println!(
        "{}",
        format!("Source: {origin}").if_supports_color(Stdout, |t| t.dimmed())
    );
    println!();

    let text = settings_string(settings)
        .ok_or_else(|| CliError::config("could not serialize settings"))?;
    print!("{text}");
    Ok(())
}

pub(crate) fn run_config_path() -> Result<(), CliError> {
    println!("{}", settings_path().display());
    Ok(())
}

pub(crate) fn run_config_set_source(source: &str) -> Result<(), CliError> {
    if source.trim().is_empty() {
        return Err(CliError::config("source must not be empty"));
    }
    save_default_source(Some(source))?;
    log::info!("Default catalog set to {source}");
    Ok(())
}

pub(crate) fn run_config_clear_source() -> Result<(), CliError> {
    save_default_source(None)?;
    log::info!("Default catalog cleared");
    Ok(())
}
