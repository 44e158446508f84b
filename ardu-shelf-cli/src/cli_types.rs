//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ardu-shelf")]
#[command(about = "Render Arduboy game repository catalogs as HTML", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Common arguments for commands that load a catalog.
#[derive(Args, Clone)]
pub(crate) struct SourceArgs {
    /// Catalog URL or path (defaults to the configured source, then repository.json)
    pub target: Option<String>,

    /// Page query string or page URL carrying the target after '?'
    #[arg(long, conflicts_with = "target")]
    pub query: Option<String>,

    /// Fetch external catalogs through the configured CORS relay
    #[arg(long)]
    pub relay: bool,

    /// Directory that relative catalog paths are resolved against
    #[arg(long)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Fetch a catalog and write the HTML page
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Add a "play" link per item that opens the hosted emulator
        #[arg(long)]
        emulator: bool,

        /// Viewport width in pixels used to toggle the list stylesheet
        /// (defaults to `render.viewport_width`)
        #[arg(long)]
        width: Option<u32>,
    },

    /// Print the catalog header and its renderable items
    List {
        #[command(flatten)]
        source: SourceArgs,

        /// Show which catalog field each display value came from
        #[arg(long)]
        details: bool,

        /// Print projections as JSON
        #[arg(long, conflicts_with = "details")]
        json: bool,
    },

    /// Write the page with the emulator opened on one item
    Play {
        #[command(flatten)]
        source: SourceArgs,

        /// Item number (as shown by `list`) or title
        #[arg(short, long)]
        item: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings and where they come from
    Show,

    /// Print the settings file path
    Path,

    /// Save the catalog loaded when no target is given
    SetSource {
        /// Catalog URL or path
        source: String,
    },

    /// Remove the saved default catalog
    ClearSource,
}
