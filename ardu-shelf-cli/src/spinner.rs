//! Spinner shown while a catalog is being fetched.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Start a spinner on stderr. When `quiet` is true the spinner is hidden.
pub(crate) fn fetch_spinner(msg: String, quiet: bool) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if quiet {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }
    let style = ProgressStyle::with_template("  {spinner:.cyan} {msg}")
        .expect("static pattern")
        .tick_chars("/-\\|");
    pb.set_style(style);
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
