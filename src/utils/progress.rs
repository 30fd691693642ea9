//! Progress bar helpers using indicatif

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Create a progress bar for known-length operations.
///
/// Draws on stderr and stays hidden when stderr is not a terminal, so
/// redirected output is never interleaved with bar frames.
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::stderr());
    if let Ok(style) =
        ProgressStyle::default_bar().template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(message.to_string());
    pb
}

