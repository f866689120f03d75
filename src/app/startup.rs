//! Startup banner for interactive mode.

use crossterm::style::{Color, Stylize};
use quietpage::build_info::startup_metadata_line;

/// Render the one-line banner shown before the first page draw.
pub(crate) fn render_startup_banner(color: bool) {
    let meta = startup_metadata_line();
    if color {
        eprintln!(
            "{} {} {}  {}",
            "•".with(Color::DarkGrey),
            "quietpage".with(Color::Green).bold(),
            meta.as_str().with(Color::DarkGrey),
            "/help for commands".with(Color::DarkGrey),
        );
    } else {
        eprintln!("• quietpage {meta}  /help for commands");
    }
    eprintln!();
}
