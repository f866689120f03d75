//! Terminal output renderer for the page and status messages.
//!
//! The page goes to stdout; prompts, status, and diagnostics go to stderr so
//! piping `quietpage vars` stays clean.

use crate::tui::settings;
use crossterm::style::{Color, Stylize};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Print the input prompt indicator (to stderr).
    pub fn prompt(&self) {
        if self.color {
            eprint!("{} ", settings::PROMPT_SYMBOL.with(Color::Cyan).bold());
        } else {
            eprint!("{}", settings::PROMPT_PRIMARY);
        }
        let _ = io::stderr().flush();
    }

    /// Write pre-rendered page lines to stdout.
    pub fn page(&self, lines: &[String]) {
        let mut out = io::stdout().lock();
        for line in lines {
            let _ = writeln!(out, "{line}");
        }
        let _ = out.flush();
    }

    /// Print a warning (to stderr).
    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", settings::LABEL_WARNING.with(Color::Yellow).bold());
        } else {
            eprintln!("{} {msg}", settings::LABEL_WARNING);
        }
    }

    /// Print a small section header in status-style output.
    pub fn section(&self, title: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                settings::GLYPH_SECTION_BULLET.with(Color::DarkGrey),
                title.with(Color::Cyan).bold()
            );
        } else {
            eprintln!("{title}:");
        }
    }

    /// Print one key/value row.
    pub fn field(&self, key: &str, value: &str) {
        if self.color {
            eprintln!(
                "{}{} {}",
                settings::INDENT_1,
                format!("{key}:").with(Color::DarkGrey),
                value.with(Color::White),
            );
        } else {
            eprintln!("{}{key}: {value}", settings::INDENT_1);
        }
    }

    /// Print a simple indented detail line.
    pub fn detail(&self, text: &str) {
        if self.color {
            eprintln!("{}{}", settings::INDENT_1, text.with(Color::Grey));
        } else {
            eprintln!("{}{text}", settings::INDENT_1);
        }
    }

    /// Print an error (to stderr).
    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", settings::LABEL_ERROR.with(Color::Red).bold());
        } else {
            eprintln!("{} {msg}", settings::LABEL_ERROR);
        }
    }
}
