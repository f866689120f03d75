//! Rendering contract and default terminal renderer binding.

pub use crate::tui::renderer::Renderer;

/// Injectable rendering interface used by orchestration code.
///
/// `Renderer` is the default terminal implementation; tests substitute a
/// recording sink without touching stdout/stderr.
pub trait RenderSink {
    /// Render the interactive prompt chrome.
    fn prompt(&self);
    /// Render the page lines to stdout.
    fn page(&self, lines: &[String]);
    /// Render a warning line.
    fn warn(&self, msg: &str);
    /// Render a titled section divider.
    fn section(&self, title: &str);
    /// Render one key/value field row.
    fn field(&self, key: &str, value: &str);
    /// Render additional detail text.
    fn detail(&self, text: &str);
    /// Render an error line.
    fn error(&self, msg: &str);
    /// Whether ANSI styling is enabled for page output.
    fn color(&self) -> bool;
}

impl RenderSink for Renderer {
    fn prompt(&self) {
        self.prompt();
    }

    fn page(&self, lines: &[String]) {
        self.page(lines);
    }

    fn warn(&self, msg: &str) {
        self.warn(msg);
    }

    fn section(&self, title: &str) {
        self.section(title);
    }

    fn field(&self, key: &str, value: &str) {
        self.field(key, value);
    }

    fn detail(&self, text: &str) {
        self.detail(text);
    }

    fn error(&self, msg: &str) {
        self.error(msg);
    }

    fn color(&self) -> bool {
        self.color()
    }
}
