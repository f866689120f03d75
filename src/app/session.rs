//! Interactive page session state.

use quietpage::presenter::{Presenter, StyleVariables};
use quietpage::tui::{render_page, PageOptions};
use quietpage::ui::render::RenderSink;
use std::path::PathBuf;

/// Everything the interactive loop needs between commands.
pub(crate) struct PageSession {
    pub presenter: Presenter<StyleVariables>,
    pub show_panel: bool,
    /// Config file the session was loaded from, if any.
    pub source_path: Option<PathBuf>,
    /// Animation tick, advanced on every redraw.
    pub frame: usize,
}

impl PageSession {
    pub(crate) fn new(
        presenter: Presenter<StyleVariables>,
        show_panel: bool,
        source_path: Option<PathBuf>,
    ) -> Self {
        Self {
            presenter,
            show_panel,
            source_path,
            frame: 0,
        }
    }

    /// Draw the page for the current configuration and advance the frame.
    pub(crate) fn draw(&mut self, renderer: &dyn RenderSink) {
        let lines = render_page(
            self.presenter.visual(),
            PageOptions {
                color: renderer.color(),
                show_panel: self.show_panel,
                frame: self.frame,
            },
        );
        renderer.page(&lines);
        self.frame = self.frame.wrapping_add(1);
    }
}
