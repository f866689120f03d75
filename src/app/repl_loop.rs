//! Interactive page loop.
//!
//! Reads one line per command from the given input. Slash commands change
//! preferences; a blank line redraws the page, which advances any animated
//! decorations by one frame.

use crate::app::commands::{dispatch_slash_action, DispatchOutcome};
use crate::app::session::PageSession;
use quietpage::tui::parse_slash_command;
use quietpage::ui::render::RenderSink;
use std::io::BufRead;

/// Run the loop until EOF or `/quit`.
pub(crate) fn run_repl(
    renderer: &dyn RenderSink,
    session: &mut PageSession,
    mut input: impl BufRead,
) -> std::io::Result<()> {
    session.draw(renderer);

    let mut line = String::new();
    loop {
        renderer.prompt();
        line.clear();
        if input.read_line(&mut line)? == 0 {
            eprintln!();
            return Ok(());
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            session.draw(renderer);
            continue;
        }

        let Some(action) = parse_slash_command(trimmed) else {
            renderer.warn("Commands start with `/`. Type /help for the list.");
            continue;
        };

        match dispatch_slash_action(renderer, session, &action) {
            DispatchOutcome::Redraw => session.draw(renderer),
            DispatchOutcome::Quiet => {}
            DispatchOutcome::Quit => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quietpage::host::FixedHost;
    use quietpage::prefs::Theme;
    use quietpage::presenter::{Presenter, StyleVariables};
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingRenderer {
        pages: Cell<usize>,
        prompts: Cell<usize>,
        warnings: Cell<usize>,
    }

    impl RenderSink for CountingRenderer {
        fn prompt(&self) {
            self.prompts.set(self.prompts.get() + 1);
        }
        fn page(&self, _lines: &[String]) {
            self.pages.set(self.pages.get() + 1);
        }
        fn warn(&self, _msg: &str) {
            self.warnings.set(self.warnings.get() + 1);
        }
        fn section(&self, _title: &str) {}
        fn field(&self, _key: &str, _value: &str) {}
        fn detail(&self, _text: &str) {}
        fn error(&self, _msg: &str) {}
        fn color(&self) -> bool {
            false
        }
    }

    fn session() -> PageSession {
        PageSession::new(
            Presenter::mount(&FixedHost(false), StyleVariables::new()),
            false,
            None,
        )
    }

    #[test]
    fn loop_redraws_on_changes_and_stops_at_quit() {
        let renderer = CountingRenderer::default();
        let mut session = session();
        let input = "/theme ocean\n\n/vars\nhello\n/quit\n/theme contrast\n";
        run_repl(&renderer, &mut session, input.as_bytes()).expect("loop");

        assert_eq!(session.presenter.state().theme, Theme::Ocean);
        // initial draw, /theme, blank line
        assert_eq!(renderer.pages.get(), 3);
        assert_eq!(renderer.prompts.get(), 5);
        assert_eq!(renderer.warnings.get(), 1);
    }

    #[test]
    fn loop_ends_cleanly_at_eof() {
        let renderer = CountingRenderer::default();
        let mut session = session();
        run_repl(&renderer, &mut session, "/font 20\n".as_bytes()).expect("loop");
        assert_eq!(session.presenter.state().font_scale.px(), 20);
        assert_eq!(renderer.pages.get(), 2);
    }
}
