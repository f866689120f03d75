//! quietpage: a sensory-friendly page with adjustable presentation.
//!
//! A handful of user preferences (theme, font size, reduced motion,
//! simplified layout, sparkles) deterministically derive everything the page
//! draws. The derivation is a pure function; a [`presenter::Presenter`] owns
//! the preferences and republishes the result to an explicit
//! [`presenter::PresentationContext`] on every change.
//!
//! # Quick start
//!
//! ```
//! use quietpage::host::FixedHost;
//! use quietpage::prefs::{Preset, Theme};
//! use quietpage::presenter::{Presenter, StyleVariables};
//!
//! let mut page = Presenter::mount(&FixedHost(false), StyleVariables::new());
//! page.set_theme(Theme::Ocean);
//! page.set_font_scale(40);
//! page.apply_preset(Preset::Quiet);
//!
//! assert_eq!(page.context().get("--font-size"), Some("28px"));
//! assert!(!page.visual().motion_enabled);
//! ```

pub mod build_info;
pub mod config;
pub mod error;
pub mod host;
pub mod prefs;
pub mod presenter;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
pub mod ui;
pub mod visual;
