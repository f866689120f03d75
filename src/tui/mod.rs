//! Terminal user-interface building blocks.
//!
//! Page layout, slash-command parsing, and output styling live in separate
//! modules so the page drawing stays a pure function of the visual
//! configuration.

pub mod commands;
pub mod page;
pub mod renderer;
pub mod settings;
pub mod text;

pub use commands::{
    matching_slash_commands, parse_slash_command, SlashCommand, SlashCommandAction, SLASH_COMMANDS,
};
pub use page::{render_page, PageOptions};
pub use renderer::Renderer;
