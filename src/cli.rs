//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use quietpage::build_info::HELP_BUILD_METADATA;

/// A sensory-friendly page for the terminal with adjustable colors, text
/// size, motion, and decorations.
#[derive(Debug, Parser)]
#[command(name = "quietpage", disable_version_flag = true, after_help = HELP_BUILD_METADATA)]
pub struct Args {
    /// Print version and build metadata.
    #[arg(short = 'V', long = "version")]
    pub version: bool,

    /// Path to config file (default: ./quietpage.toml or ~/.config/quietpage/quietpage.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Where the starting reduced-motion preference comes from: auto, on, or off.
    #[arg(long = "reduced-motion", value_name = "SOURCE", global = true)]
    pub reduced_motion: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive page with slash commands (the default).
    Repl,
    /// Render the page once and exit.
    Render {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Print the derived style variables (css) or full configuration (json).
    Vars {
        #[command(flatten)]
        page: PageArgs,
        /// Output format: css or json.
        #[arg(long = "format")]
        format: Option<String>,
    },
    /// Write the default config file to ~/.config/quietpage/quietpage.toml.
    Init {
        /// Back up and overwrite an existing file.
        #[arg(long = "force")]
        force: bool,
    },
}

/// Preference changes applied after startup for one-shot commands.
///
/// Order of application: preset, then theme, font, and individual toggles.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PageArgs {
    /// Theme: calm, ocean, or contrast.
    #[arg(long = "theme")]
    pub theme: Option<String>,

    /// Text size in pixels; clamped to 14-28.
    #[arg(long = "font", allow_hyphen_values = true)]
    pub font: Option<String>,

    /// Preset: quiet or playful.
    #[arg(long = "preset")]
    pub preset: Option<String>,

    /// Reduce motion: on or off.
    #[arg(long = "motion", value_name = "ON|OFF")]
    pub reduce_motion: Option<String>,

    /// Simplified page: on or off.
    #[arg(long = "simple", value_name = "ON|OFF")]
    pub simplified: Option<String>,

    /// Sparkle decorations: on or off.
    #[arg(long = "sparkles", value_name = "ON|OFF")]
    pub sparkles: Option<String>,

    /// Animation frame to draw (animated decorations only).
    #[arg(long = "frame", default_value_t = 0)]
    pub frame: usize,
}

#[cfg(test)]
mod tests {
    use super::{Args, Command};
    use clap::Parser;

    #[test]
    fn no_subcommand_defaults_to_interactive() {
        let args = Args::parse_from(["quietpage"]);
        assert!(args.command.is_none());
        assert!(!args.no_color);
    }

    #[test]
    fn render_accepts_page_arguments() {
        let args = Args::parse_from([
            "quietpage", "render", "--theme", "ocean", "--font", "40", "--preset", "quiet",
        ]);
        let Some(Command::Render { page }) = args.command else {
            panic!("expected render subcommand");
        };
        assert_eq!(page.theme.as_deref(), Some("ocean"));
        assert_eq!(page.font.as_deref(), Some("40"));
        assert_eq!(page.preset.as_deref(), Some("quiet"));
    }

    #[test]
    fn negative_font_values_parse() {
        let args = Args::parse_from(["quietpage", "vars", "--font", "-4", "--format", "json"]);
        let Some(Command::Vars { page, format }) = args.command else {
            panic!("expected vars subcommand");
        };
        assert_eq!(page.font.as_deref(), Some("-4"));
        assert_eq!(format.as_deref(), Some("json"));
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let args = Args::parse_from(["quietpage", "render", "--no-color", "--reduced-motion", "on"]);
        assert!(args.no_color);
        assert_eq!(args.reduced_motion.as_deref(), Some("on"));
    }
}
