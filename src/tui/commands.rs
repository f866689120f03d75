//! Slash-command metadata and parsing.

const MAX_SUGGESTIONS: usize = 6;

/// Static slash command metadata used by both parsing and `/help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlashCommand {
    pub name: &'static str,
    pub description: &'static str,
}

/// Built-in slash commands for interactive mode.
pub const SLASH_COMMANDS: [SlashCommand; 13] = [
    SlashCommand {
        name: "/theme",
        description: "Pick a theme: /theme [calm|ocean|contrast|index].",
    },
    SlashCommand {
        name: "/font",
        description: "Set text size in pixels (14-28): /font <n>.",
    },
    SlashCommand {
        name: "/motion",
        description: "Reduce motion: /motion [on|off]; no argument toggles.",
    },
    SlashCommand {
        name: "/simple",
        description: "Simplified page: /simple [on|off]; no argument toggles.",
    },
    SlashCommand {
        name: "/sparkles",
        description: "Sparkle decorations: /sparkles [on|off]; no argument toggles.",
    },
    SlashCommand {
        name: "/preset",
        description: "Apply a preset: /preset quiet|playful.",
    },
    SlashCommand {
        name: "/reset",
        description: "Return every setting to its startup value.",
    },
    SlashCommand {
        name: "/vars",
        description: "Show the current style variables.",
    },
    SlashCommand {
        name: "/status",
        description: "Show settings and where the config came from.",
    },
    SlashCommand {
        name: "/help",
        description: "List available slash commands.",
    },
    SlashCommand {
        name: "/quit",
        description: "Exit interactive mode.",
    },
    SlashCommand {
        name: "/exit",
        description: "Exit interactive mode.",
    },
    SlashCommand {
        name: "/q",
        description: "Short alias for exit.",
    },
];

/// Parsed slash command actions consumed by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommandAction {
    Quit,
    Theme(Option<String>),
    Font(Option<String>),
    /// `None` flips the current value.
    Motion(Option<String>),
    Simple(Option<String>),
    Sparkles(Option<String>),
    Preset(Option<String>),
    Reset,
    Vars,
    Status,
    Help,
    Unknown(String),
}

/// Parse a slash command from user input.
///
/// Returns `None` if the input is not a slash command.
pub fn parse_slash_command(input: &str) -> Option<SlashCommandAction> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let mut words = trimmed.split_whitespace();
    let token = words.next().unwrap_or("").to_ascii_lowercase();
    let arg = words.next().map(str::to_string);

    let action = match token.as_str() {
        "/" | "/help" => SlashCommandAction::Help,
        "/quit" | "/exit" | "/q" => SlashCommandAction::Quit,
        "/theme" => SlashCommandAction::Theme(arg),
        "/font" => SlashCommandAction::Font(arg),
        "/motion" => SlashCommandAction::Motion(arg),
        "/simple" => SlashCommandAction::Simple(arg),
        "/sparkles" => SlashCommandAction::Sparkles(arg),
        "/preset" => SlashCommandAction::Preset(arg),
        "/reset" => SlashCommandAction::Reset,
        "/vars" => SlashCommandAction::Vars,
        "/status" => SlashCommandAction::Status,
        other => SlashCommandAction::Unknown(other.to_string()),
    };

    Some(action)
}

/// Return slash commands whose name starts with the input's first word.
pub fn matching_slash_commands(input: &str) -> Vec<SlashCommand> {
    if !input.starts_with('/') {
        return Vec::new();
    }

    let prefix = input
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    SLASH_COMMANDS
        .iter()
        .copied()
        .filter(|cmd| cmd.name.starts_with(prefix.as_str()))
        .take(MAX_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_slash_commands() {
        assert_eq!(
            parse_slash_command("/theme ocean"),
            Some(SlashCommandAction::Theme(Some("ocean".to_string())))
        );
        assert_eq!(
            parse_slash_command("/theme"),
            Some(SlashCommandAction::Theme(None))
        );
        assert_eq!(
            parse_slash_command("  /FONT 40 extra"),
            Some(SlashCommandAction::Font(Some("40".to_string())))
        );
        assert_eq!(
            parse_slash_command("/motion"),
            Some(SlashCommandAction::Motion(None))
        );
        assert_eq!(
            parse_slash_command("/simple on"),
            Some(SlashCommandAction::Simple(Some("on".to_string())))
        );
        assert_eq!(
            parse_slash_command("/sparkles off"),
            Some(SlashCommandAction::Sparkles(Some("off".to_string())))
        );
        assert_eq!(
            parse_slash_command("/preset quiet"),
            Some(SlashCommandAction::Preset(Some("quiet".to_string())))
        );
        assert_eq!(parse_slash_command("/reset"), Some(SlashCommandAction::Reset));
        assert_eq!(parse_slash_command("/vars"), Some(SlashCommandAction::Vars));
        assert_eq!(parse_slash_command("/status"), Some(SlashCommandAction::Status));
        assert_eq!(parse_slash_command("/"), Some(SlashCommandAction::Help));
        assert_eq!(parse_slash_command("/q"), Some(SlashCommandAction::Quit));
    }

    #[test]
    fn non_slash_input_is_not_a_command() {
        assert_eq!(parse_slash_command("ocean"), None);
        assert_eq!(parse_slash_command(""), None);
    }

    #[test]
    fn unknown_commands_are_reported() {
        assert_eq!(
            parse_slash_command("/dance"),
            Some(SlashCommandAction::Unknown("/dance".to_string()))
        );
    }

    #[test]
    fn matching_commands_by_prefix() {
        let names: Vec<_> = matching_slash_commands("/s")
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["/simple", "/sparkles", "/status"]);
        assert!(matching_slash_commands("theme").is_empty());
    }
}
