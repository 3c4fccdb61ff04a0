//! Command parser for the : command system

use crate::domain::MeetingId;

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation commands
    View(String),

    // Meeting detail commands
    Show(MeetingId),
    Close,

    // Output commands
    Export,
    ExportActions,
    Copy,

    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(|s| s.trim().to_string());

    match cmd.to_lowercase().as_str() {
        // Navigation shortcuts
        "dashboard" | "dash" | "home" => Command::View("dashboard".to_string()),
        "meetings" | "mtg" => Command::View("meetings".to_string()),
        "feedback" | "fb" => Command::View("feedback".to_string()),
        "insights" | "ins" => Command::View("insights".to_string()),
        "view" | "v" => match args {
            Some(key) if !key.is_empty() => Command::View(key),
            _ => Command::Unknown(input.to_string()),
        },

        // Meeting detail
        "show" | "open" => match args.and_then(|s| s.parse().ok()) {
            Some(id) => Command::Show(id),
            None => Command::Unknown(input.to_string()),
        },
        "close" => Command::Close,

        // Output
        "export" => Command::Export,
        "export-actions" | "actions" => Command::ExportActions,
        "copy" | "yank" => Command::Copy,

        "help" | "h" => Command::Help,
        "quit" | "q" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(parse_command("meetings"), Command::View("meetings".to_string()));
        assert_eq!(parse_command("home"), Command::View("dashboard".to_string()));
        assert_eq!(parse_command("FB"), Command::View("feedback".to_string()));
        assert_eq!(
            parse_command("view reports"),
            Command::View("reports".to_string())
        );
        assert_eq!(parse_command("view"), Command::Unknown("view".to_string()));
    }

    #[test]
    fn test_parse_detail_commands() {
        assert_eq!(parse_command("show 2"), Command::Show(2));
        assert_eq!(parse_command("  open 999 "), Command::Show(999));
        assert_eq!(parse_command("close"), Command::Close);
        assert_eq!(
            parse_command("show two"),
            Command::Unknown("show two".to_string())
        );
    }

    #[test]
    fn test_parse_output_commands() {
        assert_eq!(parse_command("export"), Command::Export);
        assert_eq!(parse_command("export-actions"), Command::ExportActions);
        assert_eq!(parse_command("yank"), Command::Copy);
        assert_eq!(parse_command("q"), Command::Quit);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_command("notacommand"),
            Command::Unknown("notacommand".to_string())
        );
    }
}
