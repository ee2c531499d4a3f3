//! Command parser for the : command line

use crate::nav::{Role, TabId};

use super::{Action, NotifyLevel};

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Session
    Login(Role),
    Logout,
    Role(Role),

    // Navigation
    Tab(TabId),
    Menu,

    // Shell
    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

impl Command {
    /// Translate into the action the app applies
    pub fn into_action(self) -> Action {
        match self {
            Command::Login(role) => Action::Login(role),
            Command::Logout => Action::Logout,
            Command::Role(role) => Action::SwitchRole(role),
            Command::Tab(tab) => Action::SelectTab(tab),
            Command::Menu => Action::OpenMenu,
            Command::Help => Action::OpenHelp,
            Command::Quit => Action::Quit,
            Command::Unknown(input) => {
                Action::Notify(format!("Unknown command: {input}"), NotifyLevel::Warn)
            }
        }
    }
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(str::trim).filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        "login" => match args.map(str::parse::<Role>) {
            Some(Ok(role)) => Command::Login(role),
            _ => Command::Unknown(input.to_string()),
        },
        "logout" | "exit" => Command::Logout,
        "role" | "as" => match args.map(str::parse::<Role>) {
            Some(Ok(role)) => Command::Role(role),
            _ => Command::Unknown(input.to_string()),
        },
        "tab" | "go" => match args.map(str::parse::<TabId>) {
            Some(Ok(tab)) => Command::Tab(tab),
            _ => Command::Unknown(input.to_string()),
        },
        "menu" => Command::Menu,
        "help" | "h" => Command::Help,
        "quit" | "q" => Command::Quit,
        // Bare tab ids work as shortcuts: `:leases`
        other => match other.parse::<TabId>() {
            Ok(tab) if args.is_none() => Command::Tab(tab),
            _ => Command::Unknown(input.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session_commands() {
        assert_eq!(parse_command("login tenant"), Command::Login(Role::Tenant));
        assert_eq!(parse_command("login Landlord"), Command::Login(Role::Landlord));
        assert_eq!(parse_command("logout"), Command::Logout);
        assert_eq!(parse_command("role landlord"), Command::Role(Role::Landlord));
        assert_eq!(parse_command("as tenant"), Command::Role(Role::Tenant));
    }

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(parse_command("tab leases"), Command::Tab(TabId::Leases));
        assert_eq!(parse_command("go  screening "), Command::Tab(TabId::Screening));
        assert_eq!(parse_command("valuation"), Command::Tab(TabId::Valuation));
        assert_eq!(parse_command("menu"), Command::Menu);
    }

    #[test]
    fn test_parse_shell_commands() {
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("q"), Command::Quit);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_command("notacommand"),
            Command::Unknown("notacommand".to_string())
        );
        assert_eq!(parse_command("login"), Command::Unknown("login".to_string()));
        assert_eq!(
            parse_command("role agent"),
            Command::Unknown("role agent".to_string())
        );
        assert_eq!(
            parse_command("tab reports"),
            Command::Unknown("tab reports".to_string())
        );
    }

    #[test]
    fn test_into_action() {
        assert_eq!(
            parse_command("tab payments").into_action(),
            Action::SelectTab(TabId::Payments)
        );
        assert!(matches!(
            parse_command("bogus").into_action(),
            Action::Notify(_, NotifyLevel::Warn)
        ));
    }
}
