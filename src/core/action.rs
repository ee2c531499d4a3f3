//! Actions that panels and commands return to communicate with the app

use crate::nav::{Role, TabId};

/// Actions returned by panels and commands to communicate state changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Log in with a role
    Login(Role),

    /// Log out and reset the shell
    Logout,

    /// Switch the role of the current session
    SwitchRole(Role),

    /// Select a tab
    SelectTab(TabId),

    /// Open the menu modal
    OpenMenu,

    /// Open the help popup
    OpenHelp,

    /// Close current overlay/popup
    CloseOverlay,

    /// Show notification in status line
    Notify(String, NotifyLevel),

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
