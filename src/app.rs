use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::config::Config;
use crate::core::{parse_command, Action, NotifyLevel};
use crate::nav::{menu, MenuEntry, Role, TabId, ViewId};
use crate::panels::Panels;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
            NotifyLevel::Error => StatusLevel::Error,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

#[derive(Debug)]
pub struct App {
    pub session: Session,
    pub panels: Panels,
    /// Role highlighted on the landing screen
    pub landing_role: Role,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub status: Option<StatusMessage>,
    /// Menu modal (the narrow-screen navigation)
    pub menu_open: bool,
    pub menu_cursor: usize,
    /// First modal entry on screen, as of the last render
    pub menu_offset: usize,
    pub help_open: bool,
    /// Set when the terminal is narrower than `compact_width`
    pub compact: bool,
    pub compact_width: u16,
    pub show_icons: bool,
    pub should_quit: bool,
    status_ttl: Duration,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            session: Session::new(),
            panels: Panels::new(),
            landing_role: config.session.default_role,
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            status: None,
            menu_open: false,
            menu_cursor: 0,
            menu_offset: 0,
            help_open: false,
            compact: false,
            compact_width: config.ui.compact_width,
            show_icons: config.ui.show_icons,
            should_quit: false,
            status_ttl: Duration::from_secs(config.ui.status_ttl_secs),
        }
    }

    pub fn current_view(&self) -> Option<ViewId> {
        self.session.current_view()
    }

    pub fn menu(&self) -> &[MenuEntry] {
        self.session.menu()
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > self.status_ttl {
                self.status = None;
            }
        }
    }

    /// Track the terminal width; narrow terminals navigate through the menu modal
    pub fn set_width(&mut self, width: u16) {
        self.compact = width < self.compact_width;
    }

    pub fn login(&mut self, role: Role) {
        self.session.login(role);
        self.landing_role = role;
        self.close_overlay();
        self.set_status(format!("Logged in as {}", role.title()), StatusLevel::Info);
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.panels = Panels::new();
        self.close_overlay();
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
        self.set_status("Logged out", StatusLevel::Info);
    }

    pub fn switch_role(&mut self, role: Role) {
        match self.session.set_role(role) {
            Ok(()) => {
                self.clamp_menu_cursor();
                let note = if self.session.is_tab_visible(self.session.active_tab()) {
                    String::new()
                } else {
                    format!(" ({} is not in this menu)", self.session.active_tab())
                };
                self.set_status(format!("Viewing as {}{note}", role.title()), StatusLevel::Info);
            }
            Err(err) => self.set_status(format!("Cannot switch role: {err}"), StatusLevel::Warn),
        }
    }

    pub fn toggle_role(&mut self) {
        self.switch_role(self.session.role().toggled());
    }

    pub fn select_tab(&mut self, tab: TabId) {
        if let Err(err) = self.session.set_active_tab(tab) {
            self.set_status(format!("Cannot open {tab}: {err}"), StatusLevel::Warn);
        }
    }

    /// Select the n-th visible menu entry (0-based)
    pub fn select_menu_index(&mut self, idx: usize) {
        match self.session.menu().get(idx).map(|entry| entry.id) {
            Some(tab) => self.select_tab(tab),
            None => debug!(idx, "no menu entry at index"),
        }
    }

    pub fn cycle_tab(&mut self, forward: bool) {
        if let Some(tab) = menu::step(self.session.menu(), self.session.active_tab(), forward) {
            self.select_tab(tab);
        }
    }

    pub fn open_menu(&mut self) {
        if !self.session.is_logged_in() {
            self.set_status("Log in to navigate", StatusLevel::Warn);
            return;
        }
        self.help_open = false;
        self.menu_open = true;
        self.menu_offset = 0;
        self.menu_cursor =
            menu::position(self.session.menu(), self.session.active_tab()).unwrap_or(0);
    }

    pub fn close_overlay(&mut self) {
        self.menu_open = false;
        self.help_open = false;
    }

    pub fn menu_move(&mut self, down: bool) {
        let len = self.session.menu().len();
        if len == 0 {
            return;
        }
        self.menu_cursor = if down {
            (self.menu_cursor + 1) % len
        } else {
            (self.menu_cursor + len - 1) % len
        };
    }

    /// Select the highlighted modal entry and close the modal
    pub fn menu_confirm(&mut self) {
        let cursor = self.menu_cursor;
        self.menu_open = false;
        self.select_menu_index(cursor);
    }

    fn clamp_menu_cursor(&mut self) {
        let len = self.session.menu().len();
        if self.menu_cursor >= len {
            self.menu_cursor = len.saturating_sub(1);
        }
        self.menu_offset = self.menu_offset.min(self.menu_cursor);
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        self.exit_command();
        if input.is_empty() {
            return;
        }
        let command = parse_command(&input);
        debug!(?command, "command parsed");
        self.command.last = Some(input);
        self.apply_action(command.into_action());
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Login(role) => self.login(role),
            Action::Logout => self.logout(),
            Action::SwitchRole(role) => self.switch_role(role),
            Action::SelectTab(tab) => self.select_tab(tab),
            Action::OpenMenu => self.open_menu(),
            Action::OpenHelp => {
                self.menu_open = false;
                self.help_open = true;
            }
            Action::CloseOverlay => self.close_overlay(),
            Action::Notify(text, level) => {
                if level != NotifyLevel::Info {
                    warn!(%text, "notice");
                }
                self.set_status(text, level.into());
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Forward a key to the visible panel
    pub fn forward_to_panel(&mut self, key: crossterm::event::KeyEvent) {
        let Some(view) = self.current_view() else {
            return;
        };
        let action = self.panels.get_mut(view).handle_key(key);
        self.apply_action(action);
    }
}
