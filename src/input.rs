//! Keyboard and mouse routing
//!
//! Overlays take input first (help, command line, menu modal), then the
//! landing screen or the shell; keys the shell does not bind go to the
//! visible panel.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, InputMode, StatusLevel};
use crate::nav::Role;
use crate::ui::layout::{self, rect_contains};
use crate::ui::nav;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc) {
            app.help_open = false;
        }
        return;
    }

    if app.input_mode == InputMode::Command {
        handle_command_mode(app, key);
        return;
    }

    if !app.session.is_logged_in() {
        handle_landing(app, key);
        return;
    }

    if app.menu_open {
        handle_menu_modal(app, key);
        return;
    }

    handle_shell(app, key);
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

fn handle_landing(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('?') => app.help_open = true,
        KeyCode::Char(':') | KeyCode::Char('/') => app.enter_command(),
        KeyCode::Char('t') => app.login(Role::Tenant),
        KeyCode::Char('l') => app.login(Role::Landlord),
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
            app.landing_role = app.landing_role.toggled();
        }
        KeyCode::Enter => app.login(app.landing_role),
        _ => {}
    }
}

fn handle_menu_modal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => app.close_overlay(),
        KeyCode::Up | KeyCode::Char('k') => app.menu_move(false),
        KeyCode::Down | KeyCode::Char('j') => app.menu_move(true),
        KeyCode::Enter => app.menu_confirm(),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            app.menu_cursor = digit_index(ch);
            app.menu_confirm();
        }
        _ => {}
    }
}

fn handle_shell(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.help_open = true,
        KeyCode::Char(':') | KeyCode::Char('/') => app.enter_command(),
        KeyCode::Char('m') => app.open_menu(),
        KeyCode::Char('r') => app.toggle_role(),
        KeyCode::Char('o') => app.logout(),
        KeyCode::Char('n') => app.set_status("No new notifications", StatusLevel::Info),
        KeyCode::Char(ch) if ch.is_ascii_digit() => app.select_menu_index(digit_index(ch)),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('[') => app.cycle_tab(false),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(']') => app.cycle_tab(true),
        _ => app.forward_to_panel(key),
    }
}

/// `1` selects the first entry, `0` the tenth
fn digit_index(ch: char) -> usize {
    match ch.to_digit(10) {
        Some(0) => 9,
        Some(n) => n as usize - 1,
        None => usize::MAX,
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent, size: Rect) {
    if app.input_mode == InputMode::Command {
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, size, mouse.column, mouse.row),
        MouseEventKind::ScrollUp => handle_scroll(app, size, mouse.column, mouse.row, true),
        MouseEventKind::ScrollDown => handle_scroll(app, size, mouse.column, mouse.row, false),
        _ => {}
    }
}

pub fn handle_click(app: &mut App, size: Rect, col: u16, row: u16) {
    if app.help_open {
        app.help_open = false;
        return;
    }

    if !app.session.is_logged_in() {
        let areas = layout::landing_areas(size);
        if rect_contains(areas.tenant_button, col, row) {
            app.login(Role::Tenant);
        } else if rect_contains(areas.landlord_button, col, row) {
            app.login(Role::Landlord);
        }
        return;
    }

    if app.menu_open {
        let popup = layout::menu_popup(size);
        if !rect_contains(popup, col, row) {
            app.close_overlay();
            return;
        }
        let list = layout::menu_list_area(size);
        if rect_contains(list, col, row) {
            let idx = app.menu_offset + (row - list.y) as usize;
            if idx < app.menu().len() {
                app.menu_cursor = idx;
                app.menu_confirm();
            }
        }
        return;
    }

    let areas = layout::shell_areas(size);
    if rect_contains(areas.nav, col, row) {
        let fits = nav::fit(areas.nav.width, app.menu(), app.show_icons).is_some();
        if app.compact || !fits {
            app.open_menu();
        } else if let Some(tab) = nav::hit(areas.nav, app.menu(), app.show_icons, col, row) {
            app.select_tab(tab);
        }
        return;
    }
    if rect_contains(areas.role_selector, col, row) {
        app.toggle_role();
    } else if rect_contains(areas.bell, col, row) {
        app.set_status("No new notifications", StatusLevel::Info);
    } else if rect_contains(areas.logout, col, row) {
        app.logout();
    }
}

fn handle_scroll(app: &mut App, size: Rect, col: u16, row: u16, up: bool) {
    if !app.session.is_logged_in() || app.help_open {
        return;
    }
    if app.menu_open {
        app.menu_move(!up);
        return;
    }
    let areas = layout::shell_areas(size);
    if rect_contains(areas.main, col, row) {
        let code = if up { KeyCode::Up } else { KeyCode::Down };
        app.forward_to_panel(KeyEvent::new(code, KeyModifiers::NONE));
    } else if rect_contains(areas.nav, col, row) {
        app.cycle_tab(!up);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::TabId;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_digit_index() {
        assert_eq!(digit_index('1'), 0);
        assert_eq!(digit_index('9'), 8);
        assert_eq!(digit_index('0'), 9);
    }

    #[test]
    fn test_landing_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.landing_role, Role::Landlord);
        press(&mut app, KeyCode::Enter);
        assert!(app.session.is_logged_in());
        assert_eq!(app.session.role(), Role::Landlord);
    }

    #[test]
    fn test_shell_digits_and_arrows() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.session.active_tab(), TabId::Payments);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.session.active_tab(), TabId::Documents);
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.session.active_tab(), TabId::Payments);
        // Tenants have no eighth entry
        press(&mut app, KeyCode::Char('8'));
        assert_eq!(app.session.active_tab(), TabId::Payments);
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.help_open);
        press(&mut app, KeyCode::Char('t'));
        assert!(!app.session.is_logged_in());
        press(&mut app, KeyCode::Esc);
        assert!(!app.help_open);
    }

    #[test]
    fn test_command_mode_typing() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char(':'));
        for ch in "login landlord".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.role(), Role::Landlord);
        assert!(app.session.is_logged_in());
    }

    #[test]
    fn test_modal_digit_selects_and_closes() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('m'));
        assert!(app.menu_open);
        press(&mut app, KeyCode::Char('9'));
        assert!(!app.menu_open);
        assert_eq!(app.session.active_tab(), TabId::Screening);
    }

    #[test]
    fn test_click_login_buttons() {
        let size = Rect::new(0, 0, 120, 40);
        let areas = layout::landing_areas(size);
        let mut app = App::default();
        handle_click(&mut app, size, areas.landlord_button.x + 2, areas.landlord_button.y);
        assert_eq!(app.session.role(), Role::Landlord);
        assert!(app.session.is_logged_in());
    }

    #[test]
    fn test_click_nav_and_controls() {
        let size = Rect::new(0, 0, 160, 40);
        let mut app = App::default();
        app.login(Role::Landlord);
        app.set_width(size.width);

        let areas = layout::shell_areas(size);
        let segs = nav::segments(areas.nav, app.menu(), app.show_icons);
        let (tab, rect) = segs[3];
        handle_click(&mut app, size, rect.x, rect.y);
        assert_eq!(app.session.active_tab(), tab);

        handle_click(&mut app, size, areas.role_selector.x, areas.role_selector.y);
        assert_eq!(app.session.role(), Role::Tenant);

        handle_click(&mut app, size, areas.logout.x, areas.logout.y);
        assert!(!app.session.is_logged_in());
    }

    #[test]
    fn test_click_in_compact_nav_opens_menu() {
        let size = Rect::new(0, 0, 80, 30);
        let mut app = App::default();
        app.login(Role::Tenant);
        app.set_width(size.width);
        let areas = layout::shell_areas(size);
        handle_click(&mut app, size, areas.nav.x, areas.nav.y);
        assert!(app.menu_open);

        handle_click(&mut app, size, 0, size.height - 1);
        assert!(!app.menu_open);
    }
}
