//! Render the shell into a TestBackend and inspect the buffer

use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tov::app::App;
use tov::ui::{layout, nav};
use tov::{build_menu, input, ui, Role, TabId};

fn render(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer.get(x, y).symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_landing_shows_both_login_actions() {
    let mut app = App::default();
    let screen = render(&mut app, 120, 32);
    assert!(screen.contains("Tenant Login"));
    assert!(screen.contains("Landlord Login"));
    assert!(screen.contains("Simplify Your Real Estate Management in Botswana"));
}

#[test]
fn test_shell_shows_role_menu_and_panel() {
    let mut app = App::default();
    app.login(Role::Landlord);
    let screen = render(&mut app, 220, 40);

    for entry in build_menu(Role::Landlord) {
        assert!(screen.contains(entry.label), "missing {}", entry.label);
    }
    assert!(screen.contains("Landlord Dashboard"));
    assert!(screen.contains("Landlord"));
}

#[test]
fn test_shell_renders_dispatched_panel_after_tab_change() {
    let mut app = App::default();
    app.login(Role::Tenant);
    app.select_tab(TabId::Payments);
    let screen = render(&mut app, 160, 40);
    assert!(screen.contains("Rent Payment"));
    assert!(!screen.contains("Tenant Screening"));
}

#[test]
fn test_hidden_tab_is_flagged_in_status_line() {
    let mut app = App::default();
    app.login(Role::Landlord);
    app.select_tab(TabId::Valuation);
    app.switch_role(Role::Tenant);
    let screen = render(&mut app, 160, 40);
    assert!(screen.contains("AI Property Valuation"));
    assert!(screen.contains("(not in menu)"));
}

#[test]
fn test_compact_layout_uses_menu_hint() {
    let mut app = App::default();
    app.login(Role::Tenant);
    let screen = render(&mut app, 80, 30);
    assert!(app.compact);
    assert!(screen.contains("Menu"));
    assert!(!screen.contains("Communication"));
}

#[test]
fn test_menu_modal_lists_entries() {
    let mut app = App::default();
    app.login(Role::Tenant);
    app.open_menu();
    let screen = render(&mut app, 80, 40);
    assert!(screen.contains("Navigate through the application"));
    for entry in build_menu(Role::Tenant) {
        assert!(screen.contains(entry.label), "missing {}", entry.label);
    }
}

#[test]
fn test_every_landlord_entry_is_clickable_at_common_widths() {
    for width in [120, 160, 200] {
        let mut app = App::default();
        app.login(Role::Landlord);
        render(&mut app, width, 40);
        assert!(!app.compact, "width {width}");

        let size = Rect::new(0, 0, width, 40);
        let areas = layout::shell_areas(size);
        let segs = nav::segments(areas.nav, app.menu(), app.show_icons);
        let ids: Vec<TabId> = segs.iter().map(|(tab, _)| *tab).collect();
        let expected: Vec<TabId> = build_menu(Role::Landlord).iter().map(|e| e.id).collect();
        assert_eq!(ids, expected, "width {width}");

        for (tab, rect) in segs {
            input::handle_click(&mut app, size, rect.x, rect.y);
            assert_eq!(app.session.active_tab(), tab, "width {width}");
        }
    }
}

#[test]
fn test_short_nav_bar_keeps_shortcuts_for_every_entry() {
    let mut app = App::default();
    app.login(Role::Landlord);
    let screen = render(&mut app, 120, 40);
    let header = screen.lines().nth(1).unwrap_or_default();
    for shortcut in ["1", "5", "9", "0"] {
        assert!(header.contains(&format!(" {shortcut} ")), "missing {shortcut}");
    }
}

#[test]
fn test_nav_collapses_to_menu_hint_when_nothing_fits() {
    let mut app = App::default();
    app.compact_width = 0;
    app.login(Role::Landlord);
    let screen = render(&mut app, 90, 30);
    assert!(app.compact);
    assert!(screen.contains("Menu"));

    let size = Rect::new(0, 0, 90, 30);
    let areas = layout::shell_areas(size);
    input::handle_click(&mut app, size, areas.nav.x, areas.nav.y);
    assert!(app.menu_open);
}

#[test]
fn test_click_in_scrolled_menu_selects_entry_under_pointer() {
    let mut app = App::default();
    app.login(Role::Landlord);
    app.select_tab(TabId::Valuation);
    app.open_menu();
    let screen = render(&mut app, 80, 20);
    assert!(app.menu_offset > 0);

    let size = Rect::new(0, 0, 80, 20);
    let list = layout::menu_list_area(size);
    let expected = app.menu()[app.menu_offset];
    let first_row: String = screen
        .lines()
        .nth(list.y as usize)
        .unwrap_or_default()
        .to_string();
    assert!(first_row.contains(expected.label));

    input::handle_click(&mut app, size, list.x + 2, list.y);
    assert!(!app.menu_open);
    assert_eq!(app.session.active_tab(), expected.id);
}
