//! Nav bar rendering and hit testing

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::icons;
use crate::app::App;
use crate::nav::{MenuEntry, TabId};

const DIVIDER: &str = "│";

/// How much of each entry the nav bar shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStyle {
    /// Shortcut, icon and label
    Full,
    /// Shortcut and icon only
    Short,
}

/// Text of one nav bar entry, e.g. ` 3 ≡ Leases ` or ` 3 ≡ `
pub fn entry_text(idx: usize, entry: &MenuEntry, show_icons: bool, style: NavStyle) -> String {
    let shortcut = (idx + 1) % 10;
    match (style, show_icons) {
        (NavStyle::Full, true) => {
            format!(" {shortcut} {} {} ", icons::glyph(entry.icon), entry.label)
        }
        (NavStyle::Full, false) => format!(" {shortcut} {} ", entry.label),
        (NavStyle::Short, true) => format!(" {shortcut} {} ", icons::glyph(entry.icon)),
        (NavStyle::Short, false) => format!(" {shortcut} "),
    }
}

fn bar_width(menu: &[MenuEntry], show_icons: bool, style: NavStyle) -> usize {
    let entries: usize = menu
        .iter()
        .enumerate()
        .map(|(idx, entry)| entry_text(idx, entry, show_icons, style).chars().count())
        .sum();
    entries + menu.len().saturating_sub(1) * DIVIDER.chars().count()
}

/// Widest style that shows every entry within `width`, if any
pub fn fit(width: u16, menu: &[MenuEntry], show_icons: bool) -> Option<NavStyle> {
    [NavStyle::Full, NavStyle::Short]
        .into_iter()
        .find(|style| bar_width(menu, show_icons, *style) <= width as usize)
}

/// Horizontal span each entry occupies in `area`. Empty when the whole menu
/// does not fit; the shell then navigates through the menu modal.
pub fn segments(area: Rect, menu: &[MenuEntry], show_icons: bool) -> Vec<(TabId, Rect)> {
    let Some(style) = fit(area.width, menu, show_icons) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(menu.len());
    let mut x = area.x;
    for (idx, entry) in menu.iter().enumerate() {
        if idx > 0 {
            x = x.saturating_add(DIVIDER.chars().count() as u16);
        }
        let width = entry_text(idx, entry, show_icons, style).chars().count() as u16;
        out.push((entry.id, Rect::new(x, area.y, width, 1)));
        x = x.saturating_add(width);
    }
    out
}

pub fn hit(area: Rect, menu: &[MenuEntry], show_icons: bool, col: u16, row: u16) -> Option<TabId> {
    segments(area, menu, show_icons)
        .into_iter()
        .find(|(_, rect)| super::layout::rect_contains(*rect, col, row))
        .map(|(tab, _)| tab)
}

pub fn draw_nav_bar(f: &mut Frame, area: Rect, app: &App) {
    let style = match fit(area.width, app.menu(), app.show_icons) {
        Some(style) if !app.compact => style,
        _ => {
            draw_compact_hint(f, area, app);
            return;
        }
    };

    let active = app.session.active_tab();
    let mut spans = Vec::new();
    for (idx, entry) in app.menu().iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(DIVIDER, Style::default().fg(Color::DarkGray)));
        }
        let highlight = if entry.id == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(entry_text(idx, entry, app.show_icons, style), highlight));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_compact_hint(f: &mut Frame, area: Rect, app: &App) {
    let active = app.session.active_tab();
    let label = app
        .menu()
        .iter()
        .find(|entry| entry.id == active)
        .map(|entry| entry.label.to_string())
        .unwrap_or_else(|| active.to_string());
    let line = Line::from(vec![
        Span::styled(" ≡ Menu ", Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::styled(" m ", Style::default().fg(Color::Yellow)),
        Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{build_menu, Role};

    #[test]
    fn test_segments_are_contiguous_with_dividers() {
        let menu = build_menu(Role::Tenant);
        let segs = segments(Rect::new(10, 1, 200, 1), &menu, true);
        assert_eq!(segs.len(), 7);
        assert_eq!(segs[0].1.x, 10);
        for pair in segs.windows(2) {
            let (_, a) = pair[0];
            let (_, b) = pair[1];
            assert_eq!(a.x + a.width + 1, b.x);
        }
    }

    #[test]
    fn test_segments_fall_back_to_short_entries() {
        let menu = build_menu(Role::Landlord);
        let area = Rect::new(0, 0, 82, 1);
        assert_eq!(fit(area.width, &menu, true), Some(NavStyle::Short));
        let segs = segments(area, &menu, true);
        assert_eq!(segs.len(), menu.len());
        assert!(segs.iter().all(|(_, r)| r.x + r.width <= 82));
        assert_eq!(entry_text(9, &menu[9], false, NavStyle::Short), " 0 ");
    }

    #[test]
    fn test_segments_never_drop_entries() {
        let menu = build_menu(Role::Landlord);
        for width in 0..200 {
            let segs = segments(Rect::new(0, 0, width, 1), &menu, true);
            assert!(segs.is_empty() || segs.len() == menu.len(), "width {width}");
        }
        assert_eq!(fit(20, &menu, true), None);
    }

    #[test]
    fn test_hit_finds_entry() {
        let menu = build_menu(Role::Landlord);
        let area = Rect::new(0, 1, 300, 1);
        let segs = segments(area, &menu, true);
        let (tab, rect) = segs[4];
        assert_eq!(tab, TabId::Payments);
        assert_eq!(hit(area, &menu, true, rect.x + 1, 1), Some(TabId::Payments));
        assert_eq!(hit(area, &menu, true, rect.x + 1, 2), None);
    }

    #[test]
    fn test_entry_text_shortcuts() {
        let menu = build_menu(Role::Landlord);
        assert_eq!(entry_text(0, &menu[0], false, NavStyle::Full), " 1 Dashboard ");
        assert_eq!(
            entry_text(9, &menu[9], false, NavStyle::Full),
            " 0 Property Valuation "
        );
    }
}
