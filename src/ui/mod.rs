use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub mod icons;
pub mod landing;
pub mod layout;
pub mod nav;

use crate::app::{App, InputMode, StatusLevel};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.size();
    app.set_width(size.width);

    if !app.session.is_logged_in() {
        let areas = layout::landing_areas(size);
        landing::draw_landing(f, &areas, app);
        draw_command_line(f, areas.command_line, app);
        if app.help_open {
            draw_help_popup(f, size, app);
        }
        return;
    }

    let areas = layout::shell_areas(size);
    if nav::fit(areas.nav.width, app.menu(), app.show_icons).is_none() {
        app.compact = true;
    }

    draw_header(f, &areas, app);
    draw_main(f, areas.main, app);
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.menu_open {
        draw_menu_popup(f, size, app);
    }
    if app.help_open {
        draw_help_popup(f, size, app);
    }
}

fn draw_header(f: &mut Frame, areas: &layout::ShellAreas, app: &App) {
    f.render_widget(Block::default().borders(Borders::ALL), areas.header);

    let logo = Span::styled(
        " TOV",
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(Paragraph::new(logo), areas.logo);

    nav::draw_nav_bar(f, areas.nav, app);

    let role = Paragraph::new(Span::styled(
        role_selector_text(app),
        Style::default().fg(Color::Yellow),
    ));
    f.render_widget(role, areas.role_selector);

    // Decorative: there is no notification source behind the dot
    let bell = Paragraph::new(Line::from(vec![
        Span::raw("(!)"),
        Span::styled("●", Style::default().fg(Color::LightRed)),
    ]));
    f.render_widget(bell, areas.bell);

    let logout = Paragraph::new(Span::styled("[Log out]", Style::default().fg(Color::Gray)));
    f.render_widget(logout, areas.logout);
}

pub fn role_selector_text(app: &App) -> String {
    format!("[{:<8} ▾]", app.session.role().title())
}

fn draw_main(f: &mut Frame, area: Rect, app: &App) {
    match app.current_view() {
        Some(view) => app.panels.get(view).render(f, area),
        None => f.render_widget(Clear, area),
    }
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let tab = app.session.active_tab();
    let mut spans = vec![
        Span::styled("Role ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.session.role().title())),
        Span::styled("Tab ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{tab}  ")),
    ];
    if let Some(view) = app.current_view() {
        spans.push(Span::styled("View ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(view.title()));
    }
    if !app.session.is_tab_visible(tab) {
        spans.push(Span::styled(
            "  (not in menu)",
            Style::default().fg(Color::LightYellow),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

/// Get command hint for autocompletion
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("tab", "Open a tab: tab <id>"),
        ("role", "Switch role: role tenant|landlord"),
        ("login", "Log in: login tenant|landlord"),
        ("logout", "Log out"),
        ("menu", "Open the menu"),
        ("help", "Show key bindings"),
        ("quit", "Quit"),
    ];

    for (cmd, desc) in commands {
        if cmd.starts_with(&input) {
            return Some(desc);
        }
    }
    None
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint = command_hint(&app.command.input);
            let hint_text = hint.unwrap_or("tab <id> | role <r> | login <r> | logout");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.as_str()),
                Span::styled(
                    format!("  {}", hint_text),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    StatusLevel::Info => Color::LightGreen,
                    StatusLevel::Warn => Color::LightYellow,
                    StatusLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text, Style::default().fg(color)),
                ])
            } else {
                action_hints(app)
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn action_hints(app: &App) -> Line<'static> {
    let hints: &[(&str, &str)] = if !app.session.is_logged_in() {
        &[
            ("t", "tenant login"),
            ("l", "landlord login"),
            ("←/→", "choose"),
            ("Enter", "log in"),
            ("?", "help"),
            ("q", "quit"),
        ]
    } else if app.compact {
        &[
            ("m", "menu"),
            ("r", "role"),
            ("o", "log out"),
            (":", "command"),
            ("?", "help"),
            ("q", "quit"),
        ]
    } else {
        &[
            ("1-0", "tab"),
            ("←/→", "prev/next"),
            ("m", "menu"),
            ("r", "role"),
            ("o", "log out"),
            (":", "command"),
            ("?", "help"),
        ]
    };

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            format!(" {label}  "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn draw_menu_popup(f: &mut Frame, area: Rect, app: &mut App) {
    let popup_area = layout::menu_popup(area);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title("Menu")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let description = Paragraph::new(Span::styled(
        "Navigate through the application",
        Style::default().fg(Color::Gray),
    ));
    f.render_widget(description, Rect { height: 1, ..inner });

    let list_area = layout::menu_list_area(area);
    let active = app.session.active_tab();
    let items: Vec<ListItem> = app
        .menu()
        .iter()
        .map(|entry| {
            let mut spans = Vec::new();
            if app.show_icons {
                spans.push(Span::raw(format!("{} ", icons::glyph(entry.icon))));
            }
            spans.push(Span::raw(entry.label));
            let style = if entry.id == active {
                Style::default().fg(Color::LightCyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();
    let list = List::new(items)
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .highlight_symbol("> ");
    let mut state = ListState::default()
        .with_offset(app.menu_offset)
        .with_selected(Some(app.menu_cursor));
    f.render_stateful_widget(list, list_area, &mut state);
    // Clicks map rows back to entries through the scroll offset
    app.menu_offset = state.offset();

    let footer = Paragraph::new(Span::styled(
        "Enter select  Esc close",
        Style::default().fg(Color::DarkGray),
    ));
    let footer_area = Rect {
        y: inner.y.saturating_add(inner.height.saturating_sub(1)),
        height: 1,
        ..inner
    };
    f.render_widget(footer, footer_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = layout::help_popup(area);
    f.render_widget(Clear, popup_area);

    let mut lines = vec![
        Line::from("Landing"),
        Line::from("  t / l      Log in as tenant / landlord"),
        Line::from("  ←/→ Enter  Choose a role and log in"),
        Line::from("  Mouse      Click a login button"),
        Line::from(""),
        Line::from("Navigation"),
        Line::from("  1-9, 0     Open the n-th menu entry"),
        Line::from("  ←/→ [ ]    Previous / next entry"),
        Line::from("  h / l      Previous / next entry (vim)"),
        Line::from("  m          Menu (narrow terminals)"),
        Line::from("  Mouse      Click an entry, the role or Log out"),
        Line::from(""),
        Line::from("Panels"),
        Line::from("  j / k      Move selection"),
        Line::from("  g / G      Top / bottom"),
        Line::from("  Tab        Next dashboard quadrant"),
        Line::from("  Enter      Open selection"),
        Line::from(""),
        Line::from("Session"),
        Line::from("  r          Toggle tenant / landlord view"),
        Line::from("  n          Notifications"),
        Line::from("  o          Log out"),
        Line::from("  : or /     Command line"),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
        Line::from(""),
    ];
    if app.session.is_logged_in() {
        lines.push(Line::from(format!(
            "Signed in as {}",
            app.session.role().title()
        )));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_hint_prefix() {
        assert_eq!(command_hint("ro"), Some("Switch role: role tenant|landlord"));
        assert_eq!(command_hint("logo"), Some("Log out"));
        assert_eq!(command_hint(""), None);
        assert_eq!(command_hint("zzz"), None);
    }
}
