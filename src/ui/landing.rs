//! Landing screen shown while logged out

use chrono::Datelike;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::layout::LandingAreas;
use crate::app::App;
use crate::nav::Role;

pub const TENANT_BUTTON: &str = "[ Tenant Login ]";
pub const LANDLORD_BUTTON: &str = "[ Landlord Login ]";

const FEATURES: [(&str, &str, Color); 3] = [
    (
        "Property Management",
        "Easily manage your properties in Gaborone, Francistown, and across Botswana",
        Color::Blue,
    ),
    (
        "Financial Tracking",
        "Streamline rent collection and expense management in Pula",
        Color::Green,
    ),
    (
        "Document Management",
        "Centralize all your important documents, including Botswana-specific forms",
        Color::Yellow,
    ),
];

pub fn draw_landing(f: &mut Frame, areas: &LandingAreas, app: &App) {
    f.render_widget(Block::default().borders(Borders::BOTTOM), areas.header);

    let logo = Line::from(vec![
        Span::styled(
            "TOV",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  Real Estate Manager"),
    ]);
    f.render_widget(Paragraph::new(logo), areas.logo);

    draw_button(f, areas.tenant_button, TENANT_BUTTON, app.landing_role == Role::Tenant);
    draw_button(
        f,
        areas.landlord_button,
        LANDLORD_BUTTON,
        app.landing_role == Role::Landlord,
    );

    let hero = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Simplify Your Real Estate Management in Botswana",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Streamline your property management tasks with our all-in-one solution",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("t", Style::default().fg(Color::Yellow)),
            Span::raw(" Get started as Tenant    "),
            Span::styled("l", Style::default().fg(Color::Yellow)),
            Span::raw(" Get started as Landlord"),
        ]),
    ];
    f.render_widget(
        Paragraph::new(hero).alignment(Alignment::Center),
        areas.hero,
    );

    draw_features(f, areas.features);

    let year = chrono::Local::now().year();
    let footer = Paragraph::new(Line::from(Span::styled(
        format!("© {year} Tov Real Estate Manager Botswana. All rights reserved."),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(footer, areas.footer);
}

fn draw_button(f: &mut Frame, area: Rect, label: &'static str, highlighted: bool) {
    let style = if highlighted {
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightCyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::LightCyan)
    };
    f.render_widget(Paragraph::new(Span::styled(label, style)), area);
}

fn draw_features(f: &mut Frame, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (card, (title, body, color)) in cards.iter().zip(FEATURES) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, Style::default().fg(color)))
            .border_style(Style::default().fg(Color::DarkGray));
        let paragraph = Paragraph::new(body)
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, *card);
    }
}
