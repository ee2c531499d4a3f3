//! Record panel - a row list with a cursor and a detail pane

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::{Action, Module, NotifyLevel};

/// One row: a headline, a right-aligned figure and detail lines
#[derive(Debug, Clone)]
pub struct Record {
    pub headline: String,
    pub figure: String,
    pub detail: Vec<(String, String)>,
}

impl Record {
    pub fn new(headline: impl Into<String>, figure: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            figure: figure.into(),
            detail: Vec::new(),
        }
    }

    pub fn with(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.detail.push((label.into(), value.into()));
        self
    }
}

#[derive(Debug, Clone)]
pub struct RecordPanel {
    title: &'static str,
    summary: Vec<String>,
    records: Vec<Record>,
    selected: usize,
}

impl RecordPanel {
    pub fn new(title: &'static str, records: Vec<Record>) -> Self {
        Self {
            title,
            summary: Vec::new(),
            records,
            selected: 0,
        }
    }

    /// Lines shown above the list
    pub fn summary(mut self, lines: &[&str]) -> Self {
        self.summary = lines.iter().map(|line| line.to_string()).collect();
        self
    }

    pub fn selected(&self) -> Option<&Record> {
        self.records.get(self.selected)
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.records.len() {
            self.selected += 1;
        }
    }
}

impl Module for RecordPanel {
    fn title(&self) -> &'static str {
        self.title
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_up();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_down();
                Action::None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.selected = 0;
                Action::None
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = self.records.len().saturating_sub(1);
                Action::None
            }
            KeyCode::Enter => match self.selected() {
                Some(record) => Action::Notify(
                    format!("{}: {} ({})", self.title, record.headline, record.figure),
                    NotifyLevel::Info,
                ),
                None => Action::Notify("Nothing to open".into(), NotifyLevel::Warn),
            },
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .title(self.title)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let summary_height = if self.summary.is_empty() {
            0
        } else {
            self.summary.len() as u16 + 1
        };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(summary_height), Constraint::Min(0)])
            .split(inner);

        if !self.summary.is_empty() {
            let lines: Vec<Line> = self
                .summary
                .iter()
                .map(|line| Line::from(Span::styled(line.clone(), Style::default().fg(Color::Gray))))
                .collect();
            frame.render_widget(Paragraph::new(lines), rows[0]);
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]);

        let items: Vec<ListItem> = self
            .records
            .iter()
            .map(|record| {
                ListItem::new(Line::from(vec![
                    Span::raw(record.headline.clone()),
                    Span::raw("  "),
                    Span::styled(record.figure.clone(), Style::default().fg(Color::Yellow)),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::RIGHT))
            .highlight_style(
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if !self.records.is_empty() {
            state.select(Some(self.selected));
        }
        frame.render_stateful_widget(list, columns[0], &mut state);

        let detail: Vec<Line> = match self.selected() {
            Some(record) => record
                .detail
                .iter()
                .map(|(label, value)| {
                    Line::from(vec![
                        Span::styled(format!("{label} "), Style::default().fg(Color::DarkGray)),
                        Span::raw(value.clone()),
                    ])
                })
                .collect(),
            None => vec![Line::from("No records")],
        };
        let detail = Paragraph::new(detail)
            .block(Block::default().title(" Details "))
            .wrap(Wrap { trim: true });
        frame.render_widget(detail, columns[1]);
    }
}
