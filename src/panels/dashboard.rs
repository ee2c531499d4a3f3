//! Dashboard panels - quadrant overview for each role

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::{Action, Module};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardPanel {
    Overview,
    Activity,
    Upcoming,
    Notices,
}

/// Static content of one quadrant
#[derive(Debug, Clone)]
struct Quadrant {
    title: &'static str,
    lines: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    title: &'static str,
    quadrants: [Quadrant; 4],
    active_panel: DashboardPanel,
}

impl Dashboard {
    pub fn tenant() -> Self {
        Self {
            title: "Tenant Dashboard",
            quadrants: [
                Quadrant {
                    title: "MY HOME",
                    lines: &[
                        "Plot 1234, Extension 9, Gaborone",
                        "2 bed apartment",
                        "",
                        "Lease ends   31 Dec 2025",
                        "Landlord     Kgosi Properties",
                    ],
                },
                Quadrant {
                    title: "RENT",
                    lines: &[
                        "Monthly rent     P 6,500",
                        "Next due         1st of month",
                        "Balance          P 0",
                        "",
                        "Pay from the Rent Payment tab",
                    ],
                },
                Quadrant {
                    title: "REQUESTS",
                    lines: &[
                        "Leaking kitchen tap     in progress",
                        "Geyser inspection       scheduled",
                        "",
                        "File new requests under Maintenance",
                    ],
                },
                Quadrant {
                    title: "NOTICES",
                    lines: &[
                        "Water interruption Tue 08:00-12:00",
                        "BPC meter reading this week",
                    ],
                },
            ],
            active_panel: DashboardPanel::Overview,
        }
    }

    pub fn landlord() -> Self {
        Self {
            title: "Landlord Dashboard",
            quadrants: [
                Quadrant {
                    title: "PORTFOLIO",
                    lines: &[
                        "Properties   12",
                        "Units        38",
                        "Occupancy    92%",
                        "",
                        "Gaborone 7 | Francistown 3 | Maun 2",
                    ],
                },
                Quadrant {
                    title: "COLLECTIONS",
                    lines: &[
                        "Expected this month   P 214,000",
                        "Collected             P 187,500",
                        "Outstanding           P 26,500",
                    ],
                },
                Quadrant {
                    title: "MAINTENANCE",
                    lines: &[
                        "Open requests       5",
                        "Scheduled visits    3",
                        "Overdue             1",
                    ],
                },
                Quadrant {
                    title: "APPLICATIONS",
                    lines: &[
                        "New applicants      4",
                        "Awaiting screening  2",
                        "Leases to renew     3",
                    ],
                },
            ],
            active_panel: DashboardPanel::Overview,
        }
    }

    pub fn active_panel(&self) -> DashboardPanel {
        self.active_panel
    }

    pub fn next_panel(&mut self) {
        self.active_panel = match self.active_panel {
            DashboardPanel::Overview => DashboardPanel::Activity,
            DashboardPanel::Activity => DashboardPanel::Upcoming,
            DashboardPanel::Upcoming => DashboardPanel::Notices,
            DashboardPanel::Notices => DashboardPanel::Overview,
        };
    }

    pub fn prev_panel(&mut self) {
        self.active_panel = match self.active_panel {
            DashboardPanel::Overview => DashboardPanel::Notices,
            DashboardPanel::Activity => DashboardPanel::Overview,
            DashboardPanel::Upcoming => DashboardPanel::Activity,
            DashboardPanel::Notices => DashboardPanel::Upcoming,
        };
    }

    fn panel_index(panel: DashboardPanel) -> usize {
        match panel {
            DashboardPanel::Overview => 0,
            DashboardPanel::Activity => 1,
            DashboardPanel::Upcoming => 2,
            DashboardPanel::Notices => 3,
        }
    }

    fn render_quadrant(&self, frame: &mut ratatui::Frame, area: Rect, idx: usize) {
        let quadrant = &self.quadrants[idx];
        let is_active = Self::panel_index(self.active_panel) == idx;
        let border_style = if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(quadrant.title)
            .border_style(border_style);

        let paragraph = Paragraph::new(quadrant.lines.join("\n")).block(block);
        frame.render_widget(paragraph, area);
    }
}

impl Module for Dashboard {
    fn title(&self) -> &'static str {
        self.title
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => self.next_panel(),
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => self.prev_panel(),
            _ => {}
        }
        Action::None
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        let outer = Block::default().title(self.title);
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        // Split into 4 quadrants (2x2 grid)
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let top_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);

        let bottom_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        self.render_quadrant(frame, top_chunks[0], 0);
        self.render_quadrant(frame, top_chunks[1], 1);
        self.render_quadrant(frame, bottom_chunks[0], 2);
        self.render_quadrant(frame, bottom_chunks[1], 3);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_tab_cycles_quadrants() {
        let mut dashboard = Dashboard::tenant();
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        for _ in 0..3 {
            dashboard.handle_key(tab);
        }
        assert_eq!(dashboard.active_panel(), DashboardPanel::Notices);
        dashboard.handle_key(tab);
        assert_eq!(dashboard.active_panel(), DashboardPanel::Overview);
        dashboard.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(dashboard.active_panel(), DashboardPanel::Notices);
    }
}
