use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows of the menu modal before the first entry (description + blank line)
pub const MENU_LIST_OFFSET: u16 = 2;

#[derive(Debug, Clone, Copy)]
pub struct ShellAreas {
    pub header: Rect,
    pub logo: Rect,
    pub nav: Rect,
    pub role_selector: Rect,
    pub bell: Rect,
    pub logout: Rect,
    pub main: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

pub fn shell_areas(size: Rect) -> ShellAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(size);

    let header_row = rect_inner(vertical[0]);
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(0),
            Constraint::Length(30),
        ])
        .split(header_row);

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Length(2),
            Constraint::Length(9),
            Constraint::Min(0),
        ])
        .split(header_chunks[2]);

    let footer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(vertical[2]);

    ShellAreas {
        header: vertical[0],
        logo: header_chunks[0],
        nav: header_chunks[1],
        role_selector: controls[0],
        bell: controls[2],
        logout: controls[4],
        main: vertical[1],
        status_line: footer_chunks[0],
        command_line: footer_chunks[1],
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LandingAreas {
    pub header: Rect,
    pub logo: Rect,
    pub tenant_button: Rect,
    pub landlord_button: Rect,
    pub hero: Rect,
    pub features: Rect,
    pub footer: Rect,
    pub command_line: Rect,
}

pub fn landing_areas(size: Rect) -> LandingAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Length(6),
            Constraint::Min(0),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(size);

    let header_row = rect_inner(vertical[0]);
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(16),
            Constraint::Length(2),
            Constraint::Length(18),
        ])
        .split(header_row);

    LandingAreas {
        header: vertical[0],
        logo: header_chunks[0],
        tenant_button: header_chunks[1],
        landlord_button: header_chunks[3],
        hero: vertical[1],
        features: vertical[2],
        footer: vertical[4],
        command_line: vertical[5],
    }
}

/// Area of the menu modal
pub fn menu_popup(size: Rect) -> Rect {
    centered_rect(44, 70, size)
}

/// Rows of the menu modal that hold entries
pub fn menu_list_area(size: Rect) -> Rect {
    let inner = rect_inner(menu_popup(size));
    Rect {
        y: inner.y.saturating_add(MENU_LIST_OFFSET),
        height: inner.height.saturating_sub(MENU_LIST_OFFSET + 1),
        ..inner
    }
}

pub fn help_popup(size: Rect) -> Rect {
    centered_rect(64, 80, size)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}
