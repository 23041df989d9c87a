//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Dashboard screen layout areas
pub struct DashboardLayout {
    pub nav: Rect,
    pub metrics: Rect,
    pub charts: Rect,
    pub table: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate the dashboard screen layout
///
/// The charts row collapses on short terminals so the table keeps a
/// usable height.
pub fn calculate_dashboard_layout(area: Rect) -> DashboardLayout {
    let charts_height = if area.height >= 30 { 9 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // nav tabs
            Constraint::Length(5),             // metric cards
            Constraint::Length(charts_height), // charts row
            Constraint::Min(7),                // campaign table
            Constraint::Length(1),             // status bar
            Constraint::Length(1),             // help bar
        ])
        .split(area);

    DashboardLayout {
        nav: chunks[0],
        metrics: chunks[1],
        charts: chunks[2],
        table: chunks[3],
        status: chunks[4],
        help: chunks[5],
    }
}

/// Layout for the non-dashboard pages: nav, page header, body, help bar
pub struct PageLayout {
    pub nav: Rect,
    pub header: Rect,
    pub body: Rect,
    pub help: Rect,
}

pub fn calculate_page_layout(area: Rect) -> PageLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    PageLayout {
        nav: chunks[0],
        header: chunks[1],
        body: chunks[2],
        help: chunks[3],
    }
}
