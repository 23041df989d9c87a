//! Top navigation bar shared by all pages

use crate::model::ui::Page;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

pub fn render_nav(frame: &mut Frame, area: Rect, active: Page, unread: usize) {
    let titles: Vec<String> = Page::all()
        .iter()
        .enumerate()
        .map(|(i, page)| format!("{} {}", i + 1, page.label()))
        .collect();
    let selected = Page::all()
        .iter()
        .position(|p| *p == active)
        .unwrap_or(0);

    let title = if unread > 0 {
        format!(" adlens  🔔{} ", unread)
    } else {
        " adlens ".to_string()
    };

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM).title(title))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}
