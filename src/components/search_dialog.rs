//! Global search dialog
//!
//! Command-palette style overlay that searches across metrics, campaigns,
//! insights, and reports.

use crate::model::{SearchEntry, SearchIndex};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Render the global search overlay.
///
/// Query text and cursor position live in the modal stack; the caller passes
/// them in along with the search index.
pub fn render_global_search(
    frame: &mut Frame,
    area: Rect,
    index: &SearchIndex,
    query: &str,
    selected_index: usize,
) {
    let results = index.search(query);

    let popup_width = 60u16.min(area.width.saturating_sub(4));
    let popup_height = 16u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + area.height.saturating_sub(popup_height).min(3);
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Query input
            Constraint::Min(3),    // Results
            Constraint::Length(1), // Help line
        ])
        .split(popup_area);

    // Query input with a block cursor
    let input = Paragraph::new(Line::from(vec![
        Span::styled("🔍 ", Style::default().fg(Color::Cyan)),
        Span::styled(query.to_string(), Style::default().fg(Color::White)),
        Span::styled("█", Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Global Search ")
            .title_style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Color::Magenta)),
    );
    frame.render_widget(input, chunks[0]);

    // Results
    if query.trim().is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Type to search metrics, campaigns, insights, and reports",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(hint, chunks[1]);
    } else if results.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("No results for \"{}\"", query),
                Style::default().fg(Color::Yellow),
            )),
        ])
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(empty, chunks[1]);
    } else {
        let selected = selected_index.min(results.len() - 1);
        let items: Vec<ListItem> = results
            .iter()
            .enumerate()
            .map(|(i, entry)| result_item(entry, i == selected))
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} result(s) ", results.len()))
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(list, chunks[1]);
    }

    // Help line
    let help = Paragraph::new(Line::from(vec![
        Span::styled(" ↑/↓ ", Style::default().fg(Color::Cyan)),
        Span::styled("Navigate  ", Style::default().fg(Color::DarkGray)),
        Span::styled(" Enter ", Style::default().fg(Color::Cyan)),
        Span::styled("Go to page  ", Style::default().fg(Color::DarkGray)),
        Span::styled(" Esc ", Style::default().fg(Color::Cyan)),
        Span::styled("Close", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

fn result_item(entry: &SearchEntry, selected: bool) -> ListItem<'static> {
    let style = if selected {
        Style::default().bg(Color::Blue).fg(Color::White)
    } else {
        Style::default()
    };

    ListItem::new(Line::from(vec![
        Span::styled(
            format!(" {} ", entry.category.icon()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            entry.title.to_string(),
            style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ({})", entry.category.label()),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(
            format!("  {}", entry.description),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .style(style)
}
