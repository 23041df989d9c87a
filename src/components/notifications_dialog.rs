//! Notifications dialog
//!
//! Slide-over panel listing notifications with unread markers and per-item
//! actions.

use crate::model::{unread_count, Notification, Severity};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Render the notifications panel on the right edge of the screen.
pub fn render_notifications(
    frame: &mut Frame,
    area: Rect,
    notifications: &[Notification],
    selected_index: usize,
) {
    let panel_width = 48u16.min(area.width.saturating_sub(2));
    let panel_area = Rect::new(
        area.x + area.width.saturating_sub(panel_width),
        area.y,
        panel_width,
        area.height,
    );

    frame.render_widget(Clear, panel_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(panel_area);

    let unread = unread_count(notifications);
    let title = if unread > 0 {
        format!(" Notifications ({} unread) ", unread)
    } else {
        " Notifications ".to_string()
    };

    if notifications.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "All caught up!",
                Style::default().fg(Color::Green),
            )),
        ])
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(empty, chunks[0]);
    } else {
        let selected = selected_index.min(notifications.len() - 1);
        let items: Vec<ListItem> = notifications
            .iter()
            .enumerate()
            .map(|(i, n)| notification_item(n, i == selected))
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(Color::Magenta)),
        );
        frame.render_widget(list, chunks[0]);
    }

    // Help bar
    let help = Paragraph::new(Line::from(vec![
        Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
        Span::raw("Mark read  "),
        Span::styled(" a ", Style::default().fg(Color::Yellow)),
        Span::raw("All read  "),
        Span::styled(" d ", Style::default().fg(Color::Yellow)),
        Span::raw("Dismiss  "),
        Span::styled(" Esc ", Style::default().fg(Color::Yellow)),
        Span::raw("Close"),
    ]))
    .alignment(ratatui::layout::Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[1]);
}

fn notification_item(notification: &Notification, selected: bool) -> ListItem<'static> {
    let severity_color = match notification.severity {
        Severity::Success => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Info => Color::Cyan,
        Severity::Error => Color::Red,
    };

    let row_style = if selected {
        Style::default().bg(Color::Blue)
    } else {
        Style::default()
    };

    let title_style = if notification.read {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", notification.severity.icon()),
                Style::default().fg(severity_color),
            ),
            Span::styled(notification.title.clone(), title_style),
            Span::styled(
                if notification.read { "" } else { " ●" },
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                notification.message.clone(),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                notification.time.clone(),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    if let Some(ref action) = notification.action {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("[{}]", action),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }
    lines.push(Line::from(""));

    ListItem::new(lines).style(row_style)
}
