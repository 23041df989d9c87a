//! Headline metric cards across the top of the dashboard

use crate::model::metrics::{Metric, Trend};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_metric_cards(frame: &mut Frame, area: Rect, metrics: &[Metric]) {
    if metrics.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = metrics
        .iter()
        .map(|_| Constraint::Ratio(1, metrics.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (metric, chunk) in metrics.iter().zip(chunks.iter()) {
        render_card(frame, *chunk, metric);
    }
}

fn render_card(frame: &mut Frame, area: Rect, metric: &Metric) {
    let change_color = match metric.trend {
        Trend::Up => Color::Green,
        Trend::Down => Color::Red,
    };

    let lines = vec![
        Line::from(Span::styled(
            metric.value.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} {:+.1}%", metric.trend.arrow(), metric.change),
            Style::default().fg(change_color),
        )),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", metric.title))
            .title_style(Style::default().fg(Color::Cyan))
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(card, area);
}
