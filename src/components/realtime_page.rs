//! Real-time page - live counters, active pages, and the activity feed

use crate::model::campaign::group_thousands;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const LIVE_COUNTERS: [(&str, &str); 4] = [
    ("Active Users", "2,847"),
    ("Page Views Today", "8,456"),
    ("Sessions Today", "1,892"),
    ("Conversion Rate", "4.7%"),
];

struct ActivePage {
    path: &'static str,
    users: u64,
    percentage: f64,
}

const ACTIVE_PAGES: [ActivePage; 5] = [
    ActivePage { path: "/live-demo", users: 534, percentage: 28.8 },
    ActivePage { path: "/special-offer", users: 389, percentage: 21.2 },
    ActivePage { path: "/new-features", users: 256, percentage: 16.5 },
    ActivePage { path: "/webinar", users: 184, percentage: 12.7 },
    ActivePage { path: "/support", users: 128, percentage: 8.9 },
];

#[derive(Clone, Copy, PartialEq)]
enum EventKind {
    Conversion,
    Signup,
    Pageview,
}

impl EventKind {
    fn color(self) -> Color {
        match self {
            EventKind::Conversion => Color::Green,
            EventKind::Signup => Color::Blue,
            EventKind::Pageview => Color::Magenta,
        }
    }
}

struct LiveEvent {
    kind: EventKind,
    user: &'static str,
    action: &'static str,
    time: &'static str,
    value: Option<&'static str>,
}

const RECENT_EVENTS: [LiveEvent; 5] = [
    LiveEvent { kind: EventKind::Conversion, user: "User #2847", action: "Premium subscription", time: "3 seconds ago", value: Some("$99") },
    LiveEvent { kind: EventKind::Signup, user: "User #2846", action: "Newsletter signup", time: "12 seconds ago", value: None },
    LiveEvent { kind: EventKind::Pageview, user: "User #2845", action: "Viewed live demo", time: "18 seconds ago", value: None },
    LiveEvent { kind: EventKind::Conversion, user: "User #2844", action: "Downloaded whitepaper", time: "32 seconds ago", value: Some("$0") },
    LiveEvent { kind: EventKind::Pageview, user: "User #2843", action: "Viewed special offer", time: "47 seconds ago", value: None },
];

struct LiveSource {
    source: &'static str,
    users: u64,
    percentage: f64,
}

const LIVE_TRAFFIC: [LiveSource; 5] = [
    LiveSource { source: "Organic Search", users: 1_139, percentage: 40.0 },
    LiveSource { source: "Social Media", users: 854, percentage: 30.0 },
    LiveSource { source: "Direct Traffic", users: 569, percentage: 20.0 },
    LiveSource { source: "Email Campaign", users: 171, percentage: 6.0 },
    LiveSource { source: "Paid Ads", users: 114, percentage: 4.0 },
];

pub fn render_realtime_page(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(7)])
        .split(area);

    render_live_counters(frame, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(28),
            Constraint::Percentage(42),
            Constraint::Percentage(30),
        ])
        .split(chunks[1]);
    render_active_pages(frame, columns[0]);
    render_activity_feed(frame, columns[1]);
    render_live_traffic(frame, columns[2]);
}

fn render_live_counters(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((title, value), chunk) in LIVE_COUNTERS.iter().zip(chunks.iter()) {
        let lines = vec![Line::from(vec![
            Span::styled(
                *value,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ● Live", Style::default().fg(Color::Green)),
        ])];
        let card = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title))
                .title_style(Style::default().fg(Color::Cyan))
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(card, *chunk);
    }
}

fn render_active_pages(frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for page in &ACTIVE_PAGES {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<16}", page.path), Style::default().fg(Color::White)),
            Span::styled(
                format!("{:>4} users", page.users),
                Style::default().fg(Color::Gray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {:.1}% of active traffic", page.percentage),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Active Pages ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(panel, area);
}

fn render_activity_feed(frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for event in &RECENT_EVENTS {
        let mut spans = vec![
            Span::styled(" ● ", Style::default().fg(event.kind.color())),
            Span::styled(
                event.user,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", event.action), Style::default().fg(Color::Gray)),
        ];
        if let Some(value) = event.value {
            spans.push(Span::styled(
                format!("  {}", value),
                Style::default().fg(Color::Green),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(Span::styled(
            format!("   {}", event.time),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Live Activity ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(panel, area);
}

fn render_live_traffic(frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for source in &LIVE_TRAFFIC {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<15}", source.source),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{:>5}", group_thousands(source.users)),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!(" {:>5.1}%", source.percentage),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Traffic Sources (Live) ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_traffic_user_counts_match_shares() {
        let total: u64 = LIVE_TRAFFIC.iter().map(|s| s.users).sum();
        for source in &LIVE_TRAFFIC {
            let share = source.users as f64 / total as f64 * 100.0;
            assert!((share - source.percentage).abs() < 1.0, "{}", source.source);
        }
    }

    #[test]
    fn test_feed_interleaves_event_kinds() {
        assert!(RECENT_EVENTS.iter().any(|e| e.kind == EventKind::Conversion));
        assert!(RECENT_EVENTS.iter().any(|e| e.kind == EventKind::Signup));
        assert!(RECENT_EVENTS.iter().any(|e| e.kind == EventKind::Pageview));
    }
}
