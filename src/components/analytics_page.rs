//! Analytics page - site traffic, top pages, and the conversion funnel

use crate::model::campaign::group_thousands;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

struct MonthlyTraffic {
    month: &'static str,
    sessions: u64,
    pageviews: u64,
    bounce_rate: u64,
    avg_duration_secs: u64,
}

const MONTHLY_TRAFFIC: [MonthlyTraffic; 6] = [
    MonthlyTraffic { month: "Jan", sessions: 45_600, pageviews: 125_400, bounce_rate: 28, avg_duration_secs: 185 },
    MonthlyTraffic { month: "Feb", sessions: 52_300, pageviews: 142_800, bounce_rate: 25, avg_duration_secs: 198 },
    MonthlyTraffic { month: "Mar", sessions: 61_200, pageviews: 168_900, bounce_rate: 22, avg_duration_secs: 212 },
    MonthlyTraffic { month: "Apr", sessions: 68_900, pageviews: 189_200, bounce_rate: 20, avg_duration_secs: 225 },
    MonthlyTraffic { month: "May", sessions: 78_400, pageviews: 215_600, bounce_rate: 18, avg_duration_secs: 238 },
    MonthlyTraffic { month: "Jun", sessions: 85_200, pageviews: 234_800, bounce_rate: 16, avg_duration_secs: 251 },
];

struct TopPage {
    path: &'static str,
    views: u64,
    unique_views: u64,
    avg_time: &'static str,
    bounce_rate: &'static str,
}

const TOP_PAGES: [TopPage; 5] = [
    TopPage { path: "/home", views: 89_600, unique_views: 67_400, avg_time: "4:32", bounce_rate: "15%" },
    TopPage { path: "/services", views: 72_300, unique_views: 58_900, avg_time: "6:18", bounce_rate: "12%" },
    TopPage { path: "/about", views: 54_800, unique_views: 44_100, avg_time: "3:45", bounce_rate: "22%" },
    TopPage { path: "/blog/marketing-trends", views: 43_400, unique_views: 38_800, avg_time: "7:23", bounce_rate: "9%" },
    TopPage { path: "/contact-us", views: 31_900, unique_views: 28_200, avg_time: "2:18", bounce_rate: "28%" },
];

struct FunnelStage {
    stage: &'static str,
    count: u64,
    percentage: u64,
}

const CONVERSION_FUNNEL: [FunnelStage; 5] = [
    FunnelStage { stage: "Website Visitors", count: 234_800, percentage: 100 },
    FunnelStage { stage: "Product Views", count: 164_360, percentage: 70 },
    FunnelStage { stage: "Add to Cart", count: 70_440, percentage: 30 },
    FunnelStage { stage: "Checkout Started", count: 35_220, percentage: 15 },
    FunnelStage { stage: "Purchase Complete", count: 11_792, percentage: 5 },
];

const KEY_METRICS: [(&str, &str, &str, bool); 4] = [
    ("Total Sessions", "234.8K", "+18.7%", true),
    ("Page Views", "687.2K", "+22.4%", true),
    ("Avg. Session Duration", "5:47", "+28.3%", true),
    ("Bounce Rate", "18.6%", "-12.8%", false),
];

pub fn render_analytics_page(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(7),
            Constraint::Length(9),
        ])
        .split(area);

    render_key_metrics(frame, chunks[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    render_top_pages(frame, middle[0]);
    render_funnel(frame, middle[1]);

    render_monthly_traffic(frame, chunks[2]);
}

fn render_key_metrics(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((title, value, change, up), chunk) in KEY_METRICS.iter().zip(chunks.iter()) {
        let change_color = if *up { Color::Green } else { Color::Red };
        let lines = vec![Line::from(vec![
            Span::styled(
                *value,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(*change, Style::default().fg(change_color)),
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

fn render_top_pages(frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        format!(
            " {:<24} {:>8} {:>8} {:>6} {:>7}",
            "Page", "Views", "Unique", "Time", "Bounce"
        ),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))];

    for page in &TOP_PAGES {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<24}", page.path), Style::default().fg(Color::White)),
            Span::styled(
                format!(" {:>8}", group_thousands(page.views)),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!(" {:>8}", group_thousands(page.unique_views)),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(format!(" {:>6}", page.avg_time), Style::default().fg(Color::Gray)),
            Span::styled(
                format!(" {:>7}", page.bounce_rate),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Top Pages ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(panel, area);
}

fn render_funnel(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Conversion Funnel ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 {
        return;
    }

    let bar_width = inner.width.saturating_sub(28) as u64;
    let lines: Vec<Line> = CONVERSION_FUNNEL
        .iter()
        .map(|stage| {
            let filled = (stage.percentage * bar_width / 100) as usize;
            Line::from(vec![
                Span::styled(
                    format!(" {:<17}", stage.stage),
                    Style::default().fg(Color::White),
                ),
                Span::styled("█".repeat(filled.max(1)), Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!(" {:>7} ({}%)", group_thousands(stage.count), stage.percentage),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_monthly_traffic(frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        format!(
            " {:<6} {:>10} {:>11} {:>8} {:>10}",
            "Month", "Sessions", "Pageviews", "Bounce", "Avg. Time"
        ),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))];

    for month in &MONTHLY_TRAFFIC {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<6}", month.month), Style::default().fg(Color::White)),
            Span::styled(
                format!(" {:>10}", group_thousands(month.sessions)),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!(" {:>11}", group_thousands(month.pageviews)),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!(" {:>7}%", month.bounce_rate),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!(
                    " {:>7}:{:02}",
                    month.avg_duration_secs / 60,
                    month.avg_duration_secs % 60
                ),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Monthly Traffic ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_funnel_narrows_stage_by_stage() {
        for pair in CONVERSION_FUNNEL.windows(2) {
            assert!(pair[0].count > pair[1].count);
            assert!(pair[0].percentage > pair[1].percentage);
        }
        assert_eq!(CONVERSION_FUNNEL[0].percentage, 100);
    }

    #[test]
    fn test_top_pages_ranked_by_views() {
        assert!(TOP_PAGES.windows(2).all(|w| w[0].views >= w[1].views));
    }
}
