//! Revenue, traffic, and channel charts on the dashboard

use crate::model::metrics::{ChannelPoint, MonthlyPoint, SourcePoint};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Paragraph, Sparkline},
    Frame,
};

pub fn render_charts_row(
    frame: &mut Frame,
    area: Rect,
    revenue: &[MonthlyPoint],
    traffic: &[SourcePoint],
    channels: &[ChannelPoint],
) {
    if area.height == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(28),
            Constraint::Percentage(32),
        ])
        .split(area);

    render_revenue_chart(frame, chunks[0], revenue);
    render_traffic_chart(frame, chunks[1], traffic);
    render_channel_chart(frame, chunks[2], channels);
}

/// Monthly revenue trend as a sparkline, latest month in the title
fn render_revenue_chart(frame: &mut Frame, area: Rect, revenue: &[MonthlyPoint]) {
    let values: Vec<u64> = revenue.iter().map(|p| p.revenue).collect();
    let title = match revenue.last() {
        Some(point) => format!(
            " Revenue Trend ({}: ${}k · {} users · {} conv) ",
            point.month,
            point.revenue / 1000,
            point.users,
            point.conversions
        ),
        None => " Revenue Trend ".to_string(),
    };

    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::Cyan))
        .data(&values);

    frame.render_widget(sparkline, area);
}

/// Traffic source shares as labeled percentage bars, one per line
fn render_traffic_chart(frame: &mut Frame, area: Rect, traffic: &[SourcePoint]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Traffic Sources ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // "Organic Search" is the widest label at 14 columns
    let bar_width = inner.width.saturating_sub(21) as u64;
    let lines: Vec<Line> = traffic
        .iter()
        .map(|point| {
            let filled = (point.share * bar_width / 100) as usize;
            Line::from(vec![
                Span::styled(
                    format!("{:<14} ", point.source),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled("█".repeat(filled), Style::default().fg(Color::Green)),
                Span::styled(
                    format!(" {:>3}%", point.share),
                    Style::default().fg(Color::White),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Per-channel spend, in thousands so bar value labels stay short
fn render_channel_chart(frame: &mut Frame, area: Rect, channels: &[ChannelPoint]) {
    let data: Vec<(&str, u64)> = channels
        .iter()
        .map(|point| (short_label(point.channel), point.spend / 1000))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Channel Spend ($k) ")
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .bar_width(8)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Magenta))
        .value_style(Style::default().fg(Color::White))
        .label_style(Style::default().fg(Color::DarkGray))
        .data(&data);

    frame.render_widget(chart, area);
}

fn short_label(channel: &str) -> &str {
    match channel {
        "Google Ads" => "Google",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mock::{self, Rng};
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_charts_row_renders_all_three_panels() {
        let mut rng = Rng::new(5);
        let revenue = mock::generate_revenue_series(&mut rng);
        let traffic = mock::generate_traffic_sources();
        let channels = mock::generate_channels(&mut rng);

        let backend = TestBackend::new(140, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                render_charts_row(frame, frame.area(), &revenue, &traffic, &channels)
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Revenue Trend"));
        assert!(text.contains("Traffic Sources"));
        assert!(text.contains("Channel Spend"));
        assert!(text.contains("Organic Search"));
        assert!(text.contains("35%"));
    }
}
