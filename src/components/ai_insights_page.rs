//! AI insights page - recommendations, predictive models, and suggested automations

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Clone, Copy, PartialEq)]
enum InsightKind {
    Opportunity,
    Warning,
    Insight,
    Trend,
}

impl InsightKind {
    fn icon(self) -> &'static str {
        match self {
            InsightKind::Opportunity => "◎",
            InsightKind::Warning => "⚠",
            InsightKind::Insight => "✦",
            InsightKind::Trend => "↗",
        }
    }

    fn color(self) -> Color {
        match self {
            InsightKind::Opportunity => Color::Green,
            InsightKind::Warning => Color::Yellow,
            InsightKind::Insight => Color::Blue,
            InsightKind::Trend => Color::Magenta,
        }
    }
}

struct Insight {
    kind: InsightKind,
    title: &'static str,
    description: &'static str,
    impact: &'static str,
    confidence: u64,
    delta: &'static str,
    category: &'static str,
}

const INSIGHTS: [Insight; 4] = [
    Insight {
        kind: InsightKind::Opportunity,
        title: "Optimize Google Ads Budget Allocation",
        description: "Reallocating 15% of budget from Campaign A to Campaign B could increase ROI by 34%",
        impact: "High",
        confidence: 92,
        delta: "+$12,400/month",
        category: "Budget Optimization",
    },
    Insight {
        kind: InsightKind::Warning,
        title: "Declining Facebook Campaign Performance",
        description: "CTR has dropped 23% over the past 7 days. Consider refreshing ad creatives or adjusting targeting",
        impact: "Medium",
        confidence: 87,
        delta: "-$8,200/month",
        category: "Performance Alert",
    },
    Insight {
        kind: InsightKind::Insight,
        title: "Audience Segment Discovery",
        description: "New high-value segment \"Tech Professionals 25-34\" shows 45% higher conversion rates",
        impact: "High",
        confidence: 95,
        delta: "+$18,600/month",
        category: "Audience Analysis",
    },
    Insight {
        kind: InsightKind::Trend,
        title: "Seasonal Pattern Detected",
        description: "Historical data shows 67% more conversions during weekends. Consider increasing weekend ad spend",
        impact: "Medium",
        confidence: 89,
        delta: "+$6,800/month",
        category: "Timing Optimization",
    },
];

struct PredictiveModel {
    name: &'static str,
    accuracy: u64,
    prediction: &'static str,
    trend: &'static str,
}

const PREDICTIVE_MODELS: [PredictiveModel; 4] = [
    PredictiveModel { name: "Customer Lifetime Value", accuracy: 94, prediction: "$2,847", trend: "+12%" },
    PredictiveModel { name: "Churn Probability", accuracy: 91, prediction: "8.3%", trend: "-2.1%" },
    PredictiveModel { name: "Conversion Rate Forecast", accuracy: 88, prediction: "4.2%", trend: "+0.8%" },
    PredictiveModel { name: "Revenue Projection", accuracy: 92, prediction: "$847K", trend: "+15%" },
];

const SUGGESTIONS: [(&str, &str, &str); 3] = [
    ("Auto-pause Low Performing Ads", "$3,200/month", "Low"),
    ("Dynamic Bid Adjustments", "$5,800/month", "Medium"),
    ("Smart Budget Reallocation", "$8,400/month", "Low"),
];

pub fn render_ai_insights_page(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(area);

    render_insights(frame, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(6)])
        .split(columns[1]);
    render_models(frame, right[0]);
    render_suggestions(frame, right[1]);
}

fn render_insights(frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for insight in &INSIGHTS {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", insight.kind.icon()),
                Style::default().fg(insight.kind.color()),
            ),
            Span::styled(
                insight.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", insight.description),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(vec![
            Span::styled(
                format!("   {} impact", insight.impact),
                Style::default().fg(if insight.impact == "High" {
                    Color::Red
                } else {
                    Color::Yellow
                }),
            ),
            Span::styled(
                format!("  {}% confidence", insight.confidence),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("  {}", insight.delta),
                Style::default().fg(if insight.delta.starts_with('+') {
                    Color::Green
                } else {
                    Color::Red
                }),
            ),
            Span::styled(
                format!("  [{}]", insight.category),
                Style::default().fg(Color::Magenta),
            ),
        ]));
        lines.push(Line::from(""));
    }

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" AI Insights ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(panel, area);
}

fn render_models(frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for model in &PREDICTIVE_MODELS {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<25}", model.name),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{:>7}", model.prediction),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {:>5}", model.trend),
                Style::default().fg(if model.trend.starts_with('+') {
                    Color::Green
                } else {
                    Color::Red
                }),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}% model accuracy", model.accuracy),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Predictive Models ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(panel, area);
}

fn render_suggestions(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = SUGGESTIONS
        .iter()
        .map(|(title, savings, effort)| {
            Line::from(vec![
                Span::styled(format!(" {:<30}", title), Style::default().fg(Color::White)),
                Span::styled(
                    format!("{:>13}", savings),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!("  {} effort", effort),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggested Automations ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_deltas_are_signed() {
        for insight in &INSIGHTS {
            assert!(insight.delta.starts_with('+') || insight.delta.starts_with('-'));
            assert!((0..=100).contains(&insight.confidence));
        }
        assert!(INSIGHTS.iter().any(|i| i.kind == InsightKind::Warning));
    }
}
