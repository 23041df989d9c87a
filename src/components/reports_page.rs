//! Reports page - report templates and recently generated files

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Clone, Copy, PartialEq)]
enum TemplateStatus {
    Ready,
    Processing,
    Draft,
}

impl TemplateStatus {
    fn name(self) -> &'static str {
        match self {
            TemplateStatus::Ready => "Ready",
            TemplateStatus::Processing => "Processing",
            TemplateStatus::Draft => "Draft",
        }
    }

    fn color(self) -> Color {
        match self {
            TemplateStatus::Ready => Color::Green,
            TemplateStatus::Processing => Color::Yellow,
            TemplateStatus::Draft => Color::DarkGray,
        }
    }
}

struct ReportTemplate {
    name: &'static str,
    description: &'static str,
    category: &'static str,
    last_generated: &'static str,
    status: TemplateStatus,
    downloads: u64,
    kind: &'static str,
}

const REPORT_TEMPLATES: [ReportTemplate; 6] = [
    ReportTemplate {
        name: "Monthly Performance Report",
        description: "Comprehensive monthly analytics with key metrics and insights",
        category: "Performance",
        last_generated: "2024-01-15",
        status: TemplateStatus::Ready,
        downloads: 234,
        kind: "Automated",
    },
    ReportTemplate {
        name: "Campaign ROI Analysis",
        description: "Detailed return on investment analysis for all marketing campaigns",
        category: "ROI",
        last_generated: "2024-01-14",
        status: TemplateStatus::Processing,
        downloads: 156,
        kind: "Custom",
    },
    ReportTemplate {
        name: "Audience Behavior Study",
        description: "In-depth analysis of user behavior patterns and preferences",
        category: "Audience",
        last_generated: "2024-01-13",
        status: TemplateStatus::Ready,
        downloads: 89,
        kind: "Scheduled",
    },
    ReportTemplate {
        name: "Conversion Funnel Report",
        description: "Step-by-step analysis of user conversion journey",
        category: "Conversion",
        last_generated: "2024-01-12",
        status: TemplateStatus::Ready,
        downloads: 167,
        kind: "Automated",
    },
    ReportTemplate {
        name: "Competitive Analysis",
        description: "Market positioning and competitor performance comparison",
        category: "Competition",
        last_generated: "2024-01-11",
        status: TemplateStatus::Draft,
        downloads: 45,
        kind: "Custom",
    },
    ReportTemplate {
        name: "Social Media Performance",
        description: "Cross-platform social media analytics and engagement metrics",
        category: "Social",
        last_generated: "2024-01-10",
        status: TemplateStatus::Ready,
        downloads: 198,
        kind: "Scheduled",
    },
];

const RECENT_REPORTS: [(&str, &str, &str, &str); 4] = [
    ("Q4 2023 Summary", "2024-01-08", "2.4 MB", "PDF"),
    ("Holiday Campaign Analysis", "2024-01-05", "1.8 MB", "Excel"),
    ("Year-End Performance", "2024-01-03", "3.1 MB", "PDF"),
    ("Customer Segmentation", "2024-01-01", "1.2 MB", "CSV"),
];

pub fn render_reports_page(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(7)])
        .split(area);

    render_templates(frame, chunks[0]);
    render_recent(frame, chunks[1]);
}

fn render_templates(frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for template in &REPORT_TEMPLATES {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<28}", template.name),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:<12}", template.category),
                Style::default().fg(Color::Magenta),
            ),
            Span::styled(
                format!("{:<11}", template.status.name()),
                Style::default().fg(template.status.color()),
            ),
            Span::styled(
                format!("{:<10}", template.kind),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("{:>4} downloads", template.downloads),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "   {}  (last generated {})",
                template.description, template.last_generated
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Report Templates ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(panel, area);
}

fn render_recent(frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for (name, date, size, format) in &RECENT_REPORTS {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<28}", name), Style::default().fg(Color::White)),
            Span::styled(format!("{:<12}", date), Style::default().fg(Color::Gray)),
            Span::styled(format!("{:>7}", size), Style::default().fg(Color::Gray)),
            Span::styled(format!("  {}", format), Style::default().fg(Color::Cyan)),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Recent Reports ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_cover_all_statuses() {
        assert!(REPORT_TEMPLATES
            .iter()
            .any(|t| t.status == TemplateStatus::Ready));
        assert!(REPORT_TEMPLATES
            .iter()
            .any(|t| t.status == TemplateStatus::Processing));
        assert!(REPORT_TEMPLATES
            .iter()
            .any(|t| t.status == TemplateStatus::Draft));
    }
}
