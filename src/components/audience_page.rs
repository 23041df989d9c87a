//! Audience page - demographics, devices, locations, and interests

use crate::model::campaign::group_thousands;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const AGE_GROUPS: [(&str, u64, u64); 5] = [
    ("18-24", 15, 18_750),
    ("25-34", 35, 43_750),
    ("35-44", 28, 35_000),
    ("45-54", 15, 18_750),
    ("55+", 7, 8_750),
];

const DEVICES: [(&str, u64); 3] = [("Desktop", 45), ("Mobile", 42), ("Tablet", 13)];

const LOCATIONS: [(&str, u64, f64); 7] = [
    ("United States", 45_600, 36.5),
    ("United Kingdom", 23_400, 18.7),
    ("Canada", 18_900, 15.1),
    ("Australia", 12_300, 9.8),
    ("Germany", 9_800, 7.8),
    ("France", 7_600, 6.1),
    ("Others", 7_400, 5.9),
];

const INTERESTS: [(&str, u64); 6] = [
    ("Technology", 92),
    ("Business", 87),
    ("Marketing", 84),
    ("Design", 79),
    ("Finance", 73),
    ("Education", 68),
];

pub fn render_audience_page(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_age_groups(frame, top[0]);
    render_devices(frame, top[1]);
    render_locations(frame, bottom[0]);
    render_interests(frame, bottom[1]);
}

fn share_bar_line(label: String, share: u64, detail: String, width: u16, color: Color) -> Line<'static> {
    let bar_width = width.saturating_sub(28) as u64;
    let filled = (share * bar_width / 100) as usize;
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::White)),
        Span::styled("█".repeat(filled.max(1)), Style::default().fg(color)),
        Span::styled(detail, Style::default().fg(Color::Gray)),
    ])
}

fn render_age_groups(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Age Groups ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = AGE_GROUPS
        .iter()
        .map(|(age, share, count)| {
            share_bar_line(
                format!(" {:<7}", age),
                *share,
                format!(" {:>3}% ({})", share, group_thousands(*count)),
                inner.width,
                Color::Blue,
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_devices(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Devices ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = DEVICES
        .iter()
        .map(|(device, share)| {
            share_bar_line(
                format!(" {:<8}", device),
                *share,
                format!(" {:>3}%", share),
                inner.width,
                Color::Magenta,
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_locations(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = LOCATIONS
        .iter()
        .map(|(country, users, share)| {
            Line::from(vec![
                Span::styled(format!(" {:<16}", country), Style::default().fg(Color::White)),
                Span::styled(
                    format!("{:>7}", group_thousands(*users)),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!(" {:>5.1}%", share),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Top Locations ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(panel, area);
}

fn render_interests(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Interests (affinity score) ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = INTERESTS
        .iter()
        .map(|(interest, score)| {
            share_bar_line(
                format!(" {:<11}", interest),
                *score,
                format!(" {:>3}", score),
                inner.width,
                Color::Green,
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shares_sum_to_whole_audience() {
        assert_eq!(AGE_GROUPS.iter().map(|g| g.1).sum::<u64>(), 100);
        assert_eq!(DEVICES.iter().map(|d| d.1).sum::<u64>(), 100);
        let location_total: f64 = LOCATIONS.iter().map(|l| l.2).sum();
        assert!((location_total - 99.9).abs() < 0.2);
    }
}
