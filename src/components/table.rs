//! Campaign performance table
//!
//! Renders one page of query results with sortable column headers, a
//! pagination footer, and the same cell formatting as the CSV export.

use crate::model::campaign::{group_thousands, Campaign, SortField, Status};
use crate::model::query::{QueryResult, QueryState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Everything the table needs beyond the query result itself
pub struct TableRenderContext<'a> {
    pub state: &'a QueryState,
    pub result: &'a QueryResult<'a>,
    /// Index into `SortField::columns()` of the highlighted header
    pub header_cursor: usize,
    pub search_mode: bool,
    pub currency: &'a str,
}

pub fn render_campaign_table(frame: &mut Frame, area: Rect, ctx: &TableRenderContext) {
    let columns = SortField::columns();
    let cells: Vec<Vec<String>> = ctx
        .result
        .page_rows
        .iter()
        .map(|row| row_cells(row, &columns, ctx.currency))
        .collect();

    let widths = column_widths(&columns, &cells, ctx.state);

    let mut lines = Vec::new();
    lines.push(header_line(&columns, &widths, ctx));
    lines.push(separator_line(&widths));
    for (row, row_cells) in ctx.result.page_rows.iter().zip(&cells) {
        lines.push(row_line(row, row_cells, &columns, &widths));
    }
    if ctx.result.page_rows.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No campaigns match the current filters",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(footer_line(ctx));

    let title = table_title(ctx);
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}

fn table_title(ctx: &TableRenderContext) -> String {
    let mut title = format!(" Campaign Performance ({}) ", ctx.result.total_count);
    if ctx.search_mode || !ctx.state.search_term().is_empty() {
        title = format!("{}[search:{}] ", title, ctx.state.search_term());
    }
    match ctx.state.status_filter() {
        crate::model::query::StatusFilter::All => {}
        filter => title = format!("{}[{}] ", title, filter.label()),
    }
    title
}

fn row_cells(row: &Campaign, columns: &[SortField], currency: &str) -> Vec<String> {
    columns
        .iter()
        .map(|column| match column {
            SortField::Name => row.name.clone(),
            SortField::Status => row.status.name().to_string(),
            SortField::Budget => format!("{}{}", currency, group_thousands(row.budget as u64)),
            SortField::Spent => format!("{}{}", currency, group_thousands(row.spent as u64)),
            SortField::Clicks => group_thousands(row.clicks),
            SortField::Conversions => row.conversions.to_string(),
            SortField::Roas => format!("{:.2}x", row.roas),
        })
        .collect()
}

/// Column widths sized to content, header label, and sort indicator
fn column_widths(columns: &[SortField], cells: &[Vec<String>], state: &QueryState) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            // Two extra cells for the indicator on the active sort column
            let mut width = column.label().width()
                + if *column == state.sort_field() { 2 } else { 0 };
            for row in cells {
                width = width.max(row[i].width());
            }
            width
        })
        .collect()
}

fn header_line<'a>(
    columns: &[SortField],
    widths: &[usize],
    ctx: &TableRenderContext,
) -> Line<'a> {
    let mut spans = Vec::new();
    for (i, column) in columns.iter().enumerate() {
        let mut label = column.label().to_string();
        if *column == ctx.state.sort_field() {
            label = format!("{} {}", label, ctx.state.sort_direction().indicator());
        }

        let style = if i == ctx.header_cursor {
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        };

        spans.push(Span::styled(pad(&label, widths[i], column.is_numeric()), style));
        spans.push(Span::raw(" │ "));
    }
    Line::from(spans)
}

fn separator_line<'a>(widths: &[usize]) -> Line<'a> {
    let separator: String = widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─");
    Line::from(Span::styled(separator, Style::default().fg(Color::DarkGray)))
}

fn row_line<'a>(
    row: &Campaign,
    cells: &[String],
    columns: &[SortField],
    widths: &[usize],
) -> Line<'a> {
    let mut spans = Vec::new();
    for (i, column) in columns.iter().enumerate() {
        let style = match column {
            SortField::Status => status_style(row.status),
            SortField::Roas => roas_style(row.roas),
            _ => Style::default().fg(Color::White),
        };
        spans.push(Span::styled(
            pad(&cells[i], widths[i], column.is_numeric()),
            style,
        ));
        spans.push(Span::raw(" │ "));
    }
    Line::from(spans)
}

fn footer_line<'a>(ctx: &TableRenderContext) -> Line<'a> {
    let total = ctx.result.total_count;
    let page = ctx.state.page();
    let page_size = ctx.state.page_size();

    let text = if total == 0 || ctx.result.page_rows.is_empty() {
        format!("Showing 0 of {} results", total)
    } else {
        let first = (page - 1) * page_size + 1;
        let last = (page * page_size).min(total);
        format!("Showing {} to {} of {} results", first, last, total)
    };

    Line::from(vec![
        Span::styled(text, Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("   Page {}/{}", page, ctx.result.total_pages),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn status_style(status: Status) -> Style {
    match status {
        Status::Active => Style::default().fg(Color::Green),
        Status::Paused => Style::default().fg(Color::Yellow),
        Status::Completed => Style::default().fg(Color::DarkGray),
    }
}

/// Traffic-light thresholds for return on ad spend
fn roas_style(roas: f64) -> Style {
    if roas >= 3.0 {
        Style::default().fg(Color::Green)
    } else if roas >= 2.0 {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Red)
    }
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    let padding = width.saturating_sub(text.width());
    if right_align {
        format!("{}{}", " ".repeat(padding), text)
    } else {
        format!("{}{}", text, " ".repeat(padding))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_alignment() {
        assert_eq!(pad("ab", 4, false), "ab  ");
        assert_eq!(pad("ab", 4, true), "  ab");
        assert_eq!(pad("abcd", 2, true), "abcd");
    }
}
