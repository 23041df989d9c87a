//! Dashboard component - the main application screen
//!
//! Shows the headline metric cards, charts, and the campaign table.
//! Owns the table's query state and the sort-header cursor; all table
//! state changes go through the query engine's operations.

use crate::action::Action;
use crate::component::Component;
use crate::components::charts::render_charts_row;
use crate::components::layout::calculate_dashboard_layout;
use crate::components::metric_cards::render_metric_cards;
use crate::components::nav::render_nav;
use crate::components::table::{render_campaign_table, TableRenderContext};
use crate::model::campaign::{Campaign, SortField};
use crate::model::metrics::{ChannelPoint, Metric, MonthlyPoint, SourcePoint};
use crate::model::query::{self, QueryState};
use crate::model::ui::Page;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Dashboard screen state
pub struct DashboardComponent {
    /// Campaign table query parameters
    pub query: QueryState,

    /// Index into `SortField::columns()` of the highlighted header
    pub header_cursor: usize,

    /// Whether table search input mode is active
    pub search_mode: bool,
}

impl DashboardComponent {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: QueryState::new(page_size),
            header_cursor: 0,
            search_mode: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sorting
    // ─────────────────────────────────────────────────────────────────────────

    pub fn next_column(&mut self) {
        let count = SortField::columns().len();
        self.header_cursor = (self.header_cursor + 1) % count;
    }

    pub fn prev_column(&mut self) {
        let count = SortField::columns().len();
        self.header_cursor = (self.header_cursor + count - 1) % count;
    }

    /// Sort by the column under the header cursor
    pub fn sort_by_cursor(&mut self) {
        let field = SortField::columns()[self.header_cursor];
        self.query.set_sort(field);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pagination
    // ─────────────────────────────────────────────────────────────────────────
    // The engine itself never clamps the page; the dashboard clamps the
    // pages it requests against the current result's page count.

    pub fn next_result_page(&mut self, campaigns: &[Campaign]) {
        let total_pages = query::query(campaigns, &self.query).total_pages;
        self.query.set_page((self.query.page() + 1).min(total_pages));
    }

    pub fn prev_result_page(&mut self) {
        self.query.set_page(self.query.page().saturating_sub(1));
    }

    pub fn first_result_page(&mut self) {
        self.query.set_page(1);
    }

    pub fn last_result_page(&mut self, campaigns: &[Campaign]) {
        let total_pages = query::query(campaigns, &self.query).total_pages;
        self.query.set_page(total_pages);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    pub fn search_input(&mut self, c: char) {
        let mut term = self.query.search_term().to_string();
        term.push(c);
        self.query.set_search(term);
    }

    pub fn search_backspace(&mut self) {
        let mut term = self.query.search_term().to_string();
        term.pop();
        self.query.set_search(term);
    }

    pub fn clear_search(&mut self) {
        self.query.set_search(String::new());
    }
}

impl Component for DashboardComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Sort headers
            KeyCode::Char('l') | KeyCode::Right => Some(Action::NextColumn),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevColumn),
            KeyCode::Enter | KeyCode::Char('o') => Some(Action::SortByCursor),

            // Pagination
            KeyCode::Char('n') | KeyCode::PageDown => Some(Action::NextResultPage),
            KeyCode::Char('p') | KeyCode::PageUp => Some(Action::PrevResultPage),
            KeyCode::Char('g') => Some(Action::FirstResultPage),
            KeyCode::Char('G') => Some(Action::LastResultPage),

            // Search & filter
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Esc if !self.query.search_term().is_empty() => Some(Action::ClearSearch),
            KeyCode::Char('f') => Some(Action::OpenStatusFilter),

            // Data
            KeyCode::Char('e') => Some(Action::ExportCsv),
            KeyCode::Char('r') => Some(Action::RegenerateData),

            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing goes through draw_dashboard which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the dashboard screen
pub struct DashboardRenderContext<'a> {
    pub campaigns: &'a [Campaign],
    pub metrics: &'a [Metric],
    pub revenue: &'a [MonthlyPoint],
    pub traffic: &'a [SourcePoint],
    pub channels: &'a [ChannelPoint],
    pub unread_notifications: usize,
    pub currency: &'a str,
    pub error: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

/// Draw the dashboard screen
pub fn draw_dashboard(
    frame: &mut Frame,
    area: Rect,
    dashboard: &mut DashboardComponent,
    ctx: &DashboardRenderContext,
) -> Result<()> {
    let layout = calculate_dashboard_layout(area);

    render_nav(frame, layout.nav, Page::Dashboard, ctx.unread_notifications);
    render_metric_cards(frame, layout.metrics, ctx.metrics);
    render_charts_row(frame, layout.charts, ctx.revenue, ctx.traffic, ctx.channels);

    let result = query::query(ctx.campaigns, &dashboard.query);
    render_campaign_table(
        frame,
        layout.table,
        &TableRenderContext {
            state: &dashboard.query,
            result: &result,
            header_cursor: dashboard.header_cursor,
            search_mode: dashboard.search_mode,
            currency: ctx.currency,
        },
    );

    render_status_bar(frame, layout.status, ctx);
    render_help_bar(frame, layout.help, dashboard);

    Ok(())
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &DashboardRenderContext) {
    let mut spans = vec![Span::styled(
        " adlens ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(error) = ctx.error {
        spans.push(Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(Color::Red),
        ));
    } else if let Some(status) = ctx.status_message {
        spans.push(Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, dashboard: &DashboardComponent) {
    let key = |label: &'static str| {
        Span::styled(
            format!(" {} ", label),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };

    let spans = if dashboard.search_mode {
        vec![
            key("Esc"),
            Span::raw("Done  "),
            Span::styled(
                format!("Search: {}", dashboard.query.search_term()),
                Style::default().fg(Color::Cyan),
            ),
        ]
    } else {
        vec![
            key("h/l"),
            Span::raw("Column "),
            key("Enter"),
            Span::raw("Sort "),
            key("n/p"),
            Span::raw("Page "),
            key("/"),
            Span::raw("Search "),
            key("f"),
            Span::raw("Filter "),
            key("e"),
            Span::raw("Export "),
            key("s"),
            Span::raw("Find "),
            key("b"),
            Span::raw("Alerts "),
            key("?"),
            Span::raw("Help "),
            key("q"),
            Span::raw("Quit"),
        ]
    };

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mock::{generate_campaigns, Rng};

    #[test]
    fn test_header_cursor_wraps() {
        let mut dashboard = DashboardComponent::new(10);
        let count = SortField::columns().len();

        dashboard.prev_column();
        assert_eq!(dashboard.header_cursor, count - 1);
        dashboard.next_column();
        assert_eq!(dashboard.header_cursor, 0);
    }

    #[test]
    fn test_sort_by_cursor_targets_highlighted_column() {
        let mut dashboard = DashboardComponent::new(10);
        dashboard.next_column();
        dashboard.next_column(); // Budget
        dashboard.sort_by_cursor();
        assert_eq!(dashboard.query.sort_field(), SortField::Budget);
    }

    #[test]
    fn test_sort_keys_emit_cursor_sort() {
        use crossterm::event::KeyModifiers;

        let mut dashboard = DashboardComponent::new(10);
        for code in [KeyCode::Enter, KeyCode::Char('o')] {
            let action = dashboard
                .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
                .unwrap();
            assert_eq!(action, Some(Action::SortByCursor));
        }
    }

    #[test]
    fn test_page_navigation_clamps_to_bounds() {
        let campaigns = generate_campaigns(&mut Rng::new(4));
        let mut dashboard = DashboardComponent::new(10);

        dashboard.prev_result_page();
        assert_eq!(dashboard.query.page(), 1);

        dashboard.next_result_page(&campaigns);
        assert_eq!(dashboard.query.page(), 2);
        // 12 rows at 10 per page: already on the last page
        dashboard.next_result_page(&campaigns);
        assert_eq!(dashboard.query.page(), 2);

        dashboard.first_result_page();
        assert_eq!(dashboard.query.page(), 1);
        dashboard.last_result_page(&campaigns);
        assert_eq!(dashboard.query.page(), 2);
    }

    #[test]
    fn test_search_input_builds_term() {
        let mut dashboard = DashboardComponent::new(10);
        dashboard.enter_search_mode();
        for c in "Sum".chars() {
            dashboard.search_input(c);
        }
        assert_eq!(dashboard.query.search_term(), "Sum");

        dashboard.search_backspace();
        assert_eq!(dashboard.query.search_term(), "Su");

        dashboard.clear_search();
        assert!(dashboard.query.search_term().is_empty());
    }
}
