//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App is intentionally lean - it coordinates between components but
//! does not contain business logic itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_dashboard, render_ai_insights_page, render_analytics_page, render_audience_page,
    render_automation_page, render_global_search, render_nav, render_notifications,
    render_realtime_page, render_reports_page, DashboardComponent, DashboardRenderContext,
    HelpDialog, QuitDialog, SettingsComponent, StatusFilterDialog,
};
use crate::components::calculate_page_layout;
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::{query, unread_count, DomainState, Page};
use crate::services;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::path::Path;

/// Ticks between simulated live-metric refreshes (250ms tick rate)
const METRIC_REFRESH_TICKS: u32 = 20;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Persisted settings
    pub config: Config,

    /// Domain state (business data)
    pub domain: DomainState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Page shown behind any modals
    pub active_page: Page,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Ticks since the last metric refresh
    ticks_since_refresh: u32,

    // Components
    pub dashboard: DashboardComponent,
    pub settings: SettingsComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub status_filter_dialog: StatusFilterDialog,
}

impl App {
    pub fn new(config: Config, seed: u64) -> Self {
        let dashboard = DashboardComponent::new(config.page_size);
        let settings = SettingsComponent::new(&config);
        Self {
            domain: DomainState::generate(seed),
            modals: ModalStack::new(),
            active_page: Page::Dashboard,
            should_quit: false,
            error: None,
            status_message: None,
            ticks_since_refresh: 0,
            dashboard,
            settings,
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            status_filter_dialog: StatusFilterDialog::new(),
            config,
        }
    }

    fn go_to_page(&mut self, page: Page) {
        self.active_page = page;
        self.status_message = None;
        self.error = None;
    }

    fn cycle_page(&mut self, forward: bool) {
        let pages = Page::all();
        let current = pages
            .iter()
            .position(|p| *p == self.active_page)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % pages.len()
        } else {
            (current + pages.len() - 1) % pages.len()
        };
        self.go_to_page(pages[next]);
    }

    fn export_campaigns(&mut self) {
        let rows = query::filtered_sorted(&self.domain.campaigns, &self.dashboard.query);
        match services::export_csv(Path::new(&self.config.export_dir), &rows, &self.config.currency)
        {
            Ok(path) => {
                self.error = None;
                self.status_message =
                    Some(format!("Exported {} row(s) to {}", rows.len(), path.display()));
            }
            Err(e) => {
                self.status_message = None;
                self.error = Some(format!("Export failed: {}", e));
            }
        }
    }

    fn regenerate_data(&mut self) {
        let seed = self.domain.seed.wrapping_add(1);
        self.domain.regenerate(seed);
        self.status_message = Some(format!("Regenerated data (seed {})", seed));
    }

    fn save_config(&mut self) {
        self.config = self.settings.draft.clone();
        match self.config.save() {
            Ok(()) => {
                self.error = None;
                self.status_message = Some("Settings saved".to_string());
            }
            Err(e) => {
                self.status_message = None;
                self.error = Some(format!("Could not save settings: {}", e));
            }
        }
        self.dashboard.query.set_page_size(self.config.page_size);
        if self.config.seed != self.domain.seed && self.config.seed != 0 {
            self.domain.regenerate(self.config.seed);
        }
        self.settings.sync(&self.config);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Key routing
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
            Modal::StatusFilter => self.status_filter_dialog.handle_key_event(key),
            Modal::GlobalSearch { .. } => {
                let action = match key.code {
                    KeyCode::Esc => Some(Action::CloseModal),
                    KeyCode::Enter => Some(Action::ConfirmModal),
                    KeyCode::Up => Some(Action::ModalUp),
                    KeyCode::Down => Some(Action::ModalDown),
                    KeyCode::Backspace => {
                        if let Some(Modal::GlobalSearch {
                            query,
                            selected_index,
                        }) = self.modals.top_mut()
                        {
                            query.pop();
                            *selected_index = 0;
                        }
                        None
                    }
                    KeyCode::Char(c) => {
                        if let Some(Modal::GlobalSearch {
                            query,
                            selected_index,
                        }) = self.modals.top_mut()
                        {
                            query.push(c);
                            *selected_index = 0;
                        }
                        None
                    }
                    _ => None,
                };
                Ok(action)
            }
            Modal::Notifications { .. } => {
                let action = match key.code {
                    KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('q') => {
                        Some(Action::CloseModal)
                    }
                    KeyCode::Up | KeyCode::Char('k') => Some(Action::ModalUp),
                    KeyCode::Down | KeyCode::Char('j') => Some(Action::ModalDown),
                    KeyCode::Enter => Some(Action::MarkNotificationRead),
                    KeyCode::Char('a') => Some(Action::MarkAllNotificationsRead),
                    KeyCode::Char('d') => Some(Action::DismissNotification),
                    _ => None,
                };
                Ok(action)
            }
        }
    }

    /// Key handling while the table search input is focused
    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }

    /// Keys that work on every page when no modal is open
    fn handle_global_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::ForceQuit);
        }

        match key.code {
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('s') => Some(Action::OpenGlobalSearch),
            KeyCode::Char('b') => Some(Action::OpenNotifications),
            KeyCode::Tab => Some(Action::NextPage),
            KeyCode::BackTab => Some(Action::PrevPage),
            KeyCode::Char(c @ '1'..='8') => {
                let index = (c as usize) - ('1' as usize);
                Some(Action::GoToPage(Page::all()[index]))
            }
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────────────────────

    fn notification_cursor(&self) -> Option<usize> {
        if let Some(Modal::Notifications { selected_index }) = self.modals.top() {
            Some((*selected_index).min(self.domain.notifications.len().saturating_sub(1)))
        } else {
            None
        }
    }

    fn mark_selected_notification_read(&mut self) {
        if let Some(index) = self.notification_cursor() {
            if let Some(notification) = self.domain.notifications.get_mut(index) {
                notification.read = true;
            }
        }
    }

    fn dismiss_selected_notification(&mut self) {
        if let Some(index) = self.notification_cursor() {
            if index < self.domain.notifications.len() {
                self.domain.notifications.remove(index);
            }
            let max = self.domain.notifications.len().saturating_sub(1);
            if let Some(Modal::Notifications { selected_index }) = self.modals.top_mut() {
                *selected_index = (*selected_index).min(max);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Modal navigation
    // ─────────────────────────────────────────────────────────────────────────

    fn modal_move(&mut self, down: bool) {
        let search_result_count = match self.modals.top() {
            Some(Modal::GlobalSearch { query, .. }) => {
                Some(self.domain.search_index.search(query).len())
            }
            _ => None,
        };

        match self.modals.top_mut() {
            Some(Modal::GlobalSearch { selected_index, .. }) => {
                let max = search_result_count.unwrap_or(0).saturating_sub(1);
                *selected_index = if down {
                    (*selected_index + 1).min(max)
                } else {
                    selected_index.saturating_sub(1)
                };
            }
            Some(Modal::Notifications { selected_index }) => {
                let max = self.domain.notifications.len().saturating_sub(1);
                *selected_index = if down {
                    (*selected_index + 1).min(max)
                } else {
                    selected_index.saturating_sub(1)
                };
            }
            _ => {}
        }
    }

    fn confirm_modal(&mut self) {
        if let Some(modal) = self.modals.top().cloned() {
            match modal {
                Modal::QuitConfirm => {
                    self.should_quit = true;
                }
                Modal::GlobalSearch {
                    query,
                    selected_index,
                } => {
                    let target = self
                        .domain
                        .search_index
                        .search(&query)
                        .get(selected_index)
                        .map(|entry| entry.page);
                    self.modals.pop();
                    if let Some(page) = target {
                        self.go_to_page(page);
                    }
                }
                _ => {}
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        if self.active_page == Page::Dashboard && self.dashboard.search_mode {
            return self.handle_search_key_event(key);
        }

        if let Some(action) = self.handle_global_key_event(key) {
            return Ok(Some(action));
        }

        match self.active_page {
            Page::Dashboard => self.dashboard.handle_key_event(key),
            Page::Settings => self.settings.handle_key_event(key),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                self.ticks_since_refresh += 1;
                if self.ticks_since_refresh >= METRIC_REFRESH_TICKS {
                    self.ticks_since_refresh = 0;
                    self.domain.refresh_metrics();
                }
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Page Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::NextPage => self.cycle_page(true),
            Action::PrevPage => self.cycle_page(false),
            Action::GoToPage(page) => self.go_to_page(page),

            // ─────────────────────────────────────────────────────────────────
            // Table (delegate to DashboardComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextColumn => self.dashboard.next_column(),
            Action::PrevColumn => self.dashboard.prev_column(),
            Action::SortByCursor => self.dashboard.sort_by_cursor(),
            Action::NextResultPage => self.dashboard.next_result_page(&self.domain.campaigns),
            Action::PrevResultPage => self.dashboard.prev_result_page(),
            Action::FirstResultPage => self.dashboard.first_result_page(),
            Action::LastResultPage => self.dashboard.last_result_page(&self.domain.campaigns),
            Action::EnterSearchMode => self.dashboard.enter_search_mode(),
            Action::ExitSearchMode => self.dashboard.exit_search_mode(),
            Action::SearchInput(c) => self.dashboard.search_input(c),
            Action::SearchBackspace => self.dashboard.search_backspace(),
            Action::ClearSearch => self.dashboard.clear_search(),

            // ─────────────────────────────────────────────────────────────────
            // Status Filter
            // ─────────────────────────────────────────────────────────────────
            Action::OpenStatusFilter => {
                self.status_filter_dialog
                    .set_current(self.dashboard.query.status_filter());
                self.modals.push(Modal::StatusFilter);
            }
            Action::SetStatusFilter(filter) => {
                self.dashboard.query.set_status_filter(filter);
                self.modals.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenGlobalSearch => {
                self.modals.push(Modal::GlobalSearch {
                    query: String::new(),
                    selected_index: 0,
                });
            }
            Action::OpenNotifications => {
                self.modals.push(Modal::Notifications { selected_index: 0 });
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => self.confirm_modal(),
            Action::ModalUp => self.modal_move(false),
            Action::ModalDown => self.modal_move(true),

            // ─────────────────────────────────────────────────────────────────
            // Notifications
            // ─────────────────────────────────────────────────────────────────
            Action::MarkNotificationRead => self.mark_selected_notification_read(),
            Action::MarkAllNotificationsRead => {
                for notification in &mut self.domain.notifications {
                    notification.read = true;
                }
            }
            Action::DismissNotification => self.dismiss_selected_notification(),

            // ─────────────────────────────────────────────────────────────────
            // Data
            // ─────────────────────────────────────────────────────────────────
            Action::ExportCsv => self.export_campaigns(),
            Action::RegenerateData => self.regenerate_data(),

            // ─────────────────────────────────────────────────────────────────
            // Settings
            // ─────────────────────────────────────────────────────────────────
            Action::SettingsNextField
            | Action::SettingsPrevField
            | Action::SettingsIncrease
            | Action::SettingsDecrease => {
                self.settings.update(action)?;
            }
            Action::SaveConfig => self.save_config(),
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let unread = unread_count(&self.domain.notifications);

        match self.active_page {
            Page::Dashboard => {
                let ctx = DashboardRenderContext {
                    campaigns: &self.domain.campaigns,
                    metrics: &self.domain.metrics,
                    revenue: &self.domain.revenue,
                    traffic: &self.domain.traffic,
                    channels: &self.domain.channels,
                    unread_notifications: unread,
                    currency: &self.config.currency,
                    error: self.error.as_deref(),
                    status_message: self.status_message.as_deref(),
                };
                draw_dashboard(frame, area, &mut self.dashboard, &ctx)?;
            }
            page => {
                let layout = calculate_page_layout(area);
                render_nav(frame, layout.nav, page, unread);
                draw_page_header(frame, layout.header, page);
                match page {
                    Page::Analytics => render_analytics_page(frame, layout.body),
                    Page::Audience => render_audience_page(frame, layout.body),
                    Page::Reports => render_reports_page(frame, layout.body),
                    Page::Realtime => render_realtime_page(frame, layout.body),
                    Page::AiInsights => render_ai_insights_page(frame, layout.body),
                    Page::Automation => render_automation_page(frame, layout.body),
                    _ => self.settings.draw(frame, layout.body)?,
                }
                draw_page_help(frame, layout.help, &self.status_message);
            }
        }

        // Draw modal overlay if active
        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }

        Ok(())
    }
}

impl App {
    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Help => self.help_dialog.draw(frame, area)?,
            Modal::StatusFilter => self.status_filter_dialog.draw(frame, area)?,
            Modal::GlobalSearch {
                query,
                selected_index,
            } => {
                render_global_search(frame, area, &self.domain.search_index, query, *selected_index);
            }
            Modal::Notifications { selected_index } => {
                render_notifications(frame, area, &self.domain.notifications, *selected_index);
            }
        }
        Ok(())
    }
}

/// Page title and description line under the navigation tabs
fn draw_page_header(frame: &mut Frame, area: Rect, page: Page) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", page.label()),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(page.description(), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// One-line help footer for the non-dashboard pages
fn draw_page_help(frame: &mut Frame, area: Rect, status_message: &Option<String>) {
    let mut spans = vec![
        Span::styled(
            " Tab ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Pages  "),
        Span::styled(
            " s ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Search  "),
        Span::styled(
            " ? ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Help  "),
        Span::styled(
            " q ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Quit"),
    ];

    if let Some(status) = status_message {
        spans.push(Span::styled(
            format!("  {}", status),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatusFilter;

    fn test_app() -> App {
        App::new(Config::default(), 42)
    }

    #[test]
    fn test_every_page_renders_its_content() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut app = test_app();
        let backend = TestBackend::new(140, 40);
        let mut terminal = Terminal::new(backend).unwrap();

        let expectations = [
            (Page::Analytics, "Conversion Funnel"),
            (Page::Audience, "Top Locations"),
            (Page::Reports, "Report Templates"),
            (Page::Realtime, "Live Activity"),
            (Page::AiInsights, "Predictive Models"),
            (Page::Automation, "Automation Rules"),
        ];
        for (page, marker) in expectations {
            app.update(Action::GoToPage(page)).unwrap();
            terminal
                .draw(|frame| app.draw(frame, frame.area()).unwrap())
                .unwrap();
            let text: String = terminal
                .backend()
                .buffer()
                .content()
                .iter()
                .map(|cell| cell.symbol())
                .collect();
            assert!(text.contains(page.label()), "{} tab missing", page.label());
            assert!(text.contains(marker), "{} content missing", page.label());
        }
    }

    #[test]
    fn test_quit_flow_requires_confirmation() {
        let mut app = test_app();
        app.update(Action::OpenQuitDialog).unwrap();
        assert!(matches!(app.modals.top(), Some(Modal::QuitConfirm)));
        assert!(!app.should_quit);

        app.update(Action::ConfirmModal).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_page_cycling_wraps() {
        let mut app = test_app();
        app.update(Action::PrevPage).unwrap();
        assert_eq!(app.active_page, Page::Settings);
        app.update(Action::NextPage).unwrap();
        assert_eq!(app.active_page, Page::Dashboard);
    }

    #[test]
    fn test_status_filter_round_trip() {
        let mut app = test_app();
        app.update(Action::OpenStatusFilter).unwrap();
        assert!(matches!(app.modals.top(), Some(Modal::StatusFilter)));

        app.update(Action::SetStatusFilter(StatusFilter::Only(
            crate::model::Status::Active,
        )))
        .unwrap();
        assert!(app.modals.is_empty());
        assert_eq!(
            app.dashboard.query.status_filter(),
            StatusFilter::Only(crate::model::Status::Active)
        );
    }

    #[test]
    fn test_global_search_navigates_to_result_page() {
        let mut app = test_app();
        app.update(Action::OpenGlobalSearch).unwrap();

        if let Some(Modal::GlobalSearch { query, .. }) = app.modals.top_mut() {
            query.push_str("revenue");
        }
        app.update(Action::ConfirmModal).unwrap();

        assert!(app.modals.is_empty());
        assert_ne!(app.active_page, Page::Settings);
    }

    #[test]
    fn test_dismiss_notification_clamps_cursor() {
        let mut app = test_app();
        let initial = app.domain.notifications.len();
        app.update(Action::OpenNotifications).unwrap();

        for _ in 0..initial {
            app.update(Action::ModalDown).unwrap();
        }
        app.update(Action::DismissNotification).unwrap();
        assert_eq!(app.domain.notifications.len(), initial - 1);

        if let Some(Modal::Notifications { selected_index }) = app.modals.top() {
            assert!(*selected_index < app.domain.notifications.len());
        } else {
            panic!("notifications modal should still be open");
        }
    }

    #[test]
    fn test_mark_all_notifications_read() {
        let mut app = test_app();
        assert!(unread_count(&app.domain.notifications) > 0);
        app.update(Action::MarkAllNotificationsRead).unwrap();
        assert_eq!(unread_count(&app.domain.notifications), 0);
    }

    #[test]
    fn test_regenerate_bumps_seed() {
        let mut app = test_app();
        let before = app.domain.seed;
        app.update(Action::RegenerateData).unwrap();
        assert_eq!(app.domain.seed, before.wrapping_add(1));
    }

    #[test]
    fn test_metrics_refresh_on_tick_cadence() {
        let mut app = test_app();
        let before: Vec<f64> = app.domain.metrics.iter().map(|m| m.change).collect();
        for _ in 0..METRIC_REFRESH_TICKS {
            app.update(Action::Tick).unwrap();
        }
        let after: Vec<f64> = app.domain.metrics.iter().map(|m| m.change).collect();
        assert_ne!(before, after);
    }
}
