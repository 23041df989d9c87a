//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod ai_insights_page;
pub mod analytics_page;
pub mod audience_page;
pub mod automation_page;
pub mod charts;
pub mod dashboard;
pub mod help_dialog;
pub mod layout;
pub mod metric_cards;
pub mod nav;
pub mod notifications_dialog;
pub mod quit_dialog;
pub mod realtime_page;
pub mod reports_page;
pub mod search_dialog;
pub mod settings;
pub mod status_filter_dialog;
pub mod table;

pub use ai_insights_page::render_ai_insights_page;
pub use analytics_page::render_analytics_page;
pub use audience_page::render_audience_page;
pub use automation_page::render_automation_page;
pub use charts::render_charts_row;
pub use dashboard::{draw_dashboard, DashboardComponent, DashboardRenderContext};
pub use help_dialog::HelpDialog;
pub use layout::{calculate_dashboard_layout, calculate_page_layout, centered_popup};
pub use metric_cards::render_metric_cards;
pub use nav::render_nav;
pub use notifications_dialog::render_notifications;
pub use quit_dialog::QuitDialog;
pub use realtime_page::render_realtime_page;
pub use reports_page::render_reports_page;
pub use search_dialog::render_global_search;
pub use settings::SettingsComponent;
pub use status_filter_dialog::StatusFilterDialog;
pub use table::{render_campaign_table, TableRenderContext};
