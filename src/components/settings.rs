//! Settings page component
//!
//! Lets the user adjust table page size, currency symbol, and the data seed,
//! then persist them to the config file.

use crate::action::Action;
use crate::component::Component;
use crate::config::Config;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CURRENCIES: [&str; 4] = ["$", "€", "£", "¥"];

const PAGE_SIZE_MIN: usize = 5;
const PAGE_SIZE_MAX: usize = 50;

/// Editable fields on the settings page, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    PageSize,
    Currency,
    Seed,
}

impl SettingsField {
    pub fn all() -> [SettingsField; 3] {
        [
            SettingsField::PageSize,
            SettingsField::Currency,
            SettingsField::Seed,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingsField::PageSize => "Rows per page",
            SettingsField::Currency => "Currency symbol",
            SettingsField::Seed => "Data seed",
        }
    }
}

/// Settings page
pub struct SettingsComponent {
    /// Highlighted field
    pub selected: usize,
    /// Pending (unsaved) edits
    pub draft: Config,
    /// True once the draft differs from the saved config
    pub dirty: bool,
}

impl SettingsComponent {
    pub fn new(config: &Config) -> Self {
        Self {
            selected: 0,
            draft: config.clone(),
            dirty: false,
        }
    }

    /// Reset the draft to the saved config (after a save or external change)
    pub fn sync(&mut self, config: &Config) {
        self.draft = config.clone();
        self.dirty = false;
    }

    fn selected_field(&self) -> SettingsField {
        SettingsField::all()[self.selected.min(2)]
    }

    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % SettingsField::all().len();
    }

    pub fn prev_field(&mut self) {
        let len = SettingsField::all().len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn increase(&mut self) {
        match self.selected_field() {
            SettingsField::PageSize => {
                self.draft.page_size = (self.draft.page_size + 5).min(PAGE_SIZE_MAX);
            }
            SettingsField::Currency => {
                let idx = CURRENCIES
                    .iter()
                    .position(|c| *c == self.draft.currency)
                    .unwrap_or(0);
                self.draft.currency = CURRENCIES[(idx + 1) % CURRENCIES.len()].to_string();
            }
            SettingsField::Seed => {
                self.draft.seed = self.draft.seed.wrapping_add(1);
            }
        }
        self.dirty = true;
    }

    pub fn decrease(&mut self) {
        match self.selected_field() {
            SettingsField::PageSize => {
                self.draft.page_size = self.draft.page_size.saturating_sub(5).max(PAGE_SIZE_MIN);
            }
            SettingsField::Currency => {
                let idx = CURRENCIES
                    .iter()
                    .position(|c| *c == self.draft.currency)
                    .unwrap_or(0);
                self.draft.currency =
                    CURRENCIES[(idx + CURRENCIES.len() - 1) % CURRENCIES.len()].to_string();
            }
            SettingsField::Seed => {
                self.draft.seed = self.draft.seed.wrapping_sub(1);
            }
        }
        self.dirty = true;
    }

    fn field_value(&self, field: SettingsField) -> String {
        match field {
            SettingsField::PageSize => self.draft.page_size.to_string(),
            SettingsField::Currency => self.draft.currency.clone(),
            SettingsField::Seed => self.draft.seed.to_string(),
        }
    }
}

impl Component for SettingsComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::SettingsNextField),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::SettingsPrevField),
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('+') => {
                Some(Action::SettingsIncrease)
            }
            KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('-') => {
                Some(Action::SettingsDecrease)
            }
            KeyCode::Enter | KeyCode::Char('w') => Some(Action::SaveConfig),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::SettingsNextField => self.next_field(),
            Action::SettingsPrevField => self.prev_field(),
            Action::SettingsIncrease => self.increase(),
            Action::SettingsDecrease => self.decrease(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(area);

        let mut lines = vec![Line::from("")];
        for (i, field) in SettingsField::all().iter().enumerate() {
            let is_selected = i == self.selected;
            let marker = if is_selected { "▶ " } else { "  " };
            let label_style = if is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(vec![
                Span::styled(marker.to_string(), Style::default().fg(Color::Cyan)),
                Span::styled(format!("{:18}", field.label()), label_style),
                Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("{:^10}", self.field_value(*field)),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
            ]));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("Export directory: {}", self.draft.export_dir),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(""));

        if self.dirty {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    "Unsaved changes",
                    Style::default().fg(Color::Yellow),
                ),
            ]));
        }

        let title = " Settings ";
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(paragraph, chunks[0]);

        // Help bar
        let help = Paragraph::new(Line::from(vec![
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Field  "),
            Span::styled(" h/l ", Style::default().fg(Color::Cyan)),
            Span::raw("Adjust  "),
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Save  "),
            Span::styled(" q ", Style::default().fg(Color::Yellow)),
            Span::raw("Quit"),
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[1]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_stays_within_bounds() {
        let mut settings = SettingsComponent::new(&Config::default());
        for _ in 0..30 {
            settings.increase();
        }
        assert_eq!(settings.draft.page_size, PAGE_SIZE_MAX);
        for _ in 0..30 {
            settings.decrease();
        }
        assert_eq!(settings.draft.page_size, PAGE_SIZE_MIN);
    }

    #[test]
    fn currency_cycles_through_options() {
        let mut settings = SettingsComponent::new(&Config::default());
        settings.next_field();
        settings.increase();
        assert_eq!(settings.draft.currency, "€");
        settings.decrease();
        assert_eq!(settings.draft.currency, "$");
    }

    #[test]
    fn field_navigation_wraps() {
        let mut settings = SettingsComponent::new(&Config::default());
        settings.prev_field();
        assert_eq!(settings.selected_field(), SettingsField::Seed);
        settings.next_field();
        assert_eq!(settings.selected_field(), SettingsField::PageSize);
    }
}
