//! Status filter dialog component
//!
//! Allows selecting a campaign status to filter the table by.

use crate::action::Action;
use crate::component::Component;
use crate::model::{Status, StatusFilter};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Status filter dialog
pub struct StatusFilterDialog {
    /// Selected option index
    pub selected_index: usize,
    /// List state for rendering
    pub list_state: ListState,
    /// Current filter (to show which is active)
    pub current_filter: StatusFilter,
}

impl Default for StatusFilterDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusFilterDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            list_state,
            current_filter: StatusFilter::All,
        }
    }

    /// All filter options in display order
    pub fn options() -> [StatusFilter; 4] {
        [
            StatusFilter::All,
            StatusFilter::Only(Status::Active),
            StatusFilter::Only(Status::Paused),
            StatusFilter::Only(Status::Completed),
        ]
    }

    /// Prime the dialog with the currently active filter
    pub fn set_current(&mut self, current: StatusFilter) {
        self.current_filter = current;
        self.selected_index = Self::options()
            .iter()
            .position(|f| *f == current)
            .unwrap_or(0);
        self.list_state.select(Some(self.selected_index));
    }

    /// The filter the cursor currently points at
    pub fn selected_filter(&self) -> StatusFilter {
        Self::options()[self.selected_index.min(3)]
    }

    fn select_next(&mut self) {
        if self.selected_index + 1 < Self::options().len() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Component for StatusFilterDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('f') => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::SetStatusFilter(self.selected_filter())),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Some(Action::ModalUp)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Some(Action::ModalDown)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        // Clear entire background
        frame.render_widget(Clear, area);

        let popup_width = 44u16.min(area.width.saturating_sub(4));
        let popup_height = 12u16.min(area.height.saturating_sub(4));

        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Option list
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        // Header
        let header = Paragraph::new(Line::from(vec![Span::styled(
            format!("Current: {}", self.current_filter.label()),
            Style::default().fg(Color::Cyan),
        )]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Filter by Status ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, main_chunks[0]);

        // Option list
        let items: Vec<ListItem> = Self::options()
            .iter()
            .map(|option| {
                let is_current = *option == self.current_filter;
                ListItem::new(Line::from(vec![
                    Span::styled(
                        if is_current { "● " } else { "  " },
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        option.label().to_string(),
                        if is_current {
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::White)
                        },
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, main_chunks[1], &mut self.list_state);

        // Help bar
        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Select  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" Esc/f ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, main_chunks[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_current_positions_cursor_on_active_filter() {
        let mut dialog = StatusFilterDialog::new();
        dialog.set_current(StatusFilter::Only(Status::Paused));
        assert_eq!(dialog.selected_index, 2);
        assert_eq!(dialog.selected_filter(), StatusFilter::Only(Status::Paused));
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut dialog = StatusFilterDialog::new();
        dialog.select_prev();
        assert_eq!(dialog.selected_index, 0);
        for _ in 0..10 {
            dialog.select_next();
        }
        assert_eq!(dialog.selected_index, 3);
    }
}
