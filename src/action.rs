//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::query::StatusFilter;
use crate::model::ui::Page;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates (live metric refresh)
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Page Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Cycle to the next page
    NextPage,
    /// Cycle to the previous page
    PrevPage,
    /// Jump directly to a page
    GoToPage(Page),

    // ─────────────────────────────────────────────────────────────────────────
    // Table: Sorting
    // ─────────────────────────────────────────────────────────────────────────
    /// Move the header cursor right
    NextColumn,
    /// Move the header cursor left
    PrevColumn,
    /// Sort by the column under the header cursor (flip if already active)
    SortByCursor,

    // ─────────────────────────────────────────────────────────────────────────
    // Table: Pagination
    // ─────────────────────────────────────────────────────────────────────────
    /// Advance one result page
    NextResultPage,
    /// Go back one result page
    PrevResultPage,
    /// Jump to the first result page
    FirstResultPage,
    /// Jump to the last result page
    LastResultPage,

    // ─────────────────────────────────────────────────────────────────────────
    // Table: Search & Filter
    // ─────────────────────────────────────────────────────────────────────────
    /// Enter campaign search input mode
    EnterSearchMode,
    /// Leave campaign search input mode
    ExitSearchMode,
    /// Append a character to the campaign search term
    SearchInput(char),
    /// Remove the last character of the campaign search term
    SearchBackspace,
    /// Clear the campaign search term
    ClearSearch,
    /// Open the status filter picker
    OpenStatusFilter,
    /// Apply a status filter
    SetStatusFilter(StatusFilter),

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open global search overlay
    OpenGlobalSearch,
    /// Open the notification overlay
    OpenNotifications,
    /// Open the help dialog
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal action
    ConfirmModal,
    /// Navigate up in the current modal
    ModalUp,
    /// Navigate down in the current modal
    ModalDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────────────────────
    /// Mark the selected notification as read
    MarkNotificationRead,
    /// Mark every notification as read
    MarkAllNotificationsRead,
    /// Dismiss the selected notification
    DismissNotification,

    // ─────────────────────────────────────────────────────────────────────────
    // Data
    // ─────────────────────────────────────────────────────────────────────────
    /// Export the filtered and sorted campaign list to CSV
    ExportCsv,
    /// Regenerate the synthetic dataset with a fresh seed
    RegenerateData,

    // ─────────────────────────────────────────────────────────────────────────
    // Settings
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to the next settings field
    SettingsNextField,
    /// Move to the previous settings field
    SettingsPrevField,
    /// Increase the selected settings value
    SettingsIncrease,
    /// Decrease the selected settings value
    SettingsDecrease,
    /// Persist the current settings to disk
    SaveConfig,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextPage => write!(f, "NextPage"),
            Action::PrevPage => write!(f, "PrevPage"),
            Action::GoToPage(page) => write!(f, "GoToPage({})", page.label()),
            Action::NextColumn => write!(f, "NextColumn"),
            Action::PrevColumn => write!(f, "PrevColumn"),
            Action::SortByCursor => write!(f, "SortByCursor"),
            Action::NextResultPage => write!(f, "NextResultPage"),
            Action::PrevResultPage => write!(f, "PrevResultPage"),
            Action::FirstResultPage => write!(f, "FirstResultPage"),
            Action::LastResultPage => write!(f, "LastResultPage"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::ClearSearch => write!(f, "ClearSearch"),
            Action::OpenStatusFilter => write!(f, "OpenStatusFilter"),
            Action::SetStatusFilter(filter) => write!(f, "SetStatusFilter({})", filter.label()),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenGlobalSearch => write!(f, "OpenGlobalSearch"),
            Action::OpenNotifications => write!(f, "OpenNotifications"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
            Action::MarkNotificationRead => write!(f, "MarkNotificationRead"),
            Action::MarkAllNotificationsRead => write!(f, "MarkAllNotificationsRead"),
            Action::DismissNotification => write!(f, "DismissNotification"),
            Action::ExportCsv => write!(f, "ExportCsv"),
            Action::RegenerateData => write!(f, "RegenerateData"),
            Action::SettingsNextField => write!(f, "SettingsNextField"),
            Action::SettingsPrevField => write!(f, "SettingsPrevField"),
            Action::SettingsIncrease => write!(f, "SettingsIncrease"),
            Action::SettingsDecrease => write!(f, "SettingsDecrease"),
            Action::SaveConfig => write!(f, "SaveConfig"),
        }
    }
}
