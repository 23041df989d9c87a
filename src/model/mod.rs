//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `DomainState` - generated dashboard data (campaigns, metrics, charts)
//! - `QueryState` and the query engine - the campaign table pipeline
//! - `ModalStack` - modal overlay management

pub mod campaign;
pub mod domain;
pub mod metrics;
pub mod mock;
pub mod modal;
pub mod notification;
pub mod query;
pub mod search;
pub mod ui;

// Re-export commonly used types
pub use campaign::{Campaign, SortField, Status};
pub use domain::DomainState;
pub use notification::{unread_count, Notification, Severity};
pub use query::{QueryResult, QueryState, SortDirection, StatusFilter};
pub use search::{SearchEntry, SearchIndex};
pub use ui::Page;
