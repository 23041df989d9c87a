//! Services with side effects outside the UI
//!
//! Currently just CSV export; everything else in the app is pure and
//! in-memory.

pub mod export;

pub use export::{export_csv, write_csv};
