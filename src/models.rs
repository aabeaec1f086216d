//! Frontend Models
//!
//! Record types come from `record-sync`; toasts are UI-only.

pub use record_sync::{Notice, Record, RecordForm, RecordId, SearchColumn, Sort, SortField, SortOrder};

/// A notice currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}
