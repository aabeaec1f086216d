//! Listener Interface
//!
//! What the controller tells its view: state snapshots and transient notices.

use crate::domain::{Entity, Record, RecordId, ViewState};

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient user-visible message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Everything the table renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSnapshot {
    pub view: ViewState,
    /// Current page of records, as last applied
    pub rows: Vec<Record>,
    /// Matching records across all pages
    pub total: u64,
    /// True while at least one list request is in flight
    pub loading: bool,
}

impl TableSnapshot {
    pub fn row_ids(&self) -> Vec<RecordId> {
        self.rows.iter().map(Entity::id).collect()
    }
}

/// Receives controller output. Called with no controller state borrowed.
pub trait SyncListener {
    /// View state, rows, total or loading changed
    fn snapshot_changed(&self, snapshot: &TableSnapshot);

    /// A notice should be shown to the user
    fn notify(&self, notice: Notice);
}
