//! Domain Layer
//!
//! Record entity, form validation and the view state driving list queries.
//! This layer does no I/O.

mod entity;
mod record;
mod form;
mod view_state;

pub use entity::{Entity, SyncError, SyncResult};
pub use record::{Record, RecordDraft, RecordId};
pub use form::{normalize_start_date, RecordForm};
pub use view_state::{SearchColumn, Sort, SortField, SortOrder, ViewState, DEFAULT_PAGE_SIZE};
