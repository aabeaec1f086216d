//! Controller Layer
//!
//! `DataController` keeps a page of records in sync with a `RecordEndpoint`
//! and reports every change to a `SyncListener`.

mod listener;
mod data_controller;


pub use listener::{Notice, NoticeKind, SyncListener, TableSnapshot};
pub use data_controller::{BulkDeleteReport, DataController, FetchOutcome, ResponseOrdering};
