//! Record Sync
//!
//! Layered architecture:
//! - domain: Record entity, form validation, view state
//! - endpoint: Remote record collection (REST and in-memory)
//! - controller: Keeps a page of records in sync with an endpoint
//!
//! Runtime-agnostic; futures are not `Send` and expect a single-threaded
//! executor such as the browser event loop.

pub mod config;
pub mod controller;
pub mod domain;
pub mod endpoint;

pub use config::SyncConfig;
pub use controller::{
    BulkDeleteReport, DataController, FetchOutcome, Notice, NoticeKind, ResponseOrdering,
    SyncListener, TableSnapshot,
};
pub use domain::{
    Entity, Record, RecordDraft, RecordForm, RecordId, SearchColumn, Sort, SortField, SortOrder,
    SyncError, SyncResult, ViewState,
};
pub use endpoint::{InMemoryEndpoint, ListPage, RecordEndpoint, RestEndpoint, UnavailableEndpoint};
