//! Endpoint Layer - Core Trait
//!
//! Futures are not `Send`: in the browser every call runs on the single
//! event loop thread.

use std::rc::Rc;

use async_trait::async_trait;

use crate::domain::{RecordDraft, RecordId, SyncResult, ViewState};
use super::query::ListPage;

/// Remote record collection: list, create, update, delete
#[async_trait(?Send)]
pub trait RecordEndpoint {
    /// Fetch one page of records matching the view's search and sort
    async fn list(&self, view: &ViewState) -> SyncResult<ListPage>;

    /// Create a record; the endpoint assigns its id
    async fn create(&self, draft: &RecordDraft) -> SyncResult<()>;

    /// Replace the fields of the record addressed by `id`
    async fn update(&self, id: RecordId, draft: &RecordDraft) -> SyncResult<()>;

    /// Delete the record addressed by `id`
    async fn delete(&self, id: RecordId) -> SyncResult<()>;
}

#[async_trait(?Send)]
impl<T: RecordEndpoint + ?Sized> RecordEndpoint for Rc<T> {
    async fn list(&self, view: &ViewState) -> SyncResult<ListPage> {
        (**self).list(view).await
    }

    async fn create(&self, draft: &RecordDraft) -> SyncResult<()> {
        (**self).create(draft).await
    }

    async fn update(&self, id: RecordId, draft: &RecordDraft) -> SyncResult<()> {
        (**self).update(id, draft).await
    }

    async fn delete(&self, id: RecordId) -> SyncResult<()> {
        (**self).delete(id).await
    }
}
