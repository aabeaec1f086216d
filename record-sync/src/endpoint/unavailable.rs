//! Unavailable Endpoint
//!
//! Stands in when no real endpoint could be built (e.g. a malformed base
//! URL). Every call fails with the construction error, so each operation
//! surfaces its failure notice instead of pretending to succeed.

use async_trait::async_trait;

use crate::domain::{RecordDraft, RecordId, SyncError, SyncResult, ViewState};
use super::query::ListPage;
use super::traits::RecordEndpoint;

#[derive(Debug, Clone)]
pub struct UnavailableEndpoint {
    error: SyncError,
}

impl UnavailableEndpoint {
    pub fn new(error: SyncError) -> Self {
        Self { error }
    }

    fn fail<T>(&self, operation: &str) -> SyncResult<T> {
        log::warn!("[ENDPOINT] {} refused: {}", operation, self.error);
        Err(self.error.clone())
    }
}

#[async_trait(?Send)]
impl RecordEndpoint for UnavailableEndpoint {
    async fn list(&self, _view: &ViewState) -> SyncResult<ListPage> {
        self.fail("list")
    }

    async fn create(&self, _draft: &RecordDraft) -> SyncResult<()> {
        self.fail("create")
    }

    async fn update(&self, id: RecordId, _draft: &RecordDraft) -> SyncResult<()> {
        self.fail(&format!("update {}", id))
    }

    async fn delete(&self, id: RecordId) -> SyncResult<()> {
        self.fail(&format!("delete {}", id))
    }
}
