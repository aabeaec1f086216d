//! Data Controller
//!
//! Owns the view state and the last fetched page. Every operation goes
//! through the endpoint and then resynchronizes with a fresh list call;
//! nothing is removed or inserted locally ahead of the endpoint.
//!
//! List requests are numbered. Whether a response that arrives after a newer
//! request was issued may still replace the rows is decided by
//! `ResponseOrdering`.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::join_all;
use serde::{Deserialize, Serialize};

use crate::config::SyncConfig;
use crate::domain::{
    Record, RecordForm, RecordId, SearchColumn, Sort, SyncError, SyncResult, ViewState,
};
use crate::endpoint::RecordEndpoint;
use super::listener::{Notice, SyncListener, TableSnapshot};

/// Policy for list responses that arrive out of order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOrdering {
    /// Only the response to the latest issued request is applied
    #[default]
    LatestOnly,
    /// Every response is applied in arrival order; a stale one can win
    AcceptAll,
}

impl ResponseOrdering {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseOrdering::LatestOnly => "latest_only",
            ResponseOrdering::AcceptAll => "accept_all",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "latest" | "latest_only" => Some(ResponseOrdering::LatestOnly),
            "all" | "accept_all" => Some(ResponseOrdering::AcceptAll),
            _ => None,
        }
    }
}

/// Result of a list call that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Rows and total replaced with the response to request `seq`
    Applied { seq: u64 },
    /// Response to request `seq` dropped; `latest` was issued after it
    Discarded { seq: u64, latest: u64 },
    /// View state did not change, no request issued
    Unchanged,
}

/// Per-id results of a bulk delete
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkDeleteReport {
    pub deleted: Vec<RecordId>,
    pub failed: Vec<(RecordId, SyncError)>,
}

impl BulkDeleteReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Default)]
struct ControllerState {
    view: ViewState,
    rows: Vec<Record>,
    total: u64,
    in_flight: usize,
    /// Sequence number of the latest issued list request
    issued: u64,
}

/// Keeps a filtered, sorted page of records in sync with the endpoint
pub struct DataController<E: RecordEndpoint> {
    endpoint: E,
    listener: Rc<dyn SyncListener>,
    ordering: ResponseOrdering,
    state: RefCell<ControllerState>,
}

impl<E: RecordEndpoint> DataController<E> {
    pub fn new(endpoint: E, listener: Rc<dyn SyncListener>) -> Self {
        Self {
            endpoint,
            listener,
            ordering: ResponseOrdering::default(),
            state: RefCell::new(ControllerState::default()),
        }
    }

    /// Page size and ordering policy from configuration
    pub fn from_config(endpoint: E, listener: Rc<dyn SyncListener>, config: &SyncConfig) -> Self {
        Self::new(endpoint, listener)
            .with_view(ViewState::with_page_size(config.page_size))
            .with_ordering(config.ordering)
    }

    pub fn with_view(self, view: ViewState) -> Self {
        self.state.borrow_mut().view = view;
        self
    }

    pub fn with_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    pub fn ordering(&self) -> ResponseOrdering {
        self.ordering
    }

    pub fn view(&self) -> ViewState {
        self.state.borrow().view.clone()
    }

    pub fn snapshot(&self) -> TableSnapshot {
        let state = self.state.borrow();
        TableSnapshot {
            view: state.view.clone(),
            rows: state.rows.clone(),
            total: state.total,
            loading: state.in_flight > 0,
        }
    }

    fn publish(&self) {
        let snapshot = self.snapshot();
        self.listener.snapshot_changed(&snapshot);
    }

    fn notify(&self, notice: Notice) {
        self.listener.notify(notice);
    }

    // ========================
    // List
    // ========================

    /// Issue a list query for the current view state.
    ///
    /// On success rows and total are replaced; on failure they are kept and
    /// an error notice is raised.
    pub async fn fetch(&self) -> SyncResult<FetchOutcome> {
        let (seq, view) = {
            let mut state = self.state.borrow_mut();
            state.issued += 1;
            state.in_flight += 1;
            (state.issued, state.view.clone())
        };
        self.publish();
        log::debug!("[SYNC] list #{} page={} size={} search={:?}", seq, view.page, view.page_size, view.search);

        let result = self.endpoint.list(&view).await;

        let outcome = {
            let mut state = self.state.borrow_mut();
            state.in_flight -= 1;
            let latest = state.issued;
            if seq != latest && self.ordering == ResponseOrdering::LatestOnly {
                Ok(FetchOutcome::Discarded { seq, latest })
            } else {
                match result {
                    Ok(page) => {
                        state.rows = page.data;
                        state.total = page.total;
                        Ok(FetchOutcome::Applied { seq })
                    }
                    Err(e) => Err(e),
                }
            }
        };
        self.publish();

        match &outcome {
            Ok(FetchOutcome::Discarded { seq, latest }) => {
                log::debug!("[SYNC] list #{} discarded, #{} is newer", seq, latest);
            }
            Ok(_) => {}
            Err(e) => {
                log::error!("[SYNC] list #{} failed: {}", seq, e);
                self.notify(Notice::error("Failed to fetch data"));
            }
        }
        outcome
    }

    /// Refetch after a successful mutation; failures are already reported
    async fn refresh(&self) {
        if let Err(e) = self.fetch().await {
            log::debug!("[SYNC] refresh failed: {}", e);
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Delete one record, then refetch
    pub async fn delete(&self, id: RecordId) -> SyncResult<()> {
        if let Err(e) = self.endpoint.delete(id).await {
            log::error!("[SYNC] delete {} failed: {}", id, e);
            self.notify(Notice::error("Failed to delete"));
            return Err(e);
        }
        log::info!("[SYNC] deleted {}", id);
        self.notify(Notice::success("Deleted successfully"));
        self.refresh().await;
        Ok(())
    }

    /// Delete all `ids` concurrently, then refetch once if any succeeded
    pub async fn delete_many(&self, ids: &[RecordId]) -> BulkDeleteReport {
        let mut report = BulkDeleteReport::default();
        if ids.is_empty() {
            return report;
        }

        let results = join_all(ids.iter().map(|&id| async move {
            (id, self.endpoint.delete(id).await)
        }))
        .await;

        for (id, result) in results {
            match result {
                Ok(()) => report.deleted.push(id),
                Err(e) => {
                    log::error!("[SYNC] bulk delete {} failed: {}", id, e);
                    report.failed.push((id, e));
                }
            }
        }

        if report.is_complete() {
            self.notify(Notice::success("Selected items deleted successfully"));
        } else {
            self.notify(Notice::error(format!(
                "Failed to delete {} of {} selected items",
                report.failed.len(),
                ids.len()
            )));
        }
        if !report.deleted.is_empty() {
            self.refresh().await;
        }
        report
    }

    /// Create (`editing = None`) or update the record being edited.
    ///
    /// The form is validated first; invalid input never reaches the endpoint.
    pub async fn save(&self, form: &RecordForm, editing: Option<&Record>) -> SyncResult<()> {
        let draft = match form.validate() {
            Ok(draft) => draft,
            Err(e) => {
                log::warn!("[SYNC] rejected form: {}", e);
                self.notify(Notice::error(e.to_string()));
                return Err(e);
            }
        };

        let result = match editing {
            Some(record) => self.endpoint.update(record.id, &draft).await,
            None => self.endpoint.create(&draft).await,
        };
        if let Err(e) = result {
            log::error!("[SYNC] save failed: {}", e);
            self.notify(Notice::error("Failed to save"));
            return Err(e);
        }

        log::info!("[SYNC] saved {}", editing.map(|r| r.id.to_string()).unwrap_or_else(|| "new record".into()));
        self.notify(Notice::success("Saved successfully"));
        self.refresh().await;
        Ok(())
    }

    // ========================
    // View State
    // ========================

    /// Search for `text`; back to page 1
    pub async fn set_search(&self, text: impl Into<String>) -> SyncResult<FetchOutcome> {
        let next = self.view().with_search(text);
        self.apply_view(next).await
    }

    /// Scope the search to `column`; back to page 1
    pub async fn set_search_column(&self, column: Option<SearchColumn>) -> SyncResult<FetchOutcome> {
        let next = self.view().with_search_column(column);
        self.apply_view(next).await
    }

    /// Drop search text and column; back to page 1
    pub async fn clear_search(&self) -> SyncResult<FetchOutcome> {
        let next = self.view().cleared_search();
        self.apply_view(next).await
    }

    /// Pagination or sort changed in the table
    pub async fn on_view_change(&self, page: u32, page_size: u32, sort: Option<Sort>) -> SyncResult<FetchOutcome> {
        let next = self.view().with_view(page, page_size, sort);
        self.apply_view(next).await
    }

    /// Replace the view state and refetch if it changed
    async fn apply_view(&self, next: ViewState) -> SyncResult<FetchOutcome> {
        let changed = {
            let mut state = self.state.borrow_mut();
            if state.view == next {
                false
            } else {
                state.view = next;
                true
            }
        };
        if !changed {
            return Ok(FetchOutcome::Unchanged);
        }
        self.publish();
        self.fetch().await
    }
}
