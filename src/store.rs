//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The controller
//! is the only writer of the table fields; `StoreListener` mirrors its
//! snapshots here.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use record_sync::{SyncListener, TableSnapshot, ViewState};

use crate::config::TOAST_MILLIS;
use crate::models::{Notice, Record, Toast};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// View state behind the current rows
    pub view: ViewState,
    /// Current page of records
    pub rows: Vec<Record>,
    /// Matching records across all pages
    pub total: u64,
    /// A list request is in flight
    pub loading: bool,
    /// Notices on screen, oldest first
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

// ========================
// Store Helper Functions
// ========================

/// Copy a controller snapshot into the store, touching only changed fields
pub fn store_apply_snapshot(store: &UiStore, snapshot: &TableSnapshot) {
    if *store.view().read_untracked() != snapshot.view {
        *store.view().write() = snapshot.view.clone();
    }
    if *store.rows().read_untracked() != snapshot.rows {
        *store.rows().write() = snapshot.rows.clone();
    }
    if *store.total().read_untracked() != snapshot.total {
        *store.total().write() = snapshot.total;
    }
    if *store.loading().read_untracked() != snapshot.loading {
        *store.loading().write() = snapshot.loading;
    }
}

/// Add a toast and return its id
pub fn store_push_toast(store: &UiStore, notice: Notice) -> u32 {
    let id = *store.next_toast_id().read_untracked();
    *store.next_toast_id().write() = id.wrapping_add(1);
    store.toasts().write().push(Toast { id, notice });
    id
}

/// Remove a toast by ID
pub fn store_remove_toast(store: &UiStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

/// Controller listener writing into the store
pub struct StoreListener {
    store: UiStore,
}

impl StoreListener {
    pub fn new(store: UiStore) -> Self {
        Self { store }
    }
}

impl SyncListener for StoreListener {
    fn snapshot_changed(&self, snapshot: &TableSnapshot) {
        store_apply_snapshot(&self.store, snapshot);
    }

    fn notify(&self, notice: Notice) {
        let store = self.store;
        let id = store_push_toast(&store, notice);
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MILLIS).await;
            store_remove_toast(&store, id);
        });
    }
}
