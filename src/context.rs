//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use record_sync::{DataController, Notice, RecordEndpoint, RestEndpoint, SyncListener, UnavailableEndpoint};

use crate::config::load_config;
use crate::store::{StoreListener, UiStore};

/// Controller used by the UI; the endpoint is chosen at startup
pub type AdminController = DataController<Rc<dyn RecordEndpoint>>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Mirror of the controller state
    pub store: UiStore,
    /// The controller itself - only usable on the UI thread
    controller: StoredValue<Rc<AdminController>, LocalStorage>,
}

impl AppContext {
    pub fn new(store: UiStore) -> Self {
        let config = load_config();
        let listener: Rc<dyn SyncListener> = Rc::new(StoreListener::new(store));

        let endpoint: Rc<dyn RecordEndpoint> = match RestEndpoint::from_config(&config) {
            Ok(rest) => {
                log::info!(
                    "[APP] Using endpoint {} ({} responses)",
                    rest.base_url(),
                    config.ordering.as_str()
                );
                Rc::new(rest)
            }
            Err(e) => {
                // Every operation then fails with this error and says so
                log::error!("[APP] {}", e);
                listener.notify(Notice::error(format!("Bad API configuration: {}", e)));
                Rc::new(UnavailableEndpoint::new(e))
            }
        };

        let controller = DataController::from_config(endpoint, listener, &config);
        Self {
            store,
            controller: StoredValue::new_local(Rc::new(controller)),
        }
    }

    /// Shared handle to the controller
    pub fn controller(&self) -> Rc<AdminController> {
        self.controller.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
