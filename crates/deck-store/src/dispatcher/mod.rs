//! Action dispatcher - the asynchronous side of the store
//!
//! Each operation performs at most one API call and turns its outcome into
//! one transition. Guards that must not race (in-flight flags, fetched
//! flags, tab dedup) are evaluated with [`Store::dispatch_with`], so the
//! check and the transition that marks the work as started are atomic.
//!
//! On failure nothing is dispatched except the revert of a fetch flag the
//! operation itself set.
//!
//! ```text
//!   caller ──► ActionDispatcher ──► ApiClient / Storage
//!                    │
//!                    ▼ Action
//!                  Store ──► middleware ──► reduce ──► watch channel
//! ```

mod config;
mod connection;
mod connections;
mod console;
mod data;
mod history;
mod projects;
mod queries;
mod session;
mod tabs;

use std::sync::Arc;

use deck_client::ApiClient;
use deck_config::{AppConfig, Storage};

use crate::actions::Action;
use crate::domain_models::Pagination;
use crate::error::{ActionError, ActionResult};
use crate::state::AppState;
use crate::store::Store;

pub use connection::OpenedConnection;
pub use data::{DataRequest, TableRef};
pub use tabs::TabOpened;

/// Outcome of an operation guarded against duplicate work
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch<T> {
    Fetched(T),
    /// Already fetched, or a fetch of the same kind is in flight
    Skipped,
}

impl<T> Fetch<T> {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    pub fn fetched(self) -> Option<T> {
        match self {
            Self::Fetched(value) => Some(value),
            Self::Skipped => None,
        }
    }
}

/// Why a guarded start did not dispatch
enum Rejected {
    Skip,
    Error(ActionError),
}

/// Runs operations against the API and the persistence layer
pub struct ActionDispatcher {
    store: Arc<Store>,
    api: Arc<dyn ApiClient>,
    storage: Arc<dyn Storage>,
    config: AppConfig,
}

impl ActionDispatcher {
    pub fn new(
        store: Arc<Store>,
        api: Arc<dyn ApiClient>,
        storage: Arc<dyn Storage>,
        config: AppConfig,
    ) -> Self {
        Self {
            store,
            api,
            storage,
            config,
        }
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    pub fn state(&self) -> Arc<AppState> {
        self.store.state()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// First page sized for the open connection
    pub fn pagination(&self) -> Pagination {
        let state = self.state();
        let db_type = state.db_connection.db_connection.as_ref().map(|c| c.db_type);
        Pagination::for_connection(db_type, &self.config)
    }

    fn dispatch(&self, action: Action) {
        self.store.dispatch(action);
    }

    /// Dispatch the start transition built by `f`
    ///
    /// `Ok(false)` means the work is already done or in flight.
    fn begin(&self, f: impl FnOnce(&AppState) -> Result<Action, Rejected>) -> ActionResult<bool> {
        match self.store.dispatch_with(f) {
            Ok(()) => Ok(true),
            Err(Rejected::Skip) => Ok(false),
            Err(Rejected::Error(e)) => Err(e),
        }
    }

    /// Dispatch `action` only while `db_conn_id` is still the open connection
    ///
    /// Responses for a connection that was switched away from are dropped.
    fn dispatch_for_connection(&self, db_conn_id: &str, action: Action) -> bool {
        self.store
            .dispatch_if(|state| is_current_connection(state, db_conn_id), action)
    }
}

/// No connection opened yet counts as current
fn is_current_connection(state: &AppState, db_conn_id: &str) -> bool {
    state
        .db_connection
        .connection_id()
        .is_none_or(|id| id == db_conn_id)
}
