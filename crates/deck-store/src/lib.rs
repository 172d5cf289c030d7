//! Session and tab state manager for the database workspace
//!
//! The store follows a Redux loop:
//!
//! ```text
//!   ActionDispatcher ── API / storage ──► Action
//!                                           │
//!                                           ▼
//!   Store: middleware ──► reduce(state, action) ──► Arc<AppState>
//!                                                      │
//!                                                      ▼
//!                                    subscribers ──► Selectors
//! ```
//!
//! State slices are shared through `Arc` and replaced on change, so both
//! the store and the selectors detect change by pointer.

pub mod actions;
pub mod dispatcher;
pub mod domain_models;
pub mod error;
pub mod logger;
pub mod middleware;
pub mod reducers;
pub mod selectors;
pub mod state;
pub mod store;

#[cfg(test)]
mod testing;

use std::sync::Arc;

pub use actions::Action;
pub use dispatcher::{ActionDispatcher, DataRequest, Fetch, OpenedConnection, TabOpened, TableRef};
pub use error::{ActionError, ActionResult};
pub use selectors::Selectors;
pub use state::AppState;
pub use store::Store;

use middleware::LoggingMiddleware;

/// A store with the default middleware installed
pub fn create_store() -> Arc<Store> {
    let store = Store::new(AppState::default());
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    Arc::new(store)
}
