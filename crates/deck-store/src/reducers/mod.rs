//! Reducers
//!
//! Pure functions from (slice, action) to slice. A reducer that changes its
//! slice returns a new `Arc`; one that does not returns the pointer it was
//! given, so selectors can detect change with `Arc::ptr_eq`.

use std::sync::Arc;

pub mod app_reducer;
pub mod config_reducer;
pub mod console_reducer;
pub mod db_connection_reducer;
pub mod db_connections_reducer;
pub mod history_reducer;
pub mod project_reducer;
pub mod tab_cache_reducer;
pub mod tab_reducer;

/// Copy-on-write update of a shared slice
pub(crate) fn update<S: Clone>(slice: Arc<S>, f: impl FnOnce(&mut S)) -> Arc<S> {
    let mut next = Arc::unwrap_or_clone(slice);
    f(&mut next);
    Arc::new(next)
}
