//! Store - holds application state and applies transitions
//!
//! Transitions are serialized by a mutex: each one runs the middleware
//! chain and the reducer to completion before the next one starts. Every
//! new state is published on a watch channel so renderers can subscribe.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;

use crate::actions::Action;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;

struct Inner {
    state: Arc<AppState>,
    middleware: Vec<Box<dyn Middleware>>,
}

/// Store - holds application state and manages the Redux loop
pub struct Store {
    inner: Mutex<Inner>,
    state_tx: watch::Sender<Arc<AppState>>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let state = Arc::new(initial_state);
        let (state_tx, _) = watch::channel(state.clone());
        Self {
            inner: Mutex::new(Inner {
                state,
                middleware: Vec::new(),
            }),
            state_tx,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&self, middleware: Box<dyn Middleware>) {
        self.lock().middleware.push(middleware);
    }

    /// Snapshot of the current state
    pub fn state(&self) -> Arc<AppState> {
        self.lock().state.clone()
    }

    /// Receive every state published after a transition
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.state_tx.subscribe()
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&self, action: Action) {
        let mut inner = self.lock();
        self.apply(&mut inner, &action);
    }

    /// Dispatch `action` only if `predicate` holds for the current state
    ///
    /// The check and the transition happen under the same lock, so two
    /// callers racing on the same guard cannot both pass it.
    pub fn dispatch_if(&self, predicate: impl FnOnce(&AppState) -> bool, action: Action) -> bool {
        self.dispatch_with(|state| if predicate(state) { Ok(action) } else { Err(()) })
            .is_ok()
    }

    /// Build the action from the current state and dispatch it atomically
    ///
    /// Returning `Err` from `f` leaves the state untouched and hands the
    /// error back to the caller.
    pub fn dispatch_with<E>(&self, f: impl FnOnce(&AppState) -> Result<Action, E>) -> Result<(), E> {
        let mut inner = self.lock();
        let action = f(&inner.state)?;
        self.apply(&mut inner, &action);
        Ok(())
    }

    /// Build the action from the current state and dispatch it atomically
    pub fn dispatch_from(&self, f: impl FnOnce(&AppState) -> Action) {
        let mut inner = self.lock();
        let action = f(&inner.state);
        self.apply(&mut inner, &action);
    }

    fn apply(&self, inner: &mut Inner, action: &Action) {
        // Pass through middleware chain
        for middleware in &mut inner.middleware {
            if !middleware.handle(action, &inner.state) {
                return;
            }
        }

        let next = reduce(AppState::clone(&inner.state), action);
        if next.ptr_eq(&inner.state) {
            return;
        }

        let next = Arc::new(next);
        inner.state = next.clone();
        self.state_tx.send_replace(next);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
