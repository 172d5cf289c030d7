use crate::actions::Action;
use crate::state::AppState;

pub mod logging;

pub use logging::LoggingMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs inside the store's transition lock, so it must not block
/// or dispatch; asynchronous work belongs in the dispatcher.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState) -> bool;
}
