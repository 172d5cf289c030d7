use crate::actions::{Action, TabCacheAction};
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
#[derive(Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState) -> bool {
        match action {
            // result sets can be large, log their shape only
            Action::TabCache(TabCacheAction::SetQueryData { tab_id, data }) => {
                log::debug!(
                    "Action: SetQueryData(tab={}, rows={:?})",
                    tab_id,
                    data.as_ref().map(|d| d.rows.len() + d.data.len())
                );
            }
            Action::TabCache(TabCacheAction::PatchQueryData { tab_id, data }) => {
                log::debug!(
                    "Action: PatchQueryData(tab={}, rows={})",
                    tab_id,
                    data.rows.len() + data.data.len()
                );
            }
            _ => log::debug!("Action: {:?}", action),
        }

        true // Always pass action through
    }
}
