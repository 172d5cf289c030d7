use std::sync::Arc;

use super::update;
use crate::actions::HistoryAction;
use crate::state::DbHistoryState;

pub fn reduce_history(state: Arc<DbHistoryState>, action: &HistoryAction) -> Arc<DbHistoryState> {
    match action {
        HistoryAction::LogsAdded { logs, next } => {
            log::debug!("Appending {} query logs, next cursor {:?}", logs.len(), next);
            update(state, |s| {
                s.logs.extend(logs.iter().cloned());
                s.next = *next;
            })
        }
        HistoryAction::Reset => Arc::default(),
    }
}
