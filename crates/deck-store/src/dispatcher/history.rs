//! Query history of the open connection

use deck_client::DbQueryLog;

use super::{ActionDispatcher, Fetch};
use crate::actions::{Action, HistoryAction};
use crate::error::ActionResult;

impl ActionDispatcher {
    /// Load the next (older) page of executed queries
    ///
    /// Skipped once the backend reported the last page.
    pub async fn get_db_query_logs(&self, db_conn_id: &str) -> ActionResult<Fetch<Vec<DbQueryLog>>> {
        let history = self.state().db_history.clone();
        if !history.logs.is_empty() && history.next.is_none() {
            return Ok(Fetch::Skipped);
        }

        let page = self.api.get_db_history(db_conn_id, history.next).await?;
        // a negative cursor marks the last page
        let next = page.next.filter(|cursor| *cursor >= 0);
        self.dispatch_for_connection(
            db_conn_id,
            Action::History(HistoryAction::LogsAdded {
                logs: page.list.clone(),
                next,
            }),
        );
        Ok(Fetch::Fetched(page.list))
    }

    pub fn reset_db_query_logs(&self) {
        self.dispatch(Action::History(HistoryAction::Reset));
    }
}
