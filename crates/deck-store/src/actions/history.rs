//! Actions for query history.

use deck_client::DbQueryLog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryAction {
    /// Append a page of logs and replace the cursor
    LogsAdded {
        logs: Vec<DbQueryLog>,
        next: Option<i64>,
    },

    Reset,
}
