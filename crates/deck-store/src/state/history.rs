use deck_client::DbQueryLog;

/// Executed queries of the open connection, oldest page last
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DbHistoryState {
    pub logs: Vec<DbQueryLog>,
    /// Cursor for the next (older) page; `None` before the first fetch or at the end
    pub next: Option<i64>,
}
