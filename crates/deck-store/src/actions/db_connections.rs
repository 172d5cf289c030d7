//! Actions for the list of all connections.

use deck_client::DbConnection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbConnectionsAction {
    FetchStart,

    /// Replace the list
    Refreshed(Vec<DbConnection>),

    /// Append to the list, skipping ids already present
    MoreLoaded(Vec<DbConnection>),

    FetchError(String),

    Added(DbConnection),

    Reset,
}
