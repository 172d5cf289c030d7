//! Actions for the open database connection.

use deck_client::{DataModel, DbConnection, DbQuery};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbConnectionAction {
    /// Switch to another connection; clears everything loaded for the previous one
    Set(Option<DbConnection>),

    /// Result of a connectivity check
    SetConnected(bool),

    /// Data models loaded; marks them fetched
    DataModelsLoaded(Vec<DataModel>),

    SetFetchingDataModels(bool),

    /// Forget loaded data models so the next request fetches again
    ResetDataModels,

    /// Saved queries loaded; marks them fetched
    QueriesLoaded(Vec<DbQuery>),

    QueryAdded(DbQuery),

    QueryUpdated(DbQuery),

    QueryDeleted(String),
}
