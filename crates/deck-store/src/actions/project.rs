//! Actions for projects.

use deck_client::{DbConnection, Project};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectAction {
    /// Mark the project list as loading
    FetchStart,

    /// Project list loaded
    Loaded(Vec<Project>),

    /// Loading the project list failed; it can be retried
    FetchFailed,

    Added(Project),

    Deleted(String),

    /// Connections of the project being browsed
    ConnectionsLoaded(Vec<DbConnection>),

    ConnectionDeleted(String),
}
