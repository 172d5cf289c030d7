use deck_client::DbConnection;

/// Every connection the user can open, across projects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DbConnectionsState {
    pub db_connections: Vec<DbConnection>,
    pub is_fetching: bool,
    pub error: Option<String>,
}
