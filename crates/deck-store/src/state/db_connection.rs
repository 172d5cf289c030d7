use deck_client::{DataModel, DbConnection, DbQuery};

/// The connection currently opened in the workspace and what was loaded for it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DbConnectionState {
    pub db_connection: Option<DbConnection>,
    /// Result of the last connectivity check, `None` before the first one
    pub is_connected: Option<bool>,
    pub data_models: Vec<DataModel>,
    pub is_fetching_data_models: bool,
    pub is_data_models_fetched: bool,
    pub queries: Vec<DbQuery>,
    pub is_queries_fetched: bool,
}

impl DbConnectionState {
    /// Fresh state for a newly opened connection
    pub fn for_connection(db_connection: Option<DbConnection>) -> Self {
        Self {
            db_connection,
            ..Self::default()
        }
    }

    pub fn connection_id(&self) -> Option<&str> {
        self.db_connection.as_ref().map(|c| c.id.as_str())
    }

    pub fn find_query(&self, query_id: &str) -> Option<&DbQuery> {
        self.queries.iter().find(|q| q.id == query_id)
    }
}
