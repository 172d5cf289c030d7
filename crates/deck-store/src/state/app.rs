use std::sync::Arc;

use super::{
    ApiState, ConfigState, ConsoleState, CurrentUserState, DbConnectionState, DbConnectionsState,
    DbHistoryState, DbQueryState, ProjectsState, TabCacheState, TabsState,
};

/// Application state - the root of the tree
///
/// Cloning is cheap: only the slice pointers are copied.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_user: Arc<CurrentUserState>,
    pub projects: Arc<ProjectsState>,
    pub db_connection: Arc<DbConnectionState>,
    pub db_connections: Arc<DbConnectionsState>,
    pub tabs: Arc<TabsState>,
    pub tab_cache: Arc<TabCacheState>,
    pub db_query: Arc<DbQueryState>,
    pub db_history: Arc<DbHistoryState>,
    pub config: Arc<ConfigState>,
    pub console: Arc<ConsoleState>,
    pub api: Arc<ApiState>,
}

impl AppState {
    /// Whether both trees share every slice pointer
    pub fn ptr_eq(&self, other: &AppState) -> bool {
        Arc::ptr_eq(&self.current_user, &other.current_user)
            && Arc::ptr_eq(&self.projects, &other.projects)
            && Arc::ptr_eq(&self.db_connection, &other.db_connection)
            && Arc::ptr_eq(&self.db_connections, &other.db_connections)
            && Arc::ptr_eq(&self.tabs, &other.tabs)
            && Arc::ptr_eq(&self.tab_cache, &other.tab_cache)
            && Arc::ptr_eq(&self.db_query, &other.db_query)
            && Arc::ptr_eq(&self.db_history, &other.db_history)
            && Arc::ptr_eq(&self.config, &other.config)
            && Arc::ptr_eq(&self.console, &other.console)
            && Arc::ptr_eq(&self.api, &other.api)
    }
}
