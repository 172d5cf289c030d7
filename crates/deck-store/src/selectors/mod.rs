//! Selectors - derived read views over [`AppState`]
//!
//! [`Selectors`] holds the memoized derivations. Each one recomputes only
//! when one of the slices it reads was replaced, which the reducers signal
//! by handing out a new `Arc`. Reads that are a plain field access are free
//! functions.

mod memo;

use std::sync::Arc;

use deck_client::{
    DataModel, DbConnection, DbQuery, DbQueryLog, Project, QueryData, Tab, User,
    READ_ONLY_PERMISSION,
};

pub use memo::{ArcKey, Memo};

use crate::state::{
    AppState, ConsoleBlock, DbConnectionState, DbQueryState, FetchFlags, ProjectsState,
    TabCacheEntry, TabCacheState, TabsState,
};

/// A tab annotated with whether it is the active one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub tab: Tab,
    pub is_active: bool,
}

/// What the current member may do in the project of the open connection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectPermissions {
    pub read_only: bool,
}

type TabsKey = ArcKey<TabsState>;
type ProjectKey = (ArcKey<ProjectsState>, ArcKey<DbConnectionState>);

/// Memoized selectors; keep one instance per renderer
#[derive(Debug, Default)]
pub struct Selectors {
    tabs: Memo<TabsKey, Arc<Vec<TabView>>>,
    active_tab: Memo<TabsKey, Option<Tab>>,
    active_entry: Memo<(TabsKey, ArcKey<TabCacheState>), Option<Arc<TabCacheEntry>>>,
    db_query: Memo<(TabsKey, ArcKey<DbQueryState>), Option<DbQuery>>,
    current_project: Memo<ProjectKey, Option<Project>>,
    permissions: Memo<ProjectKey, ProjectPermissions>,
}

impl Selectors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tabs(&mut self, state: &AppState) -> Arc<Vec<TabView>> {
        let tabs = &state.tabs;
        self.tabs.get_or_compute(ArcKey::new(tabs), || {
            Arc::new(
                tabs.tabs
                    .iter()
                    .map(|tab| TabView {
                        is_active: tabs.active_tab_id.as_deref() == Some(tab.id.as_str()),
                        tab: tab.clone(),
                    })
                    .collect(),
            )
        })
    }

    pub fn active_tab(&mut self, state: &AppState) -> Option<Tab> {
        let tabs = &state.tabs;
        self.active_tab
            .get_or_compute(ArcKey::new(tabs), || tabs.active_tab().cloned())
    }

    fn active_entry(&mut self, state: &AppState) -> Option<Arc<TabCacheEntry>> {
        let (tabs, cache) = (&state.tabs, &state.tab_cache);
        self.active_entry
            .get_or_compute((ArcKey::new(tabs), ArcKey::new(cache)), || {
                tabs.active_tab_id
                    .as_deref()
                    .and_then(|id| cache.get(id))
                    .cloned()
            })
    }

    /// Result data of the active tab
    pub fn query_data(&mut self, state: &AppState) -> Option<Arc<QueryData>> {
        self.active_entry(state)?.query_data.clone()
    }

    /// Data model of the active tab
    pub fn single_data_model(&mut self, state: &AppState) -> Option<Arc<DataModel>> {
        self.active_entry(state)?.data_model.clone()
    }

    pub fn fetch_flags(&mut self, state: &AppState) -> FetchFlags {
        self.active_entry(state)
            .map(|e| e.fetching)
            .unwrap_or_default()
    }

    pub fn is_fetching_query_data(&mut self, state: &AppState) -> bool {
        self.fetch_flags(state).data
    }

    pub fn is_fetching_data_model(&mut self, state: &AppState) -> bool {
        self.fetch_flags(state).model
    }

    /// Saved query shown by the active tab
    pub fn db_query(&mut self, state: &AppState) -> Option<DbQuery> {
        let (tabs, queries) = (&state.tabs, &state.db_query);
        self.db_query
            .get_or_compute((ArcKey::new(tabs), ArcKey::new(queries)), || {
                tabs.active_tab_id
                    .as_deref()
                    .and_then(|id| queries.by_tab.get(id))
                    .cloned()
            })
    }

    /// Project owning the open connection
    pub fn current_project(&mut self, state: &AppState) -> Option<Project> {
        let key = (
            ArcKey::new(&state.projects),
            ArcKey::new(&state.db_connection),
        );
        self.current_project
            .get_or_compute(key, || find_current_project(state).cloned())
    }

    pub fn project_member_permissions(&mut self, state: &AppState) -> ProjectPermissions {
        let key = (
            ArcKey::new(&state.projects),
            ArcKey::new(&state.db_connection),
        );
        self.permissions.get_or_compute(key, || ProjectPermissions {
            read_only: find_current_project(state)
                .and_then(|p| p.current_member.as_ref())
                .is_some_and(|m| m.role.has_permission(READ_ONLY_PERMISSION)),
        })
    }
}

fn find_current_project(state: &AppState) -> Option<&Project> {
    let project_id = &state.db_connection.db_connection.as_ref()?.project_id;
    state.projects.find(project_id)
}

pub fn current_user(state: &AppState) -> Option<&User> {
    state.current_user.user.as_ref()
}

pub fn is_authenticated(state: &AppState) -> Option<bool> {
    state.current_user.is_authenticated
}

pub fn projects(state: &AppState) -> &[Project] {
    &state.projects.projects
}

pub fn db_connections_in_project(state: &AppState) -> &[DbConnection] {
    &state.projects.db_connections_in_project
}

pub fn db_connection(state: &AppState) -> Option<&DbConnection> {
    state.db_connection.db_connection.as_ref()
}

pub fn is_db_connected(state: &AppState) -> Option<bool> {
    state.db_connection.is_connected
}

pub fn db_data_models(state: &AppState) -> &[DataModel] {
    &state.db_connection.data_models
}

pub fn db_queries(state: &AppState) -> &[DbQuery] {
    &state.db_connection.queries
}

pub fn is_fetching_db_data_models(state: &AppState) -> bool {
    state.db_connection.is_fetching_data_models
}

pub fn db_query_logs(state: &AppState) -> &[DbQueryLog] {
    &state.db_history.logs
}

pub fn db_query_logs_next(state: &AppState) -> Option<i64> {
    state.db_history.next
}

/// Defaults to shown until a preference was loaded
pub fn is_showing_sidebar(state: &AppState) -> bool {
    state.config.is_showing_sidebar.unwrap_or(true)
}

pub fn console_blocks(state: &AppState) -> &[ConsoleBlock] {
    &state.console.blocks
}

pub fn api_version(state: &AppState) -> &str {
    &state.api.version
}

pub fn db_connections(state: &AppState) -> &[DbConnection] {
    &state.db_connections.db_connections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, DbConnectionAction, ProjectAction, TabAction, TabCacheAction};
    use crate::reducers::app_reducer::reduce;
    use crate::testing::{connection, data_tab, project, query_data, query_tab};
    use deck_client::DbConnType;
    use pretty_assertions::assert_eq;

    fn state() -> AppState {
        let state = reduce(
            AppState::default(),
            &Action::DbConnection(DbConnectionAction::Set(Some(connection(
                "c1",
                DbConnType::Postgres,
            )))),
        );
        let state = reduce(
            state,
            &Action::Tab(TabAction::SetAll(vec![
                data_tab("A", "public", "users"),
                query_tab("B", "new"),
            ])),
        );
        reduce(state, &Action::Tab(TabAction::SetActive(Some("B".into()))))
    }

    #[test]
    fn test_tabs_marks_exactly_the_active_one() {
        let mut selectors = Selectors::new();
        let views = selectors.tabs(&state());
        let active: Vec<_> = views.iter().map(|v| (v.tab.id.as_str(), v.is_active)).collect();
        assert_eq!(active, vec![("A", false), ("B", true)]);
    }

    #[test]
    fn test_tabs_is_stable_while_tabs_slice_is_unchanged() {
        let mut selectors = Selectors::new();
        let state = state();
        let first = selectors.tabs(&state);

        let state = reduce(
            state,
            &Action::TabCache(TabCacheAction::SetFetchingData {
                tab_id: "A".into(),
                fetching: true,
            }),
        );
        assert!(Arc::ptr_eq(&first, &selectors.tabs(&state)));

        let state = reduce(state, &Action::Tab(TabAction::SetActive(Some("A".into()))));
        let second = selectors.tabs(&state);
        assert!(!Arc::ptr_eq(&first, &second));
        assert!(second[0].is_active);
    }

    #[test]
    fn test_active_tab_cache_lookups() {
        let mut selectors = Selectors::new();
        let state = state();
        assert_eq!(selectors.query_data(&state), None);
        assert!(!selectors.is_fetching_query_data(&state));

        let data = Arc::new(query_data(3, Some(3)));
        let state = reduce(
            state,
            &Action::TabCache(TabCacheAction::SetQueryData {
                tab_id: "B".into(),
                data: Some(data.clone()),
            }),
        );
        let state = reduce(
            state,
            &Action::TabCache(TabCacheAction::SetFetchingModel {
                tab_id: "B".into(),
                fetching: true,
            }),
        );
        assert!(Arc::ptr_eq(&selectors.query_data(&state).unwrap(), &data));
        assert!(!selectors.is_fetching_query_data(&state));
        assert!(selectors.is_fetching_data_model(&state));
        assert_eq!(selectors.single_data_model(&state), None);
        assert_eq!(selectors.active_tab(&state).map(|t| t.id), Some("B".to_string()));
    }

    #[test]
    fn test_read_only_permission_follows_connection_project() {
        let mut selectors = Selectors::new();
        let state = reduce(
            state(),
            &Action::Project(ProjectAction::Loaded(vec![
                project("p1", Some(true)),
                project("p2", Some(false)),
            ])),
        );
        // connection fixtures belong to project p1
        assert_eq!(selectors.current_project(&state).map(|p| p.id), Some("p1".to_string()));
        assert!(selectors.project_member_permissions(&state).read_only);

        let state = reduce(
            state,
            &Action::Project(ProjectAction::Loaded(vec![project("p1", None)])),
        );
        assert!(!selectors.project_member_permissions(&state).read_only);
    }

    #[test]
    fn test_sidebar_defaults_to_shown() {
        assert!(is_showing_sidebar(&AppState::default()));
        assert_eq!(api_version(&AppState::default()), "");
    }
}
