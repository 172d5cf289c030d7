use std::sync::Arc;

use crate::actions::{Action, ConsoleAction, DbConnectionAction, SessionAction, TabAction};
use crate::reducers::{
    config_reducer, console_reducer, db_connection_reducer, db_connections_reducer,
    history_reducer, project_reducer, tab_cache_reducer, tab_reducer,
};
use crate::state::{AppState, CurrentUserState};
use deck_client::TabType;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Session(action) => return reduce_session(state, action),

        Action::ResetAll => {
            log::info!("Resetting all state");
            return AppState::default();
        }

        Action::Project(action) => {
            state.projects = project_reducer::reduce_projects(state.projects, action);
        }

        Action::DbConnection(action) => {
            let switching = matches!(action, DbConnectionAction::Set(_));
            state.db_connection =
                db_connection_reducer::reduce_db_connection(state.db_connection, action);
            if switching {
                // everything opened for the previous connection goes with it
                state.tabs = Arc::default();
                state.tab_cache = Arc::default();
                state.db_query = Arc::default();
                state.db_history = Arc::default();
            }
        }

        Action::DbConnections(action) => {
            state.db_connections =
                db_connections_reducer::reduce_db_connections(state.db_connections, action);
        }

        Action::Tab(action) => {
            let closes_console = match action {
                TabAction::Delete(tab_id) => state
                    .tabs
                    .find(tab_id)
                    .is_some_and(|t| t.tab_type() == TabType::Console),
                _ => false,
            };

            state.tabs = tab_reducer::reduce_tabs(state.tabs, action);
            state.tab_cache = tab_cache_reducer::retain_open_tabs(state.tab_cache, &state.tabs);
            state.db_query =
                tab_cache_reducer::retain_open_tab_queries(state.db_query, &state.tabs);

            if closes_console {
                state.console = console_reducer::reduce_console(state.console, &ConsoleAction::Reset);
            }
        }

        Action::TabCache(action) => {
            if !state.tabs.contains(action.tab_id()) {
                // a late response for a closed tab must not resurrect its entry
                log::debug!("Dropping cache update for closed tab {}", action.tab_id());
                return state;
            }
            state.tab_cache = tab_cache_reducer::reduce_tab_cache(state.tab_cache, action);
            state.db_query = tab_cache_reducer::reduce_db_query(state.db_query, action);
        }

        Action::History(action) => {
            state.db_history = history_reducer::reduce_history(state.db_history, action);
        }

        Action::Config(action) => {
            state.config = config_reducer::reduce_config(state.config, action);
        }

        Action::Console(action) => {
            state.console = console_reducer::reduce_console(state.console, action);
        }

        Action::Api(action) => {
            state.api = config_reducer::reduce_api(state.api, action);
        }

        Action::None => {}
    }

    state
}

fn reduce_session(state: AppState, action: &SessionAction) -> AppState {
    match action {
        SessionAction::LoggedIn(user) => {
            log::info!("User {} signed in", user.email);
            AppState {
                current_user: Arc::new(CurrentUserState {
                    user: Some(user.clone()),
                    is_authenticated: Some(true),
                }),
                config: state.config,
                api: state.api,
                ..AppState::default()
            }
        }
        SessionAction::UserUpdated {
            user,
            is_authenticated,
        } => {
            let current_user = Arc::new(CurrentUserState {
                user: user.clone(),
                is_authenticated: Some(*is_authenticated),
            });
            let same_user = match (&state.current_user.user, user) {
                (Some(previous), Some(next)) => previous.id == next.id,
                _ => false,
            };
            if *is_authenticated && same_user {
                return AppState {
                    current_user,
                    ..state
                };
            }

            log::info!("Session changed, dropping scoped state");
            AppState {
                current_user,
                config: state.config,
                api: state.api,
                ..AppState::default()
            }
        }
        SessionAction::LoggedOut => {
            log::info!("User signed out");
            AppState {
                current_user: Arc::new(CurrentUserState {
                    user: None,
                    is_authenticated: Some(false),
                }),
                ..AppState::default()
            }
        }
    }
}
