use std::sync::Arc;

use super::update;
use crate::actions::DbConnectionAction;
use crate::state::DbConnectionState;

pub fn reduce_db_connection(
    state: Arc<DbConnectionState>,
    action: &DbConnectionAction,
) -> Arc<DbConnectionState> {
    match action {
        DbConnectionAction::Set(db_connection) => {
            log::info!(
                "Switching connection to {:?}",
                db_connection.as_ref().map(|c| &c.name)
            );
            // never keep models or queries of the previous connection
            Arc::new(DbConnectionState::for_connection(db_connection.clone()))
        }
        DbConnectionAction::SetConnected(connected) => {
            if state.is_connected == Some(*connected) {
                return state;
            }
            update(state, |s| s.is_connected = Some(*connected))
        }
        DbConnectionAction::DataModelsLoaded(models) => {
            log::debug!("Loaded {} data models", models.len());
            update(state, |s| {
                s.data_models = models.clone();
                s.is_data_models_fetched = true;
                s.is_fetching_data_models = false;
            })
        }
        DbConnectionAction::SetFetchingDataModels(fetching) => {
            if state.is_fetching_data_models == *fetching {
                return state;
            }
            update(state, |s| s.is_fetching_data_models = *fetching)
        }
        DbConnectionAction::ResetDataModels => update(state, |s| {
            s.data_models.clear();
            s.is_data_models_fetched = false;
        }),
        DbConnectionAction::QueriesLoaded(queries) => update(state, |s| {
            s.queries = queries.clone();
            s.is_queries_fetched = true;
        }),
        DbConnectionAction::QueryAdded(query) => update(state, |s| s.queries.push(query.clone())),
        DbConnectionAction::QueryUpdated(query) => {
            let Some(idx) = state.queries.iter().position(|q| q.id == query.id) else {
                log::warn!("QueryUpdated: query {} not loaded", query.id);
                return state;
            };
            update(state, |s| s.queries[idx] = query.clone())
        }
        DbConnectionAction::QueryDeleted(query_id) => {
            if state.find_query(query_id).is_none() {
                return state;
            }
            update(state, |s| s.queries.retain(|q| q.id != *query_id))
        }
    }
}
