use std::collections::HashSet;
use std::sync::Arc;

use super::update;
use crate::actions::DbConnectionsAction;
use crate::state::DbConnectionsState;
use deck_client::DbConnection;

/// Keep the first occurrence of every id
fn dedup_by_id(connections: &mut Vec<DbConnection>) {
    let mut seen = HashSet::new();
    connections.retain(|c| seen.insert(c.id.clone()));
}

pub fn reduce_db_connections(
    state: Arc<DbConnectionsState>,
    action: &DbConnectionsAction,
) -> Arc<DbConnectionsState> {
    match action {
        DbConnectionsAction::FetchStart => update(state, |s| {
            s.is_fetching = true;
            s.error = None;
        }),
        DbConnectionsAction::Refreshed(connections) => update(state, |s| {
            s.db_connections = connections.clone();
            dedup_by_id(&mut s.db_connections);
            s.is_fetching = false;
            s.error = None;
        }),
        DbConnectionsAction::MoreLoaded(connections) => update(state, |s| {
            s.db_connections.extend(connections.iter().cloned());
            dedup_by_id(&mut s.db_connections);
            s.is_fetching = false;
            s.error = None;
        }),
        DbConnectionsAction::FetchError(error) => {
            log::error!("Failed to load connections: {}", error);
            update(state, |s| {
                s.is_fetching = false;
                s.error = Some(error.clone());
            })
        }
        DbConnectionsAction::Added(connection) => {
            update(state, |s| s.db_connections.push(connection.clone()))
        }
        DbConnectionsAction::Reset => Arc::default(),
    }
}
