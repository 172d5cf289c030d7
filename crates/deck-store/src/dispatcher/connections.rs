//! The list of every connection the user can open

use deck_client::{AddDbConnPayload, DbConnection};

use super::{ActionDispatcher, Fetch, Rejected};
use crate::actions::{Action, DbConnectionsAction};
use crate::error::ActionResult;

impl ActionDispatcher {
    /// Replace the connection list with a fresh copy from the backend
    pub async fn refresh_db_connections(&self) -> ActionResult<Vec<DbConnection>> {
        self.dispatch(Action::DbConnections(DbConnectionsAction::FetchStart));
        let connections = self.load_db_connections().await?;
        self.dispatch(Action::DbConnections(DbConnectionsAction::Refreshed(
            connections.clone(),
        )));
        Ok(connections)
    }

    /// Append the backend's connections to the list, skipping known ids
    pub async fn load_more_db_connections(&self) -> ActionResult<Fetch<Vec<DbConnection>>> {
        let started = self.begin(|state| {
            if state.db_connections.is_fetching {
                return Err(Rejected::Skip);
            }
            Ok(Action::DbConnections(DbConnectionsAction::FetchStart))
        })?;
        if !started {
            return Ok(Fetch::Skipped);
        }

        let connections = self.load_db_connections().await?;
        self.dispatch(Action::DbConnections(DbConnectionsAction::MoreLoaded(
            connections.clone(),
        )));
        Ok(Fetch::Fetched(connections))
    }

    async fn load_db_connections(&self) -> ActionResult<Vec<DbConnection>> {
        self.api.get_all_db_connections().await.map_err(|e| {
            self.dispatch(Action::DbConnections(DbConnectionsAction::FetchError(
                e.message().to_string(),
            )));
            e.into()
        })
    }

    pub async fn add_new_db_conn(&self, payload: &AddDbConnPayload) -> ActionResult<DbConnection> {
        let connection = self.api.add_new_db_conn(payload, false).await?;
        log::info!("Added connection {}", connection.name);
        self.dispatch(Action::DbConnections(DbConnectionsAction::Added(
            connection.clone(),
        )));
        Ok(connection)
    }

    /// Ask the backend to try `payload` without saving it
    pub async fn test_new_db_conn(&self, payload: &AddDbConnPayload) -> ActionResult<()> {
        self.api.add_new_db_conn(payload, true).await?;
        Ok(())
    }

    pub fn reset_db_connections(&self) {
        self.dispatch(Action::DbConnections(DbConnectionsAction::Reset));
    }
}
