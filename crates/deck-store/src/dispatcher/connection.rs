//! The open connection: switching, connectivity, data models and saved queries

use deck_client::{DataModel, DbConnection, DbQuery};

use super::{is_current_connection, ActionDispatcher, Fetch, Rejected};
use crate::actions::{Action, DbConnectionAction};
use crate::error::{ActionError, ActionResult};

/// Result of [`ActionDispatcher::get_db_connection`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedConnection {
    pub db_connection: DbConnection,
    /// `false` when the connection was already open
    pub is_new: bool,
}

impl ActionDispatcher {
    /// Open a connection; everything loaded for the previous one is dropped
    pub async fn get_db_connection(&self, db_conn_id: &str) -> ActionResult<OpenedConnection> {
        if let Some(current) = &self.state().db_connection.db_connection {
            if current.id == db_conn_id {
                return Ok(OpenedConnection {
                    db_connection: current.clone(),
                    is_new: false,
                });
            }
        }

        let db_connection = self.api.get_single_db_connection(db_conn_id).await?;
        log::info!("Opening connection {} ({})", db_connection.name, db_connection.db_type);
        self.dispatch(Action::DbConnection(DbConnectionAction::Set(Some(
            db_connection.clone(),
        ))));
        Ok(OpenedConnection {
            db_connection,
            is_new: true,
        })
    }

    /// Check that the open connection is reachable
    ///
    /// An unreachable database is recorded in state, not returned as an error.
    pub async fn check_connection(&self) -> ActionResult<bool> {
        let db_conn_id = self
            .state()
            .db_connection
            .connection_id()
            .map(str::to_string)
            .ok_or(ActionError::NoActiveConnection)?;

        let connected = match self.api.check_connection(&db_conn_id).await {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Connection {} is not reachable: {}", db_conn_id, e);
                false
            }
        };
        self.dispatch_for_connection(
            &db_conn_id,
            Action::DbConnection(DbConnectionAction::SetConnected(connected)),
        );
        Ok(connected)
    }

    /// Load the data models of the open connection unless already loaded or loading
    pub async fn get_db_data_models(&self, db_conn_id: &str) -> ActionResult<Fetch<Vec<DataModel>>> {
        let started = self.begin(|state| {
            let conn = &state.db_connection;
            if !is_current_connection(state, db_conn_id)
                || conn.is_data_models_fetched
                || conn.is_fetching_data_models
            {
                return Err(Rejected::Skip);
            }
            Ok(Action::DbConnection(DbConnectionAction::SetFetchingDataModels(true)))
        })?;
        if !started {
            return Ok(Fetch::Skipped);
        }

        match self.api.get_db_data_models_by_connection_id(db_conn_id).await {
            Ok(models) => {
                self.dispatch_for_connection(
                    db_conn_id,
                    Action::DbConnection(DbConnectionAction::DataModelsLoaded(models.clone())),
                );
                Ok(Fetch::Fetched(models))
            }
            Err(e) => {
                log::warn!("Failed to load data models of {}: {}", db_conn_id, e);
                self.dispatch_for_connection(
                    db_conn_id,
                    Action::DbConnection(DbConnectionAction::SetFetchingDataModels(false)),
                );
                Err(e.into())
            }
        }
    }

    /// Load the saved queries of `db_conn_id` unless already loaded
    pub async fn get_db_queries(&self, db_conn_id: &str) -> ActionResult<Fetch<Vec<DbQuery>>> {
        if self.state().db_connection.is_queries_fetched {
            return Ok(Fetch::Skipped);
        }

        let queries = self.api.get_db_queries_in_db_conn(db_conn_id).await?;
        self.dispatch_for_connection(
            db_conn_id,
            Action::DbConnection(DbConnectionAction::QueriesLoaded(queries.clone())),
        );
        Ok(Fetch::Fetched(queries))
    }

    /// Forget loaded data models so the next request refetches them
    pub fn reset_db_data_models(&self) {
        self.dispatch(Action::DbConnection(DbConnectionAction::ResetDataModels));
    }

    /// Save a query; `query_id` is `"new"` for a query never saved before
    pub async fn save_db_query(
        &self,
        db_conn_id: &str,
        query_id: &str,
        name: &str,
        query: &str,
    ) -> ActionResult<DbQuery> {
        let saved = self.api.save_db_query(db_conn_id, name, query, query_id).await?;
        self.store.dispatch_from(|state| {
            let action = if state.db_connection.find_query(&saved.id).is_some() {
                DbConnectionAction::QueryUpdated(saved.clone())
            } else {
                DbConnectionAction::QueryAdded(saved.clone())
            };
            Action::DbConnection(action)
        });
        Ok(saved)
    }

    pub async fn delete_db_query(&self, query_id: &str) -> ActionResult<()> {
        self.api.delete_db_query(query_id).await?;
        self.dispatch(Action::DbConnection(DbConnectionAction::QueryDeleted(
            query_id.to_string(),
        )));
        Ok(())
    }
}
