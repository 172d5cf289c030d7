//! Saved queries shown in query tabs, and ad-hoc query runs

use deck_client::{DbQuery, QueryData};

use super::ActionDispatcher;
use crate::actions::{Action, TabCacheAction};
use crate::error::{ActionError, ActionResult};

impl ActionDispatcher {
    /// Load a saved query into a query tab
    pub async fn get_db_query(&self, query_id: &str, tab_id: &str) -> ActionResult<DbQuery> {
        let query = self.api.get_single_db_query(query_id).await?;
        self.set_db_query(tab_id, Some(query.clone()));
        Ok(query)
    }

    pub fn set_db_query(&self, tab_id: &str, query: Option<DbQuery>) {
        self.dispatch(Action::TabCache(TabCacheAction::SetDbQuery {
            tab_id: tab_id.to_string(),
            query,
        }));
    }

    /// Run a query; the caller decides where the result goes
    pub async fn run_query(&self, db_conn_id: &str, query: &str) -> ActionResult<QueryData> {
        if query.trim().is_empty() {
            return Err(ActionError::EmptyQuery);
        }
        let data = self.api.run_query(db_conn_id, query).await?;
        log::debug!("Query on {} returned {} rows", db_conn_id, data.rows.len() + data.data.len());
        Ok(data)
    }
}
