//! Per-tab data: fetching rows and data models, DDL, and row mutations
//!
//! Fetches are bounded to one in flight per tab and kind. Row mutations
//! patch the tab's cached result with what the server confirmed instead of
//! refetching it.

use std::sync::Arc;

use deck_client::{AddDataResponse, DataModel, DbConnType, QueryData, Row, UpdateSingleDataResponse};
use serde_json::Value;

use super::{ActionDispatcher, Fetch, Rejected};
use crate::actions::{Action, TabCacheAction};
use crate::domain_models::row_patch;
use crate::domain_models::{row_identity, Pagination, RowIdentity};
use crate::error::{ActionError, ActionResult};

/// A table (or collection) of a connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub db_connection_id: String,
    pub schema: String,
    pub name: String,
}

impl TableRef {
    pub fn new(
        db_connection_id: impl Into<String>,
        schema: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            db_connection_id: db_connection_id.into(),
            schema: schema.into(),
            name: name.into(),
        }
    }
}

/// One page of a table, fetched for a tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRequest {
    pub tab_id: String,
    pub table: TableRef,
    pub pagination: Pagination,
    /// `[column, operator]` or `[column, operator, value]`
    pub filter: Option<Vec<String>>,
    /// `[column, "ASC" | "DESC"]`
    pub sort: Option<Vec<String>>,
}

impl ActionDispatcher {
    /// Fetch a page of rows into the tab's cache
    ///
    /// Skipped while a data fetch for the same tab is in flight.
    pub async fn get_db_data_in_data_model(
        &self,
        request: &DataRequest,
    ) -> ActionResult<Fetch<Arc<QueryData>>> {
        let tab_id = &request.tab_id;
        let started = self.begin(|state| {
            if !state.tabs.contains(tab_id) {
                return Err(Rejected::Error(ActionError::TabNotOpen));
            }
            if state.tab_cache.fetching(tab_id).data {
                log::debug!("Data fetch for tab {} already in flight", tab_id);
                return Err(Rejected::Skip);
            }
            Ok(Action::TabCache(TabCacheAction::SetFetchingData {
                tab_id: tab_id.clone(),
                fetching: true,
            }))
        })?;
        if !started {
            return Ok(Fetch::Skipped);
        }

        let table = &request.table;
        let result = self
            .api
            .get_db_data_in_data_model(
                &table.db_connection_id,
                &table.schema,
                &table.name,
                request.pagination.limit,
                request.pagination.offset,
                request.pagination.is_first_fetch(),
                request.filter.as_deref(),
                request.sort.as_deref(),
            )
            .await;

        match result {
            Ok(data) => {
                let data = Arc::new(data);
                self.dispatch(Action::TabCache(TabCacheAction::SetQueryData {
                    tab_id: tab_id.clone(),
                    data: Some(data.clone()),
                }));
                Ok(Fetch::Fetched(data))
            }
            Err(e) => {
                log::warn!("Failed to fetch {}.{}: {}", table.schema, table.name, e);
                self.dispatch(Action::TabCache(TabCacheAction::SetFetchingData {
                    tab_id: tab_id.clone(),
                    fetching: false,
                }));
                Err(e.into())
            }
        }
    }

    /// Fetch the data model shown by a tab
    ///
    /// Skipped while a model fetch for the same tab is in flight.
    pub async fn get_single_data_model(
        &self,
        tab_id: &str,
        table: &TableRef,
    ) -> ActionResult<Fetch<Arc<DataModel>>> {
        let started = self.begin(|state| {
            if !state.tabs.contains(tab_id) {
                return Err(Rejected::Error(ActionError::TabNotOpen));
            }
            if state.tab_cache.fetching(tab_id).model {
                return Err(Rejected::Skip);
            }
            Ok(Action::TabCache(TabCacheAction::SetFetchingModel {
                tab_id: tab_id.to_string(),
                fetching: true,
            }))
        })?;
        if !started {
            return Ok(Fetch::Skipped);
        }

        let result = self
            .api
            .get_db_single_data_model(&table.db_connection_id, &table.schema, &table.name)
            .await;

        match result {
            Ok(model) => {
                let model = Arc::new(model);
                self.dispatch(Action::TabCache(TabCacheAction::SetDataModel {
                    tab_id: tab_id.to_string(),
                    data_model: Some(model.clone()),
                }));
                Ok(Fetch::Fetched(model))
            }
            Err(e) => {
                log::warn!("Failed to fetch model {}.{}: {}", table.schema, table.name, e);
                self.dispatch(Action::TabCache(TabCacheAction::SetFetchingModel {
                    tab_id: tab_id.to_string(),
                    fetching: false,
                }));
                Err(e.into())
            }
        }
    }

    /// Store result data for a tab, e.g. the output of a query run
    pub fn set_query_data(&self, tab_id: &str, data: Option<QueryData>) {
        self.dispatch(Action::TabCache(TabCacheAction::SetQueryData {
            tab_id: tab_id.to_string(),
            data: data.map(Arc::new),
        }));
    }

    pub async fn add_db_data_model_field(
        &self,
        table: &TableRef,
        field_name: &str,
        data_type: &str,
    ) -> ActionResult<()> {
        self.api
            .add_db_single_data_model_field(
                &table.db_connection_id,
                &table.schema,
                &table.name,
                field_name,
                data_type,
            )
            .await?;
        Ok(())
    }

    pub async fn delete_db_data_model_field(
        &self,
        table: &TableRef,
        field_name: &str,
    ) -> ActionResult<()> {
        self.api
            .delete_db_single_data_model_field(
                &table.db_connection_id,
                &table.schema,
                &table.name,
                field_name,
            )
            .await?;
        Ok(())
    }

    pub async fn add_db_data_model_index(
        &self,
        table: &TableRef,
        index_name: &str,
        field_names: &[String],
        is_unique: bool,
    ) -> ActionResult<()> {
        self.api
            .add_db_single_data_model_index(
                &table.db_connection_id,
                &table.schema,
                &table.name,
                index_name,
                field_names,
                is_unique,
            )
            .await?;
        Ok(())
    }

    pub async fn delete_db_data_model_index(
        &self,
        table: &TableRef,
        index_name: &str,
    ) -> ActionResult<()> {
        self.api
            .delete_db_single_data_model_index(
                &table.db_connection_id,
                &table.schema,
                &table.name,
                index_name,
            )
            .await?;
        Ok(())
    }

    /// Insert a row and prepend it to the tab's cached result
    ///
    /// `row` is keyed by column name, or is the document for MongoDB.
    pub async fn add_db_data(
        &self,
        tab_id: &str,
        table: &TableRef,
        row: &Row,
    ) -> ActionResult<AddDataResponse> {
        let (db_type, _) = self.editable_data(tab_id)?;

        let response = self
            .api
            .add_db_data(&table.db_connection_id, &table.schema, &table.name, row)
            .await?;
        log::info!("Inserted row {} into {}.{}", response.new_id, table.schema, table.name);

        self.patch_query_data(tab_id, |data| {
            Some(row_patch::prepend_added_row(db_type, data, row, &response))
        });
        Ok(response)
    }

    /// Update one cell of a cached row
    ///
    /// For MongoDB `value` is the whole document without `_id` and
    /// `column_index` is ignored.
    pub async fn update_db_single_data(
        &self,
        tab_id: &str,
        table: &TableRef,
        row_index: usize,
        column_index: usize,
        value: Value,
    ) -> ActionResult<UpdateSingleDataResponse> {
        let (db_type, data) = self.editable_data(tab_id)?;
        let row_id = row_identity(db_type, &data, row_index)?;
        let column_name = match db_type {
            DbConnType::Mongo => String::new(),
            _ => data
                .columns
                .get(column_index)
                .cloned()
                .ok_or(ActionError::ColumnNotFound(column_index))?,
        };

        let response = self
            .api
            .update_db_single_data(
                &table.db_connection_id,
                &table.schema,
                &table.name,
                &row_id,
                &column_name,
                &value,
            )
            .await?;

        self.patch_query_data(tab_id, |data| {
            row_patch::update_cell(
                db_type,
                data,
                &row_id,
                column_index,
                &value,
                response.ctid.as_deref(),
            )
        });
        Ok(response)
    }

    /// Delete the cached rows at `row_indices`; returns the deleted row ids
    pub async fn delete_db_data(
        &self,
        tab_id: &str,
        table: &TableRef,
        row_indices: &[usize],
    ) -> ActionResult<Vec<String>> {
        let (db_type, data) = self.editable_data(tab_id)?;
        RowIdentity::from(db_type).ensure_supported(&data)?;
        let ids = row_indices
            .iter()
            .map(|&idx| row_identity(db_type, &data, idx))
            .collect::<ActionResult<Vec<_>>>()?;
        if ids.is_empty() {
            return Ok(ids);
        }

        self.api
            .delete_db_data(&table.db_connection_id, &table.schema, &table.name, &ids)
            .await?;
        log::info!("Deleted {} rows from {}.{}", ids.len(), table.schema, table.name);

        self.patch_query_data(tab_id, |data| {
            Some(row_patch::remove_rows(db_type, data, &ids))
        });
        Ok(ids)
    }

    /// Connection kind and cached result a row mutation works on
    fn editable_data(&self, tab_id: &str) -> ActionResult<(DbConnType, Arc<QueryData>)> {
        let state = self.state();
        let db_type = state
            .db_connection
            .db_connection
            .as_ref()
            .map(|c| c.db_type)
            .ok_or(ActionError::NoActiveConnection)?;
        let data = state
            .tab_cache
            .query_data(tab_id)
            .cloned()
            .ok_or_else(|| ActionError::NoQueryData(tab_id.to_string()))?;
        Ok((db_type, data))
    }

    /// Apply `patch` to the tab's current cached result
    ///
    /// The cache is read under the store lock, so a fetch that landed while
    /// the mutation was in flight is patched rather than overwritten.
    fn patch_query_data(&self, tab_id: &str, patch: impl FnOnce(&QueryData) -> Option<QueryData>) {
        self.store.dispatch_from(|state| {
            match state.tab_cache.query_data(tab_id).and_then(|data| patch(data)) {
                Some(next) => Action::TabCache(TabCacheAction::PatchQueryData {
                    tab_id: tab_id.to_string(),
                    data: Arc::new(next),
                }),
                None => {
                    log::debug!("Tab {} has no matching cached rows to patch", tab_id);
                    Action::None
                }
            }
        });
    }
}
