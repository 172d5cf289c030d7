//! Actions for per-tab fetched data.
//!
//! All of them are ignored when the addressed tab is not open.

use deck_client::{DataModel, DbQuery, QueryData};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum TabCacheAction {
    /// Store result data and clear the data fetch flag
    SetQueryData {
        tab_id: String,
        data: Option<Arc<QueryData>>,
    },

    /// Replace result data after a confirmed row mutation; fetch flags are kept
    PatchQueryData {
        tab_id: String,
        data: Arc<QueryData>,
    },

    /// Store a data model and clear the model fetch flag
    SetDataModel {
        tab_id: String,
        data_model: Option<Arc<DataModel>>,
    },

    SetFetchingData { tab_id: String, fetching: bool },

    SetFetchingModel { tab_id: String, fetching: bool },

    /// Saved query shown by a query tab
    SetDbQuery {
        tab_id: String,
        query: Option<DbQuery>,
    },
}

impl TabCacheAction {
    pub fn tab_id(&self) -> &str {
        match self {
            Self::SetQueryData { tab_id, .. }
            | Self::PatchQueryData { tab_id, .. }
            | Self::SetDataModel { tab_id, .. }
            | Self::SetFetchingData { tab_id, .. }
            | Self::SetFetchingModel { tab_id, .. }
            | Self::SetDbQuery { tab_id, .. } => tab_id,
        }
    }
}
