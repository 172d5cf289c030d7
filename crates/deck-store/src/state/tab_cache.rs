use deck_client::{DataModel, DbQuery, QueryData};
use std::collections::HashMap;
use std::sync::Arc;

/// In-flight markers of one tab; the two kinds are independent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchFlags {
    pub data: bool,
    pub model: bool,
}

/// What was fetched for one tab
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabCacheEntry {
    pub query_data: Option<Arc<QueryData>>,
    pub data_model: Option<Arc<DataModel>>,
    pub fetching: FetchFlags,
}

/// Per-tab fetched data, keyed by tab id
///
/// Entries are created lazily and only exist for open tabs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabCacheState {
    pub entries: HashMap<String, Arc<TabCacheEntry>>,
}

impl TabCacheState {
    pub fn get(&self, tab_id: &str) -> Option<&Arc<TabCacheEntry>> {
        self.entries.get(tab_id)
    }

    pub fn fetching(&self, tab_id: &str) -> FetchFlags {
        self.get(tab_id).map(|e| e.fetching).unwrap_or_default()
    }

    pub fn query_data(&self, tab_id: &str) -> Option<&Arc<QueryData>> {
        self.get(tab_id).and_then(|e| e.query_data.as_ref())
    }
}

/// Saved query shown by each query tab
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DbQueryState {
    pub by_tab: HashMap<String, DbQuery>,
}
