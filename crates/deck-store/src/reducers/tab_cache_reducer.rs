//! Per-tab cache reducer
//!
//! Only the addressed tab's entry is replaced; the data and model fetch
//! flags are updated independently of each other.

use std::sync::Arc;

use super::update;
use crate::actions::TabCacheAction;
use crate::state::{DbQueryState, TabCacheEntry, TabCacheState, TabsState};

pub fn reduce_tab_cache(state: Arc<TabCacheState>, action: &TabCacheAction) -> Arc<TabCacheState> {
    let tab_id = action.tab_id();
    let current = state.get(tab_id).cloned().unwrap_or_default();

    let mut entry = (*current).clone();
    match action {
        TabCacheAction::SetQueryData { data, .. } => {
            entry.query_data = data.clone();
            entry.fetching.data = false;
        }
        TabCacheAction::PatchQueryData { data, .. } => {
            entry.query_data = Some(data.clone());
        }
        TabCacheAction::SetDataModel { data_model, .. } => {
            entry.data_model = data_model.clone();
            entry.fetching.model = false;
        }
        TabCacheAction::SetFetchingData { fetching, .. } => {
            if entry.fetching.data == *fetching && state.get(tab_id).is_some() {
                return state;
            }
            entry.fetching.data = *fetching;
        }
        TabCacheAction::SetFetchingModel { fetching, .. } => {
            if entry.fetching.model == *fetching && state.get(tab_id).is_some() {
                return state;
            }
            entry.fetching.model = *fetching;
        }
        TabCacheAction::SetDbQuery { .. } => return state,
    }

    log::debug!("Tab {} cache: fetching {:?}", tab_id, entry.fetching);
    let tab_id = tab_id.to_string();
    update(state, |s| {
        s.entries.insert(tab_id, Arc::new(entry));
    })
}

pub fn reduce_db_query(state: Arc<DbQueryState>, action: &TabCacheAction) -> Arc<DbQueryState> {
    let TabCacheAction::SetDbQuery { tab_id, query } = action else {
        return state;
    };
    if state.by_tab.get(tab_id) == query.as_ref() {
        return state;
    }
    update(state, |s| match query {
        Some(query) => {
            s.by_tab.insert(tab_id.clone(), query.clone());
        }
        None => {
            s.by_tab.remove(tab_id);
        }
    })
}

/// Drop cache entries of tabs that are no longer open
pub fn retain_open_tabs(state: Arc<TabCacheState>, tabs: &TabsState) -> Arc<TabCacheState> {
    if state.entries.keys().all(|id| tabs.contains(id)) {
        return state;
    }
    update(state, |s| s.entries.retain(|id, _| tabs.contains(id)))
}

/// Drop saved queries of tabs that are no longer open
pub fn retain_open_tab_queries(state: Arc<DbQueryState>, tabs: &TabsState) -> Arc<DbQueryState> {
    if state.by_tab.keys().all(|id| tabs.contains(id)) {
        return state;
    }
    update(state, |s| s.by_tab.retain(|id, _| tabs.contains(id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FetchFlags;
    use crate::testing::{query_data, tab};
    use deck_client::TabMetadata;

    fn fetching_data(tab_id: &str, fetching: bool) -> TabCacheAction {
        TabCacheAction::SetFetchingData {
            tab_id: tab_id.into(),
            fetching,
        }
    }

    #[test]
    fn test_fetch_flags_are_independent() {
        let state = Arc::new(TabCacheState::default());
        let state = reduce_tab_cache(state, &fetching_data("A", true));
        let state = reduce_tab_cache(
            state,
            &TabCacheAction::SetFetchingModel {
                tab_id: "A".into(),
                fetching: true,
            },
        );
        assert_eq!(
            state.fetching("A"),
            FetchFlags {
                data: true,
                model: true
            }
        );

        let state = reduce_tab_cache(
            state,
            &TabCacheAction::SetQueryData {
                tab_id: "A".into(),
                data: Some(Arc::new(query_data(3, Some(3)))),
            },
        );
        assert_eq!(
            state.fetching("A"),
            FetchFlags {
                data: false,
                model: true
            }
        );
        assert_eq!(state.query_data("A").map(|d| d.rows.len()), Some(3));
    }

    #[test]
    fn test_other_tabs_keep_their_entries() {
        let state = Arc::new(TabCacheState::default());
        let state = reduce_tab_cache(state, &fetching_data("A", true));
        let entry_a = state.get("A").cloned().unwrap();

        let state = reduce_tab_cache(state, &fetching_data("B", true));
        assert!(Arc::ptr_eq(&entry_a, state.get("A").unwrap()));
        assert!(state.fetching("B").data);
    }

    #[test]
    fn test_unchanged_flag_keeps_pointer() {
        let state = reduce_tab_cache(Arc::new(TabCacheState::default()), &fetching_data("A", true));
        let next = reduce_tab_cache(state.clone(), &fetching_data("A", true));
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_data_model_clears_only_model_flag() {
        let state = reduce_tab_cache(Arc::new(TabCacheState::default()), &fetching_data("A", true));
        let state = reduce_tab_cache(
            state,
            &TabCacheAction::SetDataModel {
                tab_id: "A".into(),
                data_model: None,
            },
        );
        assert_eq!(
            state.fetching("A"),
            FetchFlags {
                data: true,
                model: false
            }
        );
    }

    #[test]
    fn test_patch_keeps_in_flight_flag() {
        let state = reduce_tab_cache(Arc::new(TabCacheState::default()), &fetching_data("A", true));
        let state = reduce_tab_cache(
            state,
            &TabCacheAction::PatchQueryData {
                tab_id: "A".into(),
                data: Arc::new(query_data(1, Some(1))),
            },
        );
        assert!(state.fetching("A").data);
        assert_eq!(state.query_data("A").map(|d| d.rows.len()), Some(1));
    }

    #[test]
    fn test_retain_open_tabs() {
        let state = Arc::new(TabCacheState::default());
        let state = reduce_tab_cache(state, &fetching_data("A", true));
        let state = reduce_tab_cache(state, &fetching_data("B", true));

        let tabs = TabsState {
            tabs: vec![tab("A", TabMetadata::Blank)],
            active_tab_id: Some("A".into()),
        };
        let pruned = retain_open_tabs(state, &tabs);
        assert!(pruned.get("A").is_some());
        assert!(pruned.get("B").is_none());

        let again = retain_open_tabs(pruned.clone(), &tabs);
        assert!(Arc::ptr_eq(&pruned, &again));
    }
}
