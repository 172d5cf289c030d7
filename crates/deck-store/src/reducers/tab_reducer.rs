//! Tab Reducer
//!
//! Maintains the tab list and the active tab pointer. After every transition
//! `active_tab_id` is `None` or the id of an open tab.

use std::sync::Arc;

use super::update;
use crate::actions::TabAction;
use crate::state::TabsState;

pub fn reduce_tabs(state: Arc<TabsState>, action: &TabAction) -> Arc<TabsState> {
    match action {
        TabAction::SetAll(tabs) => {
            let active_tab_id = tabs.first().map(|t| t.id.clone());
            log::debug!(
                "Loaded {} tabs, active tab: {:?}",
                tabs.len(),
                active_tab_id
            );
            Arc::new(TabsState {
                tabs: tabs.clone(),
                active_tab_id,
            })
        }

        TabAction::Add(tab) => {
            let existing = state
                .find(&tab.id)
                .or_else(|| state.find_matching(&tab.metadata))
                .map(|t| t.id.clone());

            match existing {
                Some(id) if state.active_tab_id.as_deref() == Some(id.as_str()) => state,
                Some(id) => {
                    log::debug!("Tab for {} already open, activating {}", tab.tab_type(), id);
                    update(state, |s| s.active_tab_id = Some(id))
                }
                None => {
                    log::debug!("Adding {} tab {}", tab.tab_type(), tab.id);
                    update(state, |s| {
                        s.active_tab_id = Some(tab.id.clone());
                        s.tabs.push(tab.clone());
                    })
                }
            }
        }

        TabAction::Update(tab) => {
            let Some(idx) = state.position(&tab.id) else {
                log::warn!("Update: tab {} is not open", tab.id);
                return state;
            };
            if state.tabs[idx] == *tab {
                return state;
            }
            update(state, |s| s.tabs[idx] = tab.clone())
        }

        TabAction::Delete(tab_id) => {
            let Some(idx) = state.position(tab_id) else {
                log::debug!("Delete: tab {} is not open", tab_id);
                return state;
            };
            update(state, |s| {
                s.tabs.remove(idx);
                if s.active_tab_id.as_deref() == Some(tab_id.as_str()) {
                    // prefer the tab to the left, else the new first tab
                    s.active_tab_id = s
                        .tabs
                        .get(idx.saturating_sub(1))
                        .map(|t| t.id.clone());
                }
                log::debug!(
                    "Closed tab {}, active tab now {:?}",
                    tab_id,
                    s.active_tab_id
                );
            })
        }

        TabAction::SetActive(tab_id) => {
            if state.active_tab_id == *tab_id {
                return state;
            }
            if let Some(id) = tab_id {
                if !state.contains(id) {
                    log::warn!("SetActive: tab {} is not open", id);
                    return state;
                }
            }
            update(state, |s| s.active_tab_id = tab_id.clone())
        }
    }
}
