//! Tab lifecycle: open (deduplicated), update, list, close, activate

use deck_client::{Tab, TabMetadata};

use super::{is_current_connection, ActionDispatcher};
use crate::actions::{Action, TabAction};
use crate::error::{ActionError, ActionResult};

/// Result of [`ActionDispatcher::create_tab`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabOpened {
    /// A tab for the same view was already open and is now active
    Activated(String),
    /// The backend created a new tab, now open and active
    Created(Tab),
    /// The backend created the tab but its connection was switched away
    /// from meanwhile; it is listed when that connection is reopened
    Detached(Tab),
}

impl TabOpened {
    pub fn tab_id(&self) -> &str {
        match self {
            Self::Activated(id) => id,
            Self::Created(tab) | Self::Detached(tab) => &tab.id,
        }
    }
}

impl ActionDispatcher {
    /// Open a tab for the view described by `metadata`
    ///
    /// An open tab showing the same view is activated without a request.
    /// Query tabs for an unsaved query (`"new"`) are always created.
    /// Fails with [`ActionError::ConnectionNotOpen`] when another
    /// connection is open.
    pub async fn create_tab(
        &self,
        db_conn_id: &str,
        metadata: TabMetadata,
    ) -> ActionResult<TabOpened> {
        let mut existing = None;
        self.store.dispatch_with(|state| {
            if !is_current_connection(state, db_conn_id) {
                return Err(ActionError::ConnectionNotOpen(db_conn_id.to_string()));
            }
            Ok(match state.tabs.find_matching(&metadata) {
                Some(tab) => {
                    existing = Some(tab.id.clone());
                    Action::Tab(TabAction::SetActive(Some(tab.id.clone())))
                }
                None => Action::None,
            })
        })?;
        if let Some(tab_id) = existing {
            log::debug!("Reusing open tab {} for {}", tab_id, metadata.tab_type());
            return Ok(TabOpened::Activated(tab_id));
        }

        let tab = self.api.create_tab(db_conn_id, &metadata).await?;
        if self.dispatch_for_connection(db_conn_id, Action::Tab(TabAction::Add(tab.clone()))) {
            Ok(TabOpened::Created(tab))
        } else {
            log::debug!("Connection {} closed while creating tab {}", db_conn_id, tab.id);
            Ok(TabOpened::Detached(tab))
        }
    }

    /// Persist new metadata for the active tab
    pub async fn update_active_tab(&self, metadata: TabMetadata) -> ActionResult<Tab> {
        let state = self.state();
        let (Some(tab_id), Some(db_conn_id)) = (
            state.tabs.active_tab_id.clone(),
            state.db_connection.connection_id().map(str::to_string),
        ) else {
            return Err(ActionError::NoActiveTab);
        };

        let tab = self.api.update_tab(&db_conn_id, &tab_id, &metadata).await?;
        self.dispatch(Action::Tab(TabAction::Update(tab.clone())));
        Ok(tab)
    }

    /// Load the persisted tabs of a connection; the first one becomes active
    pub async fn get_tabs(&self, db_conn_id: &str) -> ActionResult<Vec<Tab>> {
        let tabs = self.api.get_tabs_by_db_connection(db_conn_id).await?;
        self.dispatch_for_connection(db_conn_id, Action::Tab(TabAction::SetAll(tabs.clone())));
        Ok(tabs)
    }

    /// Close an open tab; the tab to its left becomes active
    pub async fn close_tab(&self, db_conn_id: &str, tab_id: &str) -> ActionResult<()> {
        if !self.state().tabs.contains(tab_id) {
            return Err(ActionError::TabNotOpen);
        }
        self.api.close_tab(db_conn_id, tab_id).await?;
        self.dispatch(Action::Tab(TabAction::Delete(tab_id.to_string())));
        Ok(())
    }

    pub fn set_active_tab(&self, tab_id: &str) {
        self.dispatch(Action::Tab(TabAction::SetActive(Some(tab_id.to_string()))));
    }
}
