//! Actions for the tab list.

use deck_client::Tab;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabAction {
    /// Replace all tabs (e.g. after loading them for a connection); the first becomes active
    SetAll(Vec<Tab>),

    /// Insert and activate a tab; a tab for the same view is activated instead
    Add(Tab),

    /// Replace a tab with the server's canonical version
    Update(Tab),

    /// Remove a tab and reassign the active tab if needed
    Delete(String),

    /// Activate a tab (or none); unknown ids are ignored
    SetActive(Option<String>),
}
