use deck_client::{Tab, TabMetadata};

/// Open tabs of the current connection
///
/// `active_tab_id` is either `None` or the id of a tab in `tabs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabsState {
    pub tabs: Vec<Tab>,
    pub active_tab_id: Option<String>,
}

impl TabsState {
    pub fn find(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    pub fn position(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    pub fn contains(&self, tab_id: &str) -> bool {
        self.position(tab_id).is_some()
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab_id.as_deref().and_then(|id| self.find(id))
    }

    /// An open tab already showing the view described by `metadata`
    pub fn find_matching(&self, metadata: &TabMetadata) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.metadata.matches_view(metadata))
    }
}
