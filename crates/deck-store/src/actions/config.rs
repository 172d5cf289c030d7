//! Actions for UI preferences.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    SetShowingSidebar(bool),
}
