//! Actions for backend facts.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiAction {
    SetVersion(String),
}
