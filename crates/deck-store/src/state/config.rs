/// UI preferences mirrored from storage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigState {
    pub is_showing_sidebar: Option<bool>,
}

/// Facts about the backend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiState {
    pub version: String,
}
