//! Errors returned by dispatcher operations

use deck_client::ApiError;
use thiserror::Error;

pub type ActionResult<T> = Result<T, ActionError>;

/// Why an operation did not complete
///
/// Validation and precondition errors are raised before any API call;
/// API errors carry the server message verbatim.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Project name cannot be empty")]
    EmptyProjectName,

    #[error("empty command")]
    EmptyCommand,

    #[error("empty query")]
    EmptyQuery,

    #[error("tab not open")]
    TabNotOpen,

    #[error("no active tab or db connection")]
    NoActiveTab,

    #[error("no active db connection")]
    NoActiveConnection,

    #[error("db connection {0} is not open")]
    ConnectionNotOpen(String),

    #[error("table has no primary keys, rows cannot be identified")]
    PrimaryKeysRequired,

    #[error("no data loaded for tab {0}")]
    NoQueryData(String),

    #[error("row {0} is not loaded")]
    RowNotFound(usize),

    #[error("column {0} does not exist")]
    ColumnNotFound(usize),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("storage error: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl ActionError {
    /// Rejected input, no request was made
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyProjectName | Self::EmptyCommand | Self::EmptyQuery
        )
    }

    /// The operation does not apply to the current state, no request was made
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::TabNotOpen
                | Self::NoActiveTab
                | Self::NoActiveConnection
                | Self::ConnectionNotOpen(_)
                | Self::PrimaryKeysRequired
                | Self::NoQueryData(_)
                | Self::RowNotFound(_)
                | Self::ColumnNotFound(_)
        )
    }
}
