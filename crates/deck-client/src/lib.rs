//! Database workspace API client contract
//!
//! This crate describes the backend the workspace talks to without
//! committing to a transport. It provides:
//!
//! - the [`ApiClient`] trait, one async method per endpoint
//! - the response [`Envelope`] and its mapping to [`ApiResult`]
//! - the data transfer objects exchanged with the backend
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │              ApiClient trait             │
//! │  - get_tabs_by_db_connection()           │
//! │  - get_db_data_in_data_model()           │
//! │  - ...                                   │
//! └──────────────────────────────────────────┘
//!                      │ Envelope<T>
//!                      ▼
//!            ApiResult<T> = Result<T, ApiError>
//! ```

pub mod client;
pub mod envelope;
pub mod types;

pub use client::ApiClient;
pub use envelope::{ApiError, ApiResult, Envelope};
pub use types::{
    AddDataResponse, AddDbConnPayload, DataModel, DataModelField, DataModelIndex, DbConnType,
    DbConnection, DbQuery, DbQueryLog, HealthCheck, LoginResponse, Project, ProjectMember,
    QueryData, QueryLogPage, Role, RolePermission, Row, Tab, TabMetadata, TabType,
    UpdateSingleDataResponse, User, NEW_QUERY_ID, READ_ONLY_PERMISSION,
};
