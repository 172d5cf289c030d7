//! API client trait
//!
//! `ApiClient` is the only door to the backend. Implementations translate
//! the wire envelope into [`ApiResult`] so callers can propagate with `?`
//! and surface the server's error string verbatim.

use crate::envelope::ApiResult;
use crate::types::{
    AddDataResponse, AddDbConnPayload, DataModel, DbConnection, DbQuery, HealthCheck,
    LoginResponse, Project, QueryData, QueryLogPage, Row, Tab, TabMetadata,
    UpdateSingleDataResponse, User,
};
use async_trait::async_trait;

/// Database workspace API client
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single client can be shared
/// by every action running on the runtime.
///
/// # Example
///
/// ```rust,ignore
/// use deck_client::{ApiClient, ApiResult, Tab};
///
/// async fn open_tabs(client: &dyn ApiClient, conn_id: &str) -> ApiResult<Vec<Tab>> {
///     client.get_tabs_by_db_connection(conn_id).await
/// }
/// ```
#[async_trait]
pub trait ApiClient: Send + Sync {
    // Users

    async fn login_user(&self, email: &str, password: &str) -> ApiResult<LoginResponse>;

    /// Whether the transport still holds a valid session
    async fn is_user_authenticated(&self) -> bool;

    async fn edit_user(&self, name: &str, profile_image_url: &str) -> ApiResult<User>;

    async fn logout_user(&self) -> ApiResult<()>;

    // Projects

    async fn get_projects(&self) -> ApiResult<Vec<Project>>;

    async fn create_new_project(&self, name: &str) -> ApiResult<Project>;

    async fn delete_project(&self, project_id: &str) -> ApiResult<()>;

    async fn get_db_connections_by_project(&self, project_id: &str)
        -> ApiResult<Vec<DbConnection>>;

    async fn delete_db_connection(&self, db_conn_id: &str) -> ApiResult<()>;

    // Connections

    async fn get_all_db_connections(&self) -> ApiResult<Vec<DbConnection>>;

    /// Register a connection, or only test it when `is_test` is set
    async fn add_new_db_conn(
        &self,
        payload: &AddDbConnPayload,
        is_test: bool,
    ) -> ApiResult<DbConnection>;

    async fn get_single_db_connection(&self, db_conn_id: &str) -> ApiResult<DbConnection>;

    async fn check_connection(&self, db_conn_id: &str) -> ApiResult<()>;

    // Data models

    async fn get_db_data_models_by_connection_id(
        &self,
        db_conn_id: &str,
    ) -> ApiResult<Vec<DataModel>>;

    async fn get_db_single_data_model(
        &self,
        db_conn_id: &str,
        schema: &str,
        name: &str,
    ) -> ApiResult<DataModel>;

    async fn add_db_single_data_model_field(
        &self,
        db_conn_id: &str,
        schema: &str,
        name: &str,
        field_name: &str,
        data_type: &str,
    ) -> ApiResult<()>;

    async fn delete_db_single_data_model_field(
        &self,
        db_conn_id: &str,
        schema: &str,
        name: &str,
        field_name: &str,
    ) -> ApiResult<()>;

    async fn add_db_single_data_model_index(
        &self,
        db_conn_id: &str,
        schema: &str,
        name: &str,
        index_name: &str,
        field_names: &[String],
        is_unique: bool,
    ) -> ApiResult<()>;

    async fn delete_db_single_data_model_index(
        &self,
        db_conn_id: &str,
        schema: &str,
        name: &str,
        index_name: &str,
    ) -> ApiResult<()>;

    // Data

    /// Fetch one page of a table or collection
    ///
    /// `is_first_fetch` asks the server to also compute the total `count`.
    #[allow(clippy::too_many_arguments)]
    async fn get_db_data_in_data_model(
        &self,
        db_conn_id: &str,
        schema: &str,
        name: &str,
        limit: u64,
        offset: u64,
        is_first_fetch: bool,
        filter: Option<&[String]>,
        sort: Option<&[String]>,
    ) -> ApiResult<QueryData>;

    async fn add_db_data(
        &self,
        db_conn_id: &str,
        schema: &str,
        name: &str,
        data: &Row,
    ) -> ApiResult<AddDataResponse>;

    #[allow(clippy::too_many_arguments)]
    async fn update_db_single_data(
        &self,
        db_conn_id: &str,
        schema: &str,
        name: &str,
        id: &str,
        column_name: &str,
        value: &serde_json::Value,
    ) -> ApiResult<UpdateSingleDataResponse>;

    async fn delete_db_data(
        &self,
        db_conn_id: &str,
        schema: &str,
        name: &str,
        ids: &[String],
    ) -> ApiResult<()>;

    // Queries

    async fn get_db_queries_in_db_conn(&self, db_conn_id: &str) -> ApiResult<Vec<DbQuery>>;

    async fn get_single_db_query(&self, query_id: &str) -> ApiResult<DbQuery>;

    /// Create (`query_id == "new"`) or update a saved query
    async fn save_db_query(
        &self,
        db_conn_id: &str,
        name: &str,
        query: &str,
        query_id: &str,
    ) -> ApiResult<DbQuery>;

    async fn delete_db_query(&self, query_id: &str) -> ApiResult<()>;

    async fn run_query(&self, db_conn_id: &str, query: &str) -> ApiResult<QueryData>;

    // History

    /// Fetch executed queries older than `before` (newest first when `None`)
    async fn get_db_history(&self, db_conn_id: &str, before: Option<i64>)
        -> ApiResult<QueryLogPage>;

    // Tabs

    async fn get_tabs_by_db_connection(&self, db_conn_id: &str) -> ApiResult<Vec<Tab>>;

    async fn create_tab(&self, db_conn_id: &str, metadata: &TabMetadata) -> ApiResult<Tab>;

    async fn update_tab(
        &self,
        db_conn_id: &str,
        tab_id: &str,
        metadata: &TabMetadata,
    ) -> ApiResult<Tab>;

    async fn close_tab(&self, db_conn_id: &str, tab_id: &str) -> ApiResult<()>;

    // Console

    async fn run_console_command(&self, db_conn_id: &str, cmd: &str) -> ApiResult<String>;

    // Misc

    async fn get_health_check(&self) -> ApiResult<HealthCheck>;
}
