//! Fixtures and a scripted API client shared by the unit tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use deck_client::{
    AddDataResponse, AddDbConnPayload, ApiClient, ApiError, ApiResult, DataModel, DbConnType,
    DbConnection, DbQuery, DbQueryLog, HealthCheck, LoginResponse, Project, ProjectMember,
    QueryData, QueryLogPage, Role, RolePermission, Row, Tab, TabMetadata,
    UpdateSingleDataResponse, User, READ_ONLY_PERMISSION,
};
use deck_config::{AppConfig, MemoryStorage};
use serde_json::{json, Value};
use tokio::sync::Notify;

use crate::dispatcher::ActionDispatcher;
use crate::store::Store;

pub fn tab(id: &str, metadata: TabMetadata) -> Tab {
    Tab {
        id: id.to_string(),
        db_connection_id: "c1".to_string(),
        metadata,
    }
}

pub fn data_tab(id: &str, schema: &str, name: &str) -> Tab {
    tab(
        id,
        TabMetadata::Data {
            schema: schema.to_string(),
            name: name.to_string(),
        },
    )
}

pub fn query_tab(id: &str, query_id: &str) -> Tab {
    tab(
        id,
        TabMetadata::Query {
            query_id: query_id.to_string(),
            query_name: None,
            query: "select 1".to_string(),
        },
    )
}

/// Postgres-shaped result with `rows` rows, row ids `(0,1)`, `(0,2)`, ...
pub fn query_data(rows: usize, count: Option<u64>) -> QueryData {
    QueryData {
        columns: vec!["ctid".to_string(), "id".to_string()],
        rows: (1..=rows)
            .map(|i| {
                let mut row = Row::new();
                row.insert("0".to_string(), Value::String(format!("(0,{})", i)));
                row.insert("1".to_string(), json!(i));
                row
            })
            .collect(),
        count,
        ..Default::default()
    }
}

/// Connection in project `p1`
pub fn connection(id: &str, db_type: DbConnType) -> DbConnection {
    DbConnection {
        id: id.to_string(),
        name: format!("{} db", id),
        project_id: "p1".to_string(),
        db_type,
    }
}

pub fn data_model(schema: &str, name: &str) -> DataModel {
    DataModel {
        schema_name: Some(schema.to_string()),
        name: name.to_string(),
        fields: None,
        indexes: None,
    }
}

pub fn db_query(id: &str, db_connection_id: &str) -> DbQuery {
    DbQuery {
        id: id.to_string(),
        name: format!("query {}", id),
        query: "select 1".to_string(),
        db_connection_id: db_connection_id.to_string(),
    }
}

pub fn query_log(id: &str) -> DbQueryLog {
    DbQueryLog {
        id: id.to_string(),
        query: "select 1".to_string(),
        db_connection_id: "c1".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
    }
}

/// Project whose member role carries `READ_ONLY = read_only`, no membership for `None`
pub fn project(id: &str, read_only: Option<bool>) -> Project {
    Project {
        id: id.to_string(),
        name: format!("project {}", id),
        current_member: read_only.map(|value| ProjectMember {
            role: Role {
                id: "r1".to_string(),
                name: "member".to_string(),
                permissions: vec![RolePermission {
                    name: READ_ONLY_PERMISSION.to_string(),
                    value,
                }],
            },
        }),
    }
}

pub fn user(id: &str) -> User {
    User {
        id: id.to_string(),
        email: format!("{}@example.com", id),
        name: None,
        profile_image_url: None,
        is_root: false,
    }
}

/// Scripted [`ApiClient`]
///
/// Counts calls per method, fails methods on request and can hold a
/// method until its gate is opened.
pub struct MockApiClient {
    calls: Mutex<HashMap<&'static str, usize>>,
    failures: Mutex<HashMap<&'static str, String>>,
    gates: Mutex<HashMap<&'static str, Arc<Notify>>>,
    next_tab: Mutex<usize>,
    pub authenticated: Mutex<bool>,
    pub projects: Mutex<Vec<Project>>,
    pub db_connections: Mutex<Vec<DbConnection>>,
    pub data_models: Mutex<Vec<DataModel>>,
    pub queries: Mutex<Vec<DbQuery>>,
    pub tabs: Mutex<Vec<Tab>>,
    pub query_data: Mutex<QueryData>,
    pub add_response: Mutex<AddDataResponse>,
    pub update_response: Mutex<UpdateSingleDataResponse>,
    pub history: Mutex<QueryLogPage>,
    pub history_cursors: Mutex<Vec<Option<i64>>>,
}

impl Default for MockApiClient {
    fn default() -> Self {
        Self {
            calls: Mutex::default(),
            failures: Mutex::default(),
            gates: Mutex::default(),
            next_tab: Mutex::new(0),
            authenticated: Mutex::new(true),
            projects: Mutex::default(),
            db_connections: Mutex::default(),
            data_models: Mutex::default(),
            queries: Mutex::default(),
            tabs: Mutex::default(),
            query_data: Mutex::new(query_data(2, Some(2))),
            add_response: Mutex::new(AddDataResponse {
                new_id: "(0,9)".to_string(),
                data: None,
            }),
            update_response: Mutex::default(),
            history: Mutex::new(QueryLogPage {
                list: vec![],
                next: None,
            }),
            history_cursors: Mutex::default(),
        }
    }
}

impl MockApiClient {
    pub fn calls(&self, method: &str) -> usize {
        self.calls.lock().unwrap().get(method).copied().unwrap_or(0)
    }

    pub fn fail(&self, method: &'static str, message: &str) {
        self.failures
            .lock()
            .unwrap()
            .insert(method, message.to_string());
    }

    /// Hold every call of `method` until the returned gate is notified
    pub fn hold(&self, method: &'static str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates.lock().unwrap().insert(method, gate.clone());
        gate
    }

    async fn enter(&self, method: &'static str) -> ApiResult<()> {
        *self.calls.lock().unwrap().entry(method).or_default() += 1;
        let gate = self.gates.lock().unwrap().get(method).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        match self.failures.lock().unwrap().get(method) {
            Some(message) => Err(ApiError::Server(message.clone())),
            None => Ok(()),
        }
    }
}

fn get<T: Clone>(value: &Mutex<T>) -> T {
    value.lock().unwrap().clone()
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn login_user(&self, email: &str, _password: &str) -> ApiResult<LoginResponse> {
        self.enter("login_user").await?;
        Ok(LoginResponse {
            user: User {
                email: email.to_string(),
                ..user("u1")
            },
        })
    }

    async fn is_user_authenticated(&self) -> bool {
        self.enter("is_user_authenticated").await.is_ok() && get(&self.authenticated)
    }

    async fn edit_user(&self, name: &str, profile_image_url: &str) -> ApiResult<User> {
        self.enter("edit_user").await?;
        Ok(User {
            name: Some(name.to_string()),
            profile_image_url: Some(profile_image_url.to_string()),
            ..user("u1")
        })
    }

    async fn logout_user(&self) -> ApiResult<()> {
        self.enter("logout_user").await
    }

    async fn get_projects(&self) -> ApiResult<Vec<Project>> {
        self.enter("get_projects").await?;
        Ok(get(&self.projects))
    }

    async fn create_new_project(&self, name: &str) -> ApiResult<Project> {
        self.enter("create_new_project").await?;
        Ok(Project {
            name: name.to_string(),
            ..project("p-new", None)
        })
    }

    async fn delete_project(&self, _project_id: &str) -> ApiResult<()> {
        self.enter("delete_project").await
    }

    async fn get_db_connections_by_project(
        &self,
        _project_id: &str,
    ) -> ApiResult<Vec<DbConnection>> {
        self.enter("get_db_connections_by_project").await?;
        Ok(get(&self.db_connections))
    }

    async fn delete_db_connection(&self, _db_conn_id: &str) -> ApiResult<()> {
        self.enter("delete_db_connection").await
    }

    async fn get_all_db_connections(&self) -> ApiResult<Vec<DbConnection>> {
        self.enter("get_all_db_connections").await?;
        Ok(get(&self.db_connections))
    }

    async fn add_new_db_conn(
        &self,
        payload: &AddDbConnPayload,
        _is_test: bool,
    ) -> ApiResult<DbConnection> {
        self.enter("add_new_db_conn").await?;
        Ok(DbConnection {
            name: payload.name.clone(),
            ..connection("c-new", DbConnType::Postgres)
        })
    }

    async fn get_single_db_connection(&self, db_conn_id: &str) -> ApiResult<DbConnection> {
        self.enter("get_single_db_connection").await?;
        Ok(connection(db_conn_id, DbConnType::Postgres))
    }

    async fn check_connection(&self, _db_conn_id: &str) -> ApiResult<()> {
        self.enter("check_connection").await
    }

    async fn get_db_data_models_by_connection_id(
        &self,
        _db_conn_id: &str,
    ) -> ApiResult<Vec<DataModel>> {
        self.enter("get_db_data_models_by_connection_id").await?;
        Ok(get(&self.data_models))
    }

    async fn get_db_single_data_model(
        &self,
        _db_conn_id: &str,
        schema: &str,
        name: &str,
    ) -> ApiResult<DataModel> {
        self.enter("get_db_single_data_model").await?;
        Ok(data_model(schema, name))
    }

    async fn add_db_single_data_model_field(
        &self,
        _db_conn_id: &str,
        _schema: &str,
        _name: &str,
        _field_name: &str,
        _data_type: &str,
    ) -> ApiResult<()> {
        self.enter("add_db_single_data_model_field").await
    }

    async fn delete_db_single_data_model_field(
        &self,
        _db_conn_id: &str,
        _schema: &str,
        _name: &str,
        _field_name: &str,
    ) -> ApiResult<()> {
        self.enter("delete_db_single_data_model_field").await
    }

    async fn add_db_single_data_model_index(
        &self,
        _db_conn_id: &str,
        _schema: &str,
        _name: &str,
        _index_name: &str,
        _field_names: &[String],
        _is_unique: bool,
    ) -> ApiResult<()> {
        self.enter("add_db_single_data_model_index").await
    }

    async fn delete_db_single_data_model_index(
        &self,
        _db_conn_id: &str,
        _schema: &str,
        _name: &str,
        _index_name: &str,
    ) -> ApiResult<()> {
        self.enter("delete_db_single_data_model_index").await
    }

    async fn get_db_data_in_data_model(
        &self,
        _db_conn_id: &str,
        _schema: &str,
        _name: &str,
        _limit: u64,
        _offset: u64,
        _is_first_fetch: bool,
        _filter: Option<&[String]>,
        _sort: Option<&[String]>,
    ) -> ApiResult<QueryData> {
        self.enter("get_db_data_in_data_model").await?;
        Ok(get(&self.query_data))
    }

    async fn add_db_data(
        &self,
        _db_conn_id: &str,
        _schema: &str,
        _name: &str,
        _data: &Row,
    ) -> ApiResult<AddDataResponse> {
        self.enter("add_db_data").await?;
        Ok(get(&self.add_response))
    }

    async fn update_db_single_data(
        &self,
        _db_conn_id: &str,
        _schema: &str,
        _name: &str,
        _id: &str,
        _column_name: &str,
        _value: &Value,
    ) -> ApiResult<UpdateSingleDataResponse> {
        self.enter("update_db_single_data").await?;
        Ok(get(&self.update_response))
    }

    async fn delete_db_data(
        &self,
        _db_conn_id: &str,
        _schema: &str,
        _name: &str,
        _ids: &[String],
    ) -> ApiResult<()> {
        self.enter("delete_db_data").await
    }

    async fn get_db_queries_in_db_conn(&self, _db_conn_id: &str) -> ApiResult<Vec<DbQuery>> {
        self.enter("get_db_queries_in_db_conn").await?;
        Ok(get(&self.queries))
    }

    async fn get_single_db_query(&self, query_id: &str) -> ApiResult<DbQuery> {
        self.enter("get_single_db_query").await?;
        Ok(db_query(query_id, "c1"))
    }

    async fn save_db_query(
        &self,
        db_conn_id: &str,
        name: &str,
        query: &str,
        query_id: &str,
    ) -> ApiResult<DbQuery> {
        self.enter("save_db_query").await?;
        let id = if query_id == deck_client::NEW_QUERY_ID {
            "q-new"
        } else {
            query_id
        };
        Ok(DbQuery {
            id: id.to_string(),
            name: name.to_string(),
            query: query.to_string(),
            db_connection_id: db_conn_id.to_string(),
        })
    }

    async fn delete_db_query(&self, _query_id: &str) -> ApiResult<()> {
        self.enter("delete_db_query").await
    }

    async fn run_query(&self, _db_conn_id: &str, _query: &str) -> ApiResult<QueryData> {
        self.enter("run_query").await?;
        Ok(get(&self.query_data))
    }

    async fn get_db_history(
        &self,
        _db_conn_id: &str,
        before: Option<i64>,
    ) -> ApiResult<QueryLogPage> {
        self.history_cursors.lock().unwrap().push(before);
        self.enter("get_db_history").await?;
        Ok(get(&self.history))
    }

    async fn get_tabs_by_db_connection(&self, _db_conn_id: &str) -> ApiResult<Vec<Tab>> {
        self.enter("get_tabs_by_db_connection").await?;
        Ok(get(&self.tabs))
    }

    async fn create_tab(&self, db_conn_id: &str, metadata: &TabMetadata) -> ApiResult<Tab> {
        self.enter("create_tab").await?;
        let id = {
            let mut next = self.next_tab.lock().unwrap();
            *next += 1;
            format!("T{}", *next)
        };
        Ok(Tab {
            id,
            db_connection_id: db_conn_id.to_string(),
            metadata: metadata.clone(),
        })
    }

    async fn update_tab(
        &self,
        db_conn_id: &str,
        tab_id: &str,
        metadata: &TabMetadata,
    ) -> ApiResult<Tab> {
        self.enter("update_tab").await?;
        Ok(Tab {
            id: tab_id.to_string(),
            db_connection_id: db_conn_id.to_string(),
            metadata: metadata.clone(),
        })
    }

    async fn close_tab(&self, _db_conn_id: &str, _tab_id: &str) -> ApiResult<()> {
        self.enter("close_tab").await
    }

    async fn run_console_command(&self, _db_conn_id: &str, cmd: &str) -> ApiResult<String> {
        self.enter("run_console_command").await?;
        Ok(format!("ran {}", cmd))
    }

    async fn get_health_check(&self) -> ApiResult<HealthCheck> {
        self.enter("get_health_check").await?;
        Ok(HealthCheck {
            version: "1.2.3".to_string(),
        })
    }
}

/// Dispatcher over a fresh store, the mock API and in-memory storage
pub fn dispatcher() -> (ActionDispatcher, Arc<MockApiClient>, Arc<MemoryStorage>) {
    let api = Arc::new(MockApiClient::default());
    let storage = Arc::new(MemoryStorage::new());
    let dispatcher = ActionDispatcher::new(
        Arc::new(Store::default()),
        api.clone(),
        storage.clone(),
        AppConfig::default(),
    );
    (dispatcher, api, storage)
}
