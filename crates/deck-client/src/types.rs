//! Database workspace API data transfer objects
//!
//! These types mirror the JSON shapes returned by the backend.
//! They are intentionally free of application state so the store
//! can build its own views on top of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString};

/// A single result row, keyed by column name (or column index for SQL results)
pub type Row = serde_json::Map<String, Value>;

/// An authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub is_root: bool,
}

/// Payload of a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
}

/// A project groups database connections and members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Membership of the current user, absent for root users browsing foreign projects
    #[serde(default)]
    pub current_member: Option<ProjectMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMember {
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<RolePermission>,
}

/// A named boolean permission attached to a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePermission {
    pub name: String,
    pub value: bool,
}

impl Role {
    /// Whether the named permission is granted
    pub fn has_permission(&self, name: &str) -> bool {
        self.permissions.iter().any(|p| p.name == name && p.value)
    }
}

/// Permission name marking a member as read-only
pub const READ_ONLY_PERMISSION: &str = "READ_ONLY";

/// Kind of database behind a connection
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum DbConnType {
    Postgres,
    Mysql,
    Mongo,
}

impl DbConnType {
    /// SQL engines return rows keyed by column index; MongoDB returns documents
    pub fn is_sql(&self) -> bool {
        matches!(self, Self::Postgres | Self::Mysql)
    }
}

/// A configured connection to a target database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbConnection {
    pub id: String,
    pub name: String,
    pub project_id: String,
    #[serde(rename = "type")]
    pub db_type: DbConnType,
}

/// Parameters for registering (or testing) a new connection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDbConnPayload {
    pub project_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub db_type: String,
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
    pub db_name: String,
    /// `NONE`, `PASSWORD` or `KEYFILE`
    pub use_ssh: String,
    pub ssh_host: String,
    pub ssh_user: String,
    pub ssh_password: String,
    pub ssh_key_file: String,
    pub use_ssl: bool,
}

/// Column description of a table or collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataModelField {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub is_nullable: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataModelIndex {
    pub name: String,
    #[serde(default)]
    pub index_def: String,
}

/// Schema description of a table (SQL) or collection (MongoDB)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataModel {
    #[serde(default)]
    pub schema_name: Option<String>,
    pub name: String,
    #[serde(default)]
    pub fields: Option<Vec<DataModelField>>,
    #[serde(default)]
    pub indexes: Option<Vec<DataModelIndex>>,
}

/// A saved query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbQuery {
    pub id: String,
    pub name: String,
    pub query: String,
    pub db_connection_id: String,
}

/// One executed query in the connection history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbQueryLog {
    pub id: String,
    pub query: String,
    pub db_connection_id: String,
    pub created_at: DateTime<Utc>,
}

/// A page of history plus the cursor for the next page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryLogPage {
    pub list: Vec<DbQueryLog>,
    #[serde(default)]
    pub next: Option<i64>,
}

/// Result set of a data fetch or a query run
///
/// SQL engines fill `columns` and `rows`, MongoDB fills `data` with documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryData {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Row>,
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub pkeys: Option<Vec<String>>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of a row insert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDataResponse {
    pub new_id: String,
    /// The inserted row as stored by the server, when the engine returns it
    #[serde(default)]
    pub data: Option<Row>,
}

/// Response of a single-cell update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSingleDataResponse {
    /// Refreshed Postgres row id; updating a row moves it to a new tuple
    #[serde(default)]
    pub ctid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub version: String,
}

/// The kind of view a tab shows
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum TabType {
    Blank,
    History,
    Data,
    Model,
    Query,
    Console,
    GenSql,
}

/// Tab payload, one variant per [`TabType`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabMetadata {
    Blank,
    History,
    Data {
        schema: String,
        name: String,
    },
    Model {
        schema: String,
        name: String,
    },
    Query {
        query_id: String,
        query_name: Option<String>,
        query: String,
    },
    Console,
    GenSql,
}

/// Query id used by tabs holding an unsaved query
pub const NEW_QUERY_ID: &str = "new";

impl TabMetadata {
    pub fn tab_type(&self) -> TabType {
        match self {
            Self::Blank => TabType::Blank,
            Self::History => TabType::History,
            Self::Data { .. } => TabType::Data,
            Self::Model { .. } => TabType::Model,
            Self::Query { .. } => TabType::Query,
            Self::Console => TabType::Console,
            Self::GenSql => TabType::GenSql,
        }
    }

    /// A fresh, unsaved query tab
    pub fn new_query(query: impl Into<String>) -> Self {
        Self::Query {
            query_id: NEW_QUERY_ID.to_string(),
            query_name: None,
            query: query.into(),
        }
    }

    /// Whether `other` describes the same logical view as `self`
    ///
    /// Data and model tabs match on schema and name, query tabs on a saved
    /// query id (`"new"` never matches), every other kind is a singleton.
    pub fn matches_view(&self, other: &TabMetadata) -> bool {
        match (self, other) {
            (
                Self::Data { schema, name },
                Self::Data {
                    schema: other_schema,
                    name: other_name,
                },
            )
            | (
                Self::Model { schema, name },
                Self::Model {
                    schema: other_schema,
                    name: other_name,
                },
            ) => schema == other_schema && name == other_name,
            (Self::Query { query_id, .. }, Self::Query { query_id: other, .. }) => {
                query_id != NEW_QUERY_ID && query_id == other
            }
            _ => self.tab_type() == other.tab_type(),
        }
    }
}

/// An open tab as persisted by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TabWire", into = "TabWire")]
pub struct Tab {
    pub id: String,
    pub db_connection_id: String,
    pub metadata: TabMetadata,
}

impl Tab {
    pub fn tab_type(&self) -> TabType {
        self.metadata.tab_type()
    }
}

/// Flat wire form: every metadata field is optional and `type` selects which apply
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TabWire {
    id: String,
    db_connection_id: String,
    #[serde(rename = "type")]
    tab_type: String,
    #[serde(default)]
    metadata: TabWireMetadata,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TabWireMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    query_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    query_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    query: Option<String>,
}

impl TryFrom<TabWire> for Tab {
    type Error = String;

    fn try_from(wire: TabWire) -> Result<Self, Self::Error> {
        let tab_type: TabType = wire
            .tab_type
            .parse()
            .map_err(|_| format!("unknown tab type: {}", wire.tab_type))?;
        let meta = wire.metadata;
        let metadata = match tab_type {
            TabType::Blank => TabMetadata::Blank,
            TabType::History => TabMetadata::History,
            TabType::Console => TabMetadata::Console,
            TabType::GenSql => TabMetadata::GenSql,
            TabType::Data => TabMetadata::Data {
                schema: meta.schema.unwrap_or_default(),
                name: meta.name.unwrap_or_default(),
            },
            TabType::Model => TabMetadata::Model {
                schema: meta.schema.unwrap_or_default(),
                name: meta.name.unwrap_or_default(),
            },
            TabType::Query => TabMetadata::Query {
                query_id: meta.query_id.unwrap_or_default(),
                query_name: meta.query_name.filter(|n| !n.is_empty()),
                query: meta.query.unwrap_or_default(),
            },
        };
        Ok(Tab {
            id: wire.id,
            db_connection_id: wire.db_connection_id,
            metadata,
        })
    }
}

impl From<Tab> for TabWire {
    fn from(tab: Tab) -> Self {
        let tab_type = tab.tab_type().to_string();
        let metadata = match tab.metadata {
            TabMetadata::Data { schema, name } | TabMetadata::Model { schema, name } => {
                TabWireMetadata {
                    schema: Some(schema),
                    name: Some(name),
                    ..Default::default()
                }
            }
            TabMetadata::Query {
                query_id,
                query_name,
                query,
            } => TabWireMetadata {
                query_id: Some(query_id),
                query_name,
                query: Some(query),
                ..Default::default()
            },
            _ => TabWireMetadata::default(),
        };
        TabWire {
            id: tab.id,
            db_connection_id: tab.db_connection_id,
            tab_type,
            metadata,
        }
    }
}
