//! Addressing single rows for edits and deletes
//!
//! SQL result rows are keyed by column index (`"0"`, `"1"`, ...). Postgres
//! results carry the `ctid` system column at index 0, MySQL rows are
//! addressed by their primary key values, MongoDB documents by `_id`.

use deck_client::{DbConnType, QueryData, Row};
use serde_json::Value;

use crate::error::{ActionError, ActionResult};

/// Key of the Postgres row id inside a result row
pub const ROW_ID_KEY: &str = "0";
/// Column name of the Postgres row id
pub const CTID_COLUMN: &str = "ctid";
pub const DOCUMENT_ID_KEY: &str = "_id";

/// How the server expects a row to be identified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIdentity {
    Ctid,
    PrimaryKeys,
    DocumentId,
}

impl From<DbConnType> for RowIdentity {
    fn from(db_type: DbConnType) -> Self {
        match db_type {
            DbConnType::Postgres => Self::Ctid,
            DbConnType::Mysql => Self::PrimaryKeys,
            DbConnType::Mongo => Self::DocumentId,
        }
    }
}

impl RowIdentity {
    /// Fail early when rows of `data` cannot be addressed at all
    pub fn ensure_supported(&self, data: &QueryData) -> ActionResult<()> {
        match self {
            Self::PrimaryKeys if data.pkeys.as_ref().is_none_or(|k| k.is_empty()) => {
                Err(ActionError::PrimaryKeysRequired)
            }
            _ => Ok(()),
        }
    }

    /// Identity of a SQL row
    pub fn of_row(&self, data: &QueryData, row: &Row) -> Option<String> {
        match self {
            Self::Ctid => row.get(ROW_ID_KEY).filter(|v| !v.is_null()).map(value_key),
            Self::PrimaryKeys => {
                let pkeys = data.pkeys.as_ref().filter(|k| !k.is_empty())?;
                let keys: serde_json::Map<String, Value> = pkeys
                    .iter()
                    .map(|pkey| {
                        let value = data
                            .columns
                            .iter()
                            .position(|c| c == pkey)
                            .and_then(|idx| row.get(&idx.to_string()))
                            .cloned()
                            .unwrap_or(Value::Null);
                        (pkey.clone(), value)
                    })
                    .collect();
                Some(Value::Object(keys).to_string())
            }
            Self::DocumentId => row.get(DOCUMENT_ID_KEY).map(value_key),
        }
    }

    /// Identity of a MongoDB document
    pub fn of_document(document: &Value) -> Option<String> {
        document.get(DOCUMENT_ID_KEY).map(value_key)
    }
}

/// Identity of the row (or document) at `index`
pub fn row_identity(db_type: DbConnType, data: &QueryData, index: usize) -> ActionResult<String> {
    let identity = RowIdentity::from(db_type);
    identity.ensure_supported(data)?;

    let id = match identity {
        RowIdentity::DocumentId => data.data.get(index).and_then(RowIdentity::of_document),
        _ => data.rows.get(index).and_then(|row| identity.of_row(data, row)),
    };
    id.ok_or(ActionError::RowNotFound(index))
}

fn value_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sql_data(pkeys: Option<Vec<&str>>) -> QueryData {
        serde_json::from_value(json!({
            "columns": ["ctid", "id", "email"],
            "rows": [
                {"0": "(0,1)", "1": 7, "2": "a@example.com"},
                {"0": "(0,2)", "1": 8, "2": "b@example.com"}
            ],
            "pkeys": pkeys,
        }))
        .unwrap()
    }

    #[test]
    fn test_postgres_uses_ctid() {
        let data = sql_data(None);
        assert_eq!(row_identity(DbConnType::Postgres, &data, 1).unwrap(), "(0,2)");
    }

    #[test]
    fn test_mysql_uses_primary_key_json() {
        let data = sql_data(Some(vec!["id"]));
        assert_eq!(row_identity(DbConnType::Mysql, &data, 0).unwrap(), r#"{"id":7}"#);
    }

    #[test]
    fn test_mysql_without_primary_keys_is_rejected() {
        let data = sql_data(Some(vec![]));
        assert!(matches!(
            row_identity(DbConnType::Mysql, &data, 0),
            Err(ActionError::PrimaryKeysRequired)
        ));
        assert!(matches!(
            row_identity(DbConnType::Mysql, &sql_data(None), 0),
            Err(ActionError::PrimaryKeysRequired)
        ));
    }

    #[test]
    fn test_document_uses_id() {
        let data = QueryData {
            data: vec![json!({"_id": "64f0", "name": "ada"})],
            ..Default::default()
        };
        assert_eq!(row_identity(DbConnType::Mongo, &data, 0).unwrap(), "64f0");
        assert!(matches!(
            row_identity(DbConnType::Mongo, &data, 3),
            Err(ActionError::RowNotFound(3))
        ));
    }
}
