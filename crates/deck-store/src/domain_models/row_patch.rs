//! Applying confirmed single-row mutations to cached result data
//!
//! Each function returns a new `QueryData`; the cached one is never
//! modified in place.

use deck_client::{AddDataResponse, DbConnType, QueryData, Row};
use serde_json::Value;

use super::row_identity::{RowIdentity, CTID_COLUMN, DOCUMENT_ID_KEY, ROW_ID_KEY};

/// Prepend a freshly inserted row
///
/// `input` is keyed by column name (or is the document for MongoDB).
pub fn prepend_added_row(
    db_type: DbConnType,
    data: &QueryData,
    input: &Row,
    response: &AddDataResponse,
) -> QueryData {
    let mut next = data.clone();

    if db_type == DbConnType::Mongo {
        let mut document = Row::new();
        document.insert(DOCUMENT_ID_KEY.to_string(), Value::String(response.new_id.clone()));
        document.extend(input.clone());
        next.data.insert(0, Value::Object(document));
        return next;
    }

    let row = match (&response.data, db_type) {
        (Some(stored), DbConnType::Postgres) => {
            let mut row = stored.clone();
            row.insert(ROW_ID_KEY.to_string(), Value::String(response.new_id.clone()));
            row
        }
        _ => {
            let mut named = input.clone();
            named.insert(CTID_COLUMN.to_string(), Value::String(response.new_id.clone()));
            for (idx, column) in data.columns.iter().enumerate() {
                let value = named.remove(column).unwrap_or(Value::Null);
                named.insert(idx.to_string(), value);
            }
            named
        }
    };
    next.rows.insert(0, row);
    next
}

/// Set one cell of the row identified by `row_id`
///
/// Postgres moves an updated row to a new tuple, so its row id is replaced
/// by `new_ctid` when the server reports one. For MongoDB `value` is the
/// whole document without `_id`. Returns `None` if the row is no longer cached.
pub fn update_cell(
    db_type: DbConnType,
    data: &QueryData,
    row_id: &str,
    column_index: usize,
    value: &Value,
    new_ctid: Option<&str>,
) -> Option<QueryData> {
    let identity = RowIdentity::from(db_type);
    let mut next = data.clone();

    if identity == RowIdentity::DocumentId {
        let idx = data
            .data
            .iter()
            .position(|d| RowIdentity::of_document(d).as_deref() == Some(row_id))?;
        let mut document = Row::new();
        if let Some(id) = data.data[idx].get(DOCUMENT_ID_KEY) {
            document.insert(DOCUMENT_ID_KEY.to_string(), id.clone());
        }
        if let Value::Object(fields) = value {
            document.extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        next.data[idx] = Value::Object(document);
        return Some(next);
    }

    let idx = data
        .rows
        .iter()
        .position(|row| identity.of_row(data, row).as_deref() == Some(row_id))?;
    let row = &mut next.rows[idx];
    row.insert(column_index.to_string(), value.clone());
    if let (RowIdentity::Ctid, Some(ctid)) = (identity, new_ctid) {
        row.insert(ROW_ID_KEY.to_string(), Value::String(ctid.to_string()));
    }
    Some(next)
}

/// Drop every row whose identity is in `ids`
pub fn remove_rows(db_type: DbConnType, data: &QueryData, ids: &[String]) -> QueryData {
    let identity = RowIdentity::from(db_type);
    let is_removed = |id: Option<String>| id.is_some_and(|id| ids.contains(&id));

    let mut next = data.clone();
    if identity == RowIdentity::DocumentId {
        next.data.retain(|d| !is_removed(RowIdentity::of_document(d)));
    } else {
        next.rows.retain(|row| !is_removed(identity.of_row(data, row)));
    }
    next
}
