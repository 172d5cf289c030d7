//! Domain models
//!
//! Pure helpers over fetched data, separate from state and transitions.

pub mod pagination;
pub mod row_identity;
pub mod row_patch;

pub use pagination::Pagination;
pub use row_identity::{row_identity, RowIdentity};
