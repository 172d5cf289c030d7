//! Paging through a table or collection

use deck_client::DbConnType;
use deck_config::AppConfig;
use serde::{Deserialize, Serialize};

/// Window into a result set
///
/// `count` is the total reported by the first fetch; while it is unknown
/// there is always assumed to be a next page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u64,
    pub offset: u64,
    pub count: Option<u64>,
}

impl Pagination {
    pub fn new(limit: u64) -> Self {
        Self {
            limit,
            offset: 0,
            count: None,
        }
    }

    /// First page sized for the connection kind
    pub fn for_connection(db_type: Option<DbConnType>, config: &AppConfig) -> Self {
        Self::new(config.page_limit(db_type))
    }

    pub fn with_count(self, count: Option<u64>) -> Self {
        Self { count, ..self }
    }

    /// Whether the server should be asked for the total count
    pub fn is_first_fetch(&self) -> bool {
        self.count.is_none()
    }

    pub fn has_next(&self) -> bool {
        match self.count {
            Some(count) => self.offset + self.limit < count,
            None => true,
        }
    }

    pub fn next_page(&self) -> Option<Self> {
        self.has_next().then(|| Self {
            offset: self.offset + self.limit,
            ..*self
        })
    }

    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    pub fn previous_page(&self) -> Option<Self> {
        self.has_previous().then(|| Self {
            offset: self.offset.saturating_sub(self.limit),
            ..*self
        })
    }

    /// Back to the start with the count unknown (filter or sort changed)
    pub fn first_page(&self) -> Self {
        Self::new(self.limit)
    }

    /// One past the last row shown, for "offset - end of count"
    pub fn range_end(&self, rows_len: usize) -> u64 {
        self.offset + rows_len as u64
    }
}
