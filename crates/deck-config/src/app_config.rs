//! Application configuration
//!
//! Configuration loaded from `.deck.toml`.

use deck_client::DbConnType;
use serde::{Deserialize, Serialize};

/// How the workspace is hosted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildKind {
    /// Served to a browser; sidebar visibility is a stored preference
    #[default]
    Server,
    /// Bundled desktop app; the sidebar is always shown
    Desktop,
}

/// Application configuration loaded from `.deck.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub build: BuildKind,

    /// Rows per page for Postgres and MySQL tables
    #[serde(default = "default_sql_page_limit")]
    pub sql_page_limit: u64,

    /// Documents per page for MongoDB collections
    #[serde(default = "default_document_page_limit")]
    pub document_page_limit: u64,

    /// Page size used before the connection type is known
    #[serde(default = "default_fallback_page_limit")]
    pub fallback_page_limit: u64,
}

fn default_sql_page_limit() -> u64 {
    200
}

fn default_document_page_limit() -> u64 {
    50
}

fn default_fallback_page_limit() -> u64 {
    100
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            build: BuildKind::default(),
            sql_page_limit: default_sql_page_limit(),
            document_page_limit: default_document_page_limit(),
            fallback_page_limit: default_fallback_page_limit(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Page size for browsing data of the given connection kind
    pub fn page_limit(&self, db_type: Option<DbConnType>) -> u64 {
        match db_type {
            Some(DbConnType::Postgres | DbConnType::Mysql) => self.sql_page_limit,
            Some(DbConnType::Mongo) => self.document_page_limit,
            None => self.fallback_page_limit,
        }
    }

    pub fn is_desktop(&self) -> bool {
        self.build == BuildKind::Desktop
    }
}
