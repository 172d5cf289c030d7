//! Configuration and file management for the database workspace
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - Persistence of the signed-in user and sidebar preference

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod storage;

pub use app_config::{AppConfig, BuildKind};
pub use config_file::load_config_file;
pub use paths::{cache_dir, config_dir, storage_path};
pub use storage::{FileStorage, MemoryStorage, Storage, StoredData};
