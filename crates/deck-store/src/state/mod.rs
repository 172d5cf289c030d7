//! Application State Module
//!
//! Contains all state slices, organized by feature. Every slice lives behind
//! an `Arc` in [`AppState`]; a transition that changes a slice swaps in a new
//! `Arc`, one that does not keeps the old pointer.

mod app;
mod config;
mod console;
mod current_user;
mod db_connection;
mod db_connections;
mod history;
mod projects;
mod tab_cache;
mod tabs;

pub use app::AppState;
pub use config::{ApiState, ConfigState};
pub use console::{ConsoleBlock, ConsoleState};
pub use current_user::CurrentUserState;
pub use db_connection::DbConnectionState;
pub use db_connections::DbConnectionsState;
pub use history::DbHistoryState;
pub use projects::ProjectsState;
pub use tab_cache::{DbQueryState, FetchFlags, TabCacheEntry, TabCacheState};
pub use tabs::TabsState;
