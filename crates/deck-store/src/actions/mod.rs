//! Actions module
//!
//! Every state transition is an [`Action`], tagged by the slice family it
//! addresses. Actions are plain data: the side effects that produce them
//! live in the dispatcher, and the reducers decide what they mean.

pub mod api;
pub mod config;
pub mod console;
pub mod db_connection;
pub mod db_connections;
pub mod history;
pub mod project;
pub mod session;
pub mod tab;
pub mod tab_cache;

pub use api::ApiAction;
pub use config::ConfigAction;
pub use console::ConsoleAction;
pub use db_connection::DbConnectionAction;
pub use db_connections::DbConnectionsAction;
pub use history::HistoryAction;
pub use project::ProjectAction;
pub use session::SessionAction;
pub use tab::TabAction;
pub use tab_cache::TabCacheAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Signed-in user transitions (reset scoped state)
    Session(SessionAction),
    /// Project list and project connections
    Project(ProjectAction),
    /// The open connection, its data models and saved queries
    DbConnection(DbConnectionAction),
    /// The list of all connections
    DbConnections(DbConnectionsAction),
    /// Tab list and active tab
    Tab(TabAction),
    /// Per-tab fetched data and fetch flags
    TabCache(TabCacheAction),
    /// Query history
    History(HistoryAction),
    /// UI preferences
    Config(ConfigAction),
    /// Console scrollback
    Console(ConsoleAction),
    /// Backend facts
    Api(ApiAction),

    /// Drop every slice back to its initial state
    ResetAll,

    /// No-op action
    None,
}
