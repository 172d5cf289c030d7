use deck_client::{DbConnection, Project};

/// Projects visible to the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectsState {
    pub projects: Vec<Project>,
    pub is_fetching: bool,
    /// Set once a fetch completed, even when it returned no projects
    pub is_fetched: bool,
    pub db_connections_in_project: Vec<DbConnection>,
}

impl ProjectsState {
    pub fn find(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }
}
