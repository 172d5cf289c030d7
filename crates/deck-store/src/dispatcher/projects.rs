//! Projects and the connections inside them

use deck_client::{DbConnection, Project};

use super::{ActionDispatcher, Fetch, Rejected};
use crate::actions::{Action, ProjectAction};
use crate::error::{ActionError, ActionResult};

impl ActionDispatcher {
    /// Load the project list once; later calls are skipped
    pub async fn get_projects(&self) -> ActionResult<Fetch<()>> {
        let started = self.begin(|state| {
            if state.projects.is_fetched || state.projects.is_fetching {
                return Err(Rejected::Skip);
            }
            Ok(Action::Project(ProjectAction::FetchStart))
        })?;
        if !started {
            return Ok(Fetch::Skipped);
        }

        match self.api.get_projects().await {
            Ok(projects) => {
                self.dispatch(Action::Project(ProjectAction::Loaded(projects)));
                Ok(Fetch::Fetched(()))
            }
            Err(e) => {
                log::warn!("Failed to load projects: {}", e);
                self.dispatch(Action::Project(ProjectAction::FetchFailed));
                Err(e.into())
            }
        }
    }

    pub async fn create_new_project(&self, name: &str) -> ActionResult<Project> {
        if name.trim().is_empty() {
            return Err(ActionError::EmptyProjectName);
        }
        let project = self.api.create_new_project(name).await?;
        self.dispatch(Action::Project(ProjectAction::Added(project.clone())));
        Ok(project)
    }

    pub async fn delete_project(&self, project_id: &str) -> ActionResult<()> {
        self.api.delete_project(project_id).await?;
        self.dispatch(Action::Project(ProjectAction::Deleted(project_id.to_string())));
        Ok(())
    }

    pub async fn get_db_connections_in_project(
        &self,
        project_id: &str,
    ) -> ActionResult<Vec<DbConnection>> {
        let connections = self.api.get_db_connections_by_project(project_id).await?;
        self.dispatch(Action::Project(ProjectAction::ConnectionsLoaded(
            connections.clone(),
        )));
        Ok(connections)
    }

    pub async fn delete_db_connection_in_project(&self, db_conn_id: &str) -> ActionResult<()> {
        self.api.delete_db_connection(db_conn_id).await?;
        self.dispatch(Action::Project(ProjectAction::ConnectionDeleted(
            db_conn_id.to_string(),
        )));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{connection, dispatcher, project};
    use deck_client::DbConnType;

    #[tokio::test]
    async fn test_projects_are_fetched_once() {
        let (dispatcher, api, _) = dispatcher();
        *api.projects.lock().unwrap() = vec![project("p1", None)];

        assert_eq!(dispatcher.get_projects().await.unwrap(), Fetch::Fetched(()));
        assert!(dispatcher.get_projects().await.unwrap().is_skipped());
        assert_eq!(api.calls("get_projects"), 1);
        assert_eq!(dispatcher.state().projects.projects.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_project_fetch_can_be_retried() {
        let (dispatcher, api, _) = dispatcher();
        api.fail("get_projects", "boom");

        assert!(dispatcher.get_projects().await.is_err());
        assert!(!dispatcher.state().projects.is_fetching);
        assert!(dispatcher.get_projects().await.is_err());
        assert_eq!(api.calls("get_projects"), 2);
    }

    #[tokio::test]
    async fn test_blank_project_name_is_rejected_locally() {
        let (dispatcher, api, _) = dispatcher();
        let err = dispatcher.create_new_project("   ").await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(api.calls("create_new_project"), 0);

        let created = dispatcher.create_new_project("analytics").await.unwrap();
        assert_eq!(created.name, "analytics");
        assert_eq!(dispatcher.state().projects.projects, vec![created]);
    }

    #[tokio::test]
    async fn test_project_connections() {
        let (dispatcher, api, _) = dispatcher();
        *api.db_connections.lock().unwrap() = vec![
            connection("c1", DbConnType::Postgres),
            connection("c2", DbConnType::Mongo),
        ];

        dispatcher.get_db_connections_in_project("p1").await.unwrap();
        dispatcher.delete_db_connection_in_project("c1").await.unwrap();

        let ids: Vec<_> = dispatcher
            .state()
            .projects
            .db_connections_in_project
            .iter()
            .map(|c| c.id.clone())
            .collect();
        assert_eq!(ids, vec!["c2".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_project() {
        let (dispatcher, api, _) = dispatcher();
        dispatcher.create_new_project("analytics").await.unwrap();
        api.fail("delete_project", "forbidden");

        assert!(dispatcher.delete_project("p-new").await.is_err());
        assert_eq!(dispatcher.state().projects.projects.len(), 1);
    }
}
