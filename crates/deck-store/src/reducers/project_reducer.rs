use std::sync::Arc;

use super::update;
use crate::actions::ProjectAction;
use crate::state::ProjectsState;

pub fn reduce_projects(state: Arc<ProjectsState>, action: &ProjectAction) -> Arc<ProjectsState> {
    match action {
        ProjectAction::FetchStart => update(state, |s| s.is_fetching = true),
        ProjectAction::Loaded(projects) => {
            log::info!("Loaded {} projects", projects.len());
            update(state, |s| {
                s.projects = projects.clone();
                s.is_fetching = false;
                s.is_fetched = true;
            })
        }
        ProjectAction::FetchFailed => {
            if !state.is_fetching {
                return state;
            }
            update(state, |s| s.is_fetching = false)
        }
        ProjectAction::Added(project) => {
            log::info!("Added project {}", project.name);
            update(state, |s| s.projects.push(project.clone()))
        }
        ProjectAction::Deleted(project_id) => {
            if state.find(project_id).is_none() {
                return state;
            }
            update(state, |s| s.projects.retain(|p| p.id != *project_id))
        }
        ProjectAction::ConnectionsLoaded(connections) => {
            update(state, |s| s.db_connections_in_project = connections.clone())
        }
        ProjectAction::ConnectionDeleted(db_conn_id) => update(state, |s| {
            s.db_connections_in_project
                .retain(|c| c.id != *db_conn_id)
        }),
    }
}
