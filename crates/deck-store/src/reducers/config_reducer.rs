use std::sync::Arc;

use super::update;
use crate::actions::{ApiAction, ConfigAction};
use crate::state::{ApiState, ConfigState};

pub fn reduce_config(state: Arc<ConfigState>, action: &ConfigAction) -> Arc<ConfigState> {
    match action {
        ConfigAction::SetShowingSidebar(showing) => {
            if state.is_showing_sidebar == Some(*showing) {
                return state;
            }
            update(state, |s| s.is_showing_sidebar = Some(*showing))
        }
    }
}

pub fn reduce_api(state: Arc<ApiState>, action: &ApiAction) -> Arc<ApiState> {
    match action {
        ApiAction::SetVersion(version) => {
            log::info!("Backend version {}", version);
            update(state, |s| s.version = version.clone())
        }
    }
}
