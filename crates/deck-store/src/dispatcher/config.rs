//! UI preferences and backend facts

use super::ActionDispatcher;
use crate::actions::{Action, ApiAction, ConfigAction};
use crate::error::ActionResult;

impl ActionDispatcher {
    /// Load stored preferences into state
    pub async fn get_config(&self) -> ActionResult<bool> {
        let showing = self.storage.is_showing_sidebar().await?;
        self.dispatch(Action::Config(ConfigAction::SetShowingSidebar(showing)));
        Ok(showing)
    }

    /// Show or hide the sidebar, then remember the choice
    pub async fn set_is_showing_sidebar(&self, showing: bool) -> ActionResult<()> {
        self.dispatch(Action::Config(ConfigAction::SetShowingSidebar(showing)));
        self.storage.set_is_showing_sidebar(showing).await?;
        Ok(())
    }

    pub async fn health_check(&self) -> ActionResult<String> {
        let health = self.api.get_health_check().await?;
        log::info!("Backend version {}", health.version);
        self.dispatch(Action::Api(ApiAction::SetVersion(health.version.clone())));
        Ok(health.version)
    }
}
