//! Sign-in, profile and sign-out

use deck_client::User;

use super::ActionDispatcher;
use crate::actions::{Action, SessionAction};
use crate::error::ActionResult;

impl ActionDispatcher {
    /// Sign in; scoped state of any previous user is dropped
    pub async fn login_user(&self, email: &str, password: &str) -> ActionResult<User> {
        let response = self.api.login_user(email, password).await?;
        self.storage.login_current_user(&response.user).await?;
        self.dispatch(Action::Session(SessionAction::LoggedIn(
            response.user.clone(),
        )));
        Ok(response.user)
    }

    /// Restore the stored user and ask the backend whether the session is valid
    pub async fn get_user(&self) -> ActionResult<()> {
        let is_authenticated = self.api.is_user_authenticated().await;
        let user = self.storage.get_current_user().await?;
        self.dispatch(Action::Session(SessionAction::UserUpdated {
            user,
            is_authenticated,
        }));
        Ok(())
    }

    pub async fn edit_user(&self, name: &str, profile_image_url: &str) -> ActionResult<User> {
        let user = self.api.edit_user(name, profile_image_url).await?;
        self.update_user(user.clone()).await?;
        Ok(user)
    }

    /// Replace the stored user record without touching open tabs
    pub async fn update_user(&self, user: User) -> ActionResult<()> {
        self.storage.update_current_user(&user).await?;
        let is_authenticated = self.state().current_user.is_authenticated.unwrap_or(true);
        self.dispatch(Action::Session(SessionAction::UserUpdated {
            user: Some(user),
            is_authenticated,
        }));
        Ok(())
    }

    /// Sign out on the backend, then locally even if the backend refused
    pub async fn logout_user(&self) -> ActionResult<()> {
        if let Err(e) = self.api.logout_user().await {
            log::warn!("Backend logout failed: {}", e);
        }
        self.clear_login().await
    }

    /// Forget the stored user and reset the whole state
    pub async fn clear_login(&self) -> ActionResult<()> {
        self.storage.logout_user().await?;
        self.dispatch(Action::Session(SessionAction::LoggedOut));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::actions::{Action, TabAction};
    use crate::testing::{data_tab, dispatcher, user};
    use deck_config::Storage;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_login_persists_and_authenticates() {
        let (dispatcher, _api, storage) = dispatcher();
        let user = dispatcher.login_user("ada@example.com", "pw").await.unwrap();

        assert_eq!(user.email, "ada@example.com");
        assert_eq!(storage.get_current_user().await.unwrap(), Some(user.clone()));
        let state = dispatcher.state();
        assert_eq!(state.current_user.user.as_ref(), Some(&user));
        assert_eq!(state.current_user.is_authenticated, Some(true));
    }

    #[tokio::test]
    async fn test_failed_login_changes_nothing() {
        let (dispatcher, api, storage) = dispatcher();
        api.fail("login_user", "invalid credentials");

        let err = dispatcher.login_user("ada@example.com", "bad").await.unwrap_err();
        assert_eq!(err.to_string(), "invalid credentials");
        assert_eq!(storage.get_current_user().await.unwrap(), None);
        assert_eq!(dispatcher.state().current_user.is_authenticated, None);
    }

    #[tokio::test]
    async fn test_get_user_reads_storage_and_auth_check() {
        let (dispatcher, api, storage) = dispatcher();
        storage.login_current_user(&user("u7")).await.unwrap();
        *api.authenticated.lock().unwrap() = false;

        dispatcher.get_user().await.unwrap();
        let state = dispatcher.state();
        assert_eq!(state.current_user.user, Some(user("u7")));
        assert_eq!(state.current_user.is_authenticated, Some(false));
    }

    #[tokio::test]
    async fn test_edit_user_keeps_open_tabs() {
        let (dispatcher, _api, storage) = dispatcher();
        dispatcher.login_user("ada@example.com", "pw").await.unwrap();
        dispatcher
            .store()
            .dispatch(Action::Tab(TabAction::Add(data_tab("A", "public", "users"))));

        let edited = dispatcher.edit_user("Ada", "https://img").await.unwrap();
        assert_eq!(edited.name.as_deref(), Some("Ada"));
        assert_eq!(storage.get_current_user().await.unwrap(), Some(edited));
        assert_eq!(dispatcher.state().tabs.tabs.len(), 1);
    }

    #[tokio::test]
    async fn test_logout_clears_even_when_backend_fails() {
        let (dispatcher, api, storage) = dispatcher();
        dispatcher.login_user("ada@example.com", "pw").await.unwrap();
        api.fail("logout_user", "session expired");

        dispatcher.logout_user().await.unwrap();
        assert_eq!(storage.get_current_user().await.unwrap(), None);
        let state = dispatcher.state();
        assert_eq!(state.current_user.is_authenticated, Some(false));
        assert!(state.current_user.user.is_none());
    }
}
