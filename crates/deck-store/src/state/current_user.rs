use deck_client::User;

/// The signed-in user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentUserState {
    pub user: Option<User>,
    /// `None` until the first authentication check completes
    pub is_authenticated: Option<bool>,
}
