//! Actions for the signed-in user.

use deck_client::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// A user signed in; everything scoped to the previous user is dropped
    LoggedIn(User),

    /// Profile or authentication status refreshed
    ///
    /// Scoped state survives only while the same user stays authenticated.
    UserUpdated {
        user: Option<User>,
        is_authenticated: bool,
    },

    /// The user signed out
    LoggedOut,
}
