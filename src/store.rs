use serde::{Deserialize, Serialize};

/// A signed-in account as reported by the backend.
///
/// `id` is the stable identity key; reconciliation compares accounts by it
/// and nothing else.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,
}

impl User {
    /// Name to greet the user with, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Shared authentication state for the lifetime of the client session.
///
/// Provided to the component tree through context as `Signal<AuthStore>`;
/// every mutation goes through the methods below.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthStore {
    user: Option<User>,
    authenticated: bool,
    signup_in_progress: bool,
    loading: bool,
}

impl AuthStore {
    pub fn login(&mut self, user: User) {
        self.user = Some(user);
        self.authenticated = true;
        // a completed signup ends the flow
        self.signup_in_progress = false;
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.authenticated = false;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_signup_in_progress(&mut self, in_progress: bool) {
        self.signup_in_progress = in_progress;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn signup_in_progress(&self) -> bool {
        self.signup_in_progress
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
