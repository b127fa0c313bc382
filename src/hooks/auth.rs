use dioxus::prelude::*;

use crate::{
    hooks::toasts::{use_toasts, ToastManager},
    store::{AuthStore, User},
};

pub fn use_auth_provider() {
    use_context_provider(|| Signal::new(AuthStore::default()));
}

pub fn use_auth() -> Signal<AuthStore> {
    use_context::<Signal<AuthStore>>()
}

/// Store handle for explicit user actions, with the notification
/// semantics layered on: a silent login and a forced logout mutate the
/// store without raising a toast. Bootstrap reconciliation does not come
/// through here at all.
#[derive(Clone, Copy)]
pub struct AuthActions {
    store: Signal<AuthStore>,
    toaster: Signal<ToastManager>,
}

pub fn use_auth_actions() -> AuthActions {
    AuthActions {
        store: use_auth(),
        toaster: use_toasts(),
    }
}

impl AuthActions {
    pub fn login(&mut self, user: User, silent: bool) {
        let greeting = format!("Welcome back, {}!", user.display_name());
        self.store.write().login(user);

        if !silent {
            self.toaster.write().new_success(greeting);
        }
    }

    pub fn logout(&mut self, forced: bool) {
        self.store.write().logout();

        if !forced {
            self.toaster.write().new_success("Signed out.".to_owned());
        }
    }
}
