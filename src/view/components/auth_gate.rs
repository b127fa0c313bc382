use dioxus::prelude::*;
use tracing::debug;

use crate::{
    bootstrap::{self, Machine},
    hooks::{api::use_api_client, auth::use_auth},
    view::{app::Routes, components::spinner::FullPageSpinner},
};

/// Blocks the app behind the session status check.
///
/// Until the bootstrap machine resolves, only the splash placeholder is
/// rendered; afterwards the children render unconditionally. Navigating
/// to another route re-runs the check in the background without ever
/// re-blocking: the store is still reconciled, the placeholder does not
/// come back.
#[component]
pub fn AuthGate(children: Element) -> Element {
    let client = use_api_client();
    let mut auth = use_auth();
    let mut machine = use_signal(Machine::new);

    // Wire the transport's auth-failure hook to a forced logout. The
    // client keeps only the first registration, so re-renders and
    // remounts are no-ops.
    use_hook({
        let client = client.clone();
        move || {
            client.set_unauthorized_hook(move || {
                let mut auth = auth;
                auth.write().logout();
            });
        }
    });

    // Global loading covers mount through first resolution.
    use_hook(|| {
        let mut store = auth.write();
        machine.write().start(&mut store);
    });

    use_drop(move || {
        // the check may still be in flight; never leave the global
        // loading flag stuck
        auth.write().set_loading(false);
    });

    // One fresh status query per navigation key.
    let route = use_route::<Routes>();
    let path = route.to_string();
    let mut nav_key = use_signal(|| path.clone());
    if *nav_key.peek() != path {
        nav_key.set(path);
    }

    let check = use_resource(move || {
        let key = nav_key();
        let client = client.clone();
        async move {
            debug!("session status check for {key}");
            bootstrap::run_check(&*client).await
        }
    });

    // Interpretation runs strictly after the query settles; the resource
    // and this effect are dropped with the scope, so it can never touch
    // the store after unmount.
    use_effect(move || {
        let outcome = match &*check.read() {
            Some(outcome) => outcome.clone(),
            None => return,
        };

        let mut store = auth.write();
        machine.write().settle(outcome, &mut store);
    });

    if !machine.read().is_resolved() {
        return rsx! {
            FullPageSpinner {}
        };
    }

    rsx! {
        { children }
    }
}
