use dioxus::prelude::*;

use crate::{
    hooks::{api::use_api_provider, auth::use_auth_provider},
    view::{
        components::auth_gate::AuthGate,
        pages::{
            landing::Page as LandingPage, login::Page as LoginPage,
            not_found::Page as NotFound, signup::Page as SignupPage,
        },
    },
};

#[component]
pub fn App() -> Element {
    use_api_provider();
    use_auth_provider();

    rsx! {
        document::Stylesheet { href: "https://cdn.jsdelivr.net/npm/bulma@1.0.2/css/bulma.min.css" }
        Router::<Routes> {}
    }
}

#[derive(Clone, PartialEq, Routable)]
pub enum Routes {
    #[layout(Gate)]
    #[route("/")]
    LandingPage,

    #[route("/login")]
    LoginPage,

    #[route("/signup")]
    SignupPage,

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Every route renders behind the session bootstrap gate.
#[component]
fn Gate() -> Element {
    rsx! {
        AuthGate {
            Outlet::<Routes> {}
        }
    }
}
