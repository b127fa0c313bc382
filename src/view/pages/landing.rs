use dioxus::prelude::*;

use crate::{
    hooks::{
        api::use_api_client,
        auth::{use_auth, use_auth_actions},
    },
    view::{
        app::Routes,
        components::{
            form::{Button, ButtonFlavor},
            page::Page as GenericPage,
            with_toasts::WithToasts,
        },
    },
};

#[component]
pub fn Page() -> Element {
    rsx! {
        WithToasts {
            PageBody {}
        }
    }
}

#[component]
fn PageBody() -> Element {
    let nav = use_navigator();
    let client = use_api_client();
    let auth = use_auth();
    let mut actions = use_auth_actions();

    let user = auth.read().user().cloned();
    let body = match user {
        Some(user) => {
            let name = user.display_name().to_owned();
            rsx! {
                p {
                    class: "subtitle",
                    "Signed in as {name}."
                }
                Button {
                    flavor: ButtonFlavor::Danger,
                    onclick: move |_| {
                        spawn({
                            let client = client.clone();
                            async move {
                                client.logout().await;
                                actions.logout(false);
                            }
                        });
                    },
                    "Sign Out"
                }
            }
        }
        None => rsx! {
            p {
                class: "subtitle",
                "You are browsing as a guest."
            }
            div {
                class: "buttons",
                Button {
                    flavor: ButtonFlavor::Info,
                    onclick: move |_| {
                        nav.push(Routes::LoginPage);
                    },
                    "Sign In"
                }
                Button {
                    onclick: move |_| {
                        nav.push(Routes::SignupPage);
                    },
                    "Create Account"
                }
            }
        },
    };

    rsx! {
        GenericPage {
            title: "Atrium".to_owned(),
            { body }
        }
    }
}
