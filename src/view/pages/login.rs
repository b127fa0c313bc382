use dioxus::prelude::*;

use crate::{
    api::LoginRequest,
    hooks::{api::use_api_client, auth::use_auth_actions, toasts::use_toasts},
    view::{
        app::Routes,
        components::{
            form::{Button, ButtonFlavor, Field, TextInput, TextInputType},
            page::Page as GenericPage,
            with_toasts::WithToasts,
        },
    },
};

#[derive(Default)]
struct LoginForm {
    email: String,
    password: String,
}

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
    let mut auth = use_auth_actions();
    let mut toaster = use_toasts();
    let mut form = use_signal(LoginForm::default);
    let mut submitted = use_signal(|| false);

    rsx! {
        GenericPage {
            title: "Sign In".to_owned(),
            form {
                Field {
                    label: "Email",
                    TextInput {
                        value: TextInputType::Text(form.read().email.clone()),
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                }
                Field {
                    label: "Password",
                    TextInput {
                        value: TextInputType::Password(form.read().password.clone()),
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }
                }
                Button {
                    flavor: ButtonFlavor::Info,
                    disabled: *submitted.read(),
                    onclick: move |_| {
                        spawn({
                            submitted.set(true);
                            let client = client.clone();
                            async move {
                                let request = LoginRequest {
                                    email: form.read().email.clone(),
                                    password: form.read().password.clone(),
                                };

                                match client.login(&request).await {
                                    Ok(response) => match response.user {
                                        Some(user) if response.success => {
                                            auth.login(user, false);
                                            nav.push(Routes::LandingPage);
                                        }
                                        _ => {
                                            let message = response
                                                .message
                                                .unwrap_or_else(|| "login rejected".to_owned());
                                            toaster.write().new_error(message);
                                            submitted.set(false);
                                        }
                                    },
                                    Err(e) => {
                                        toaster.write().new_error(e.to_string());
                                        submitted.set(false);
                                    }
                                }
                            }
                        });
                    },
                    "Sign In"
                }
            }
        }
    }
}
