use dioxus::prelude::*;

use crate::{
    api::SignupRequest,
    hooks::{
        api::use_api_client,
        auth::{use_auth, use_auth_actions},
        toasts::use_toasts,
    },
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
struct SignupForm {
    name: String,
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
    let mut store = use_auth();
    let mut auth = use_auth_actions();
    let mut toaster = use_toasts();
    let mut form = use_signal(SignupForm::default);
    let mut submitted = use_signal(|| false);

    rsx! {
        GenericPage {
            title: "Create Account".to_owned(),
            form {
                Field {
                    label: "Name",
                    TextInput {
                        value: TextInputType::Text(form.read().name.clone()),
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                }
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
                            // while the registration is in flight a stale
                            // status check must not log the new user out
                            store.write().set_signup_in_progress(true);
                            let client = client.clone();
                            async move {
                                let request = SignupRequest {
                                    name: form.read().name.clone(),
                                    email: form.read().email.clone(),
                                    password: form.read().password.clone(),
                                };

                                match client.signup(&request).await {
                                    Ok(response) => match response.user {
                                        Some(user) if response.success => {
                                            // login ends the signup flow
                                            auth.login(user, false);
                                            nav.push(Routes::LandingPage);
                                        }
                                        _ => {
                                            let message = response
                                                .message
                                                .unwrap_or_else(|| "signup rejected".to_owned());
                                            toaster.write().new_error(message);
                                            store.write().set_signup_in_progress(false);
                                            submitted.set(false);
                                        }
                                    },
                                    Err(e) => {
                                        toaster.write().new_error(e.to_string());
                                        store.write().set_signup_in_progress(false);
                                        submitted.set(false);
                                    }
                                }
                            }
                        });
                    },
                    "Create Account"
                }
            }
        }
    }
}
