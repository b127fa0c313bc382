use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum TextInputType {
    Text(String),
    Password(String),
}

#[component]
pub fn Field(label: String, children: Element) -> Element {
    rsx! {
        div {
            class: "field",
            label {
                class: "label",
                "{label}"
            }
            { children }
        }
    }
}

#[component]
pub fn TextInput(
    oninput: EventHandler<FormEvent>,
    value: ReadOnlySignal<TextInputType>,
) -> Element {
    let (value_str, typ) = match &*value.read() {
        TextInputType::Text(text) => (text.clone(), "text"),
        TextInputType::Password(text) => (text.clone(), "password"),
    };

    rsx! {
        div {
            class: "control",
            input {
                class: "input",
                value: "{value_str}",
                "type": typ,
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

#[derive(Clone, PartialEq)]
pub enum ButtonFlavor {
    Info,
    Danger,
}

#[component]
pub fn Button(
    onclick: EventHandler<MouseEvent>,
    flavor: Option<ButtonFlavor>,
    disabled: Option<bool>,
    children: Element,
) -> Element {
    let class = match flavor {
        None => "button".to_owned(),
        Some(ButtonFlavor::Info) => "button is-info".to_owned(),
        Some(ButtonFlavor::Danger) => "button is-danger".to_owned(),
    };
    let disabled = disabled.unwrap_or(false);

    rsx! {
        button {
            class: "{class}",
            "type": "button",
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            { children }
        }
    }
}
