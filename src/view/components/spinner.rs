use dioxus::prelude::*;

/// Cosmetic full-viewport placeholder shown while the session check is in
/// flight.
#[component]
pub fn FullPageSpinner() -> Element {
    rsx! {
        div {
            class: "is-flex is-justify-content-center is-align-items-center",
            style: "min-height: 100vh;",
            progress {
                class: "progress is-small is-primary",
                style: "width: 12rem;",
                max: "100",
            }
        }
    }
}
