use dioxus::prelude::*;

use crate::view::components::page::Page as GenericPage;

#[component]
pub fn Page(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        GenericPage {
            title: "Not Found".to_owned(),
            p {
                class: "subtitle",
                "There is nothing at /{path}."
            }
        }
    }
}
