use dioxus::prelude::*;

#[component]
pub fn Page(title: String, children: Element) -> Element {
    rsx! {
        section {
            class: "section",
            div {
                class: "container",
                h1 {
                    class: "title",
                    "{title}"
                }
                { children }
            }
        }
    }
}
