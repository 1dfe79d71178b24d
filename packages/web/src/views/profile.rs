use dioxus::prelude::*;
use ui::forms::ProfileEditor;

#[component]
pub fn Profile() -> Element {
    rsx! {
        div {
            class: "page-header",
            h1 { "Profile" }
        }
        ProfileEditor {}
    }
}
