use dioxus::prelude::*;
use ui::widgets::AlertsPanel;

#[component]
pub fn Advisories() -> Element {
    rsx! {
        div {
            class: "page-header",
            h1 { "Advisories" }
        }
        AlertsPanel {}
    }
}
