use dioxus::prelude::*;

#[component]
pub fn Spinner(#[props(default)] label: String) -> Element {
    rsx! {
        div {
            class: "spinner-row",
            role: "status",
            span { class: "spinner" }
            if !label.is_empty() {
                span { class: "spinner-label", "{label}" }
            }
        }
    }
}

/// Shown while the session is being restored.
#[component]
pub fn FullScreenSpinner() -> Element {
    rsx! {
        div {
            class: "spinner-screen",
            span { class: "spinner spinner-lg" }
        }
    }
}
