use dioxus::prelude::*;

const CARD_CSS: Asset = asset!("/assets/styling/card.css");

/// Titled panel used by every dashboard widget.
#[component]
pub fn Card(
    #[props(default)] title: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        document::Stylesheet { href: CARD_CSS }
        section {
            class: "card {class}",
            if !title.is_empty() {
                header {
                    class: "card-header",
                    h3 { class: "card-title", "{title}" }
                }
            }
            div { class: "card-body", {children} }
        }
    }
}

/// One headline number with a caption and icon.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    icon: Element,
    #[props(default)] hint: String,
    #[props(default = "green".to_string())] tone: String,
) -> Element {
    rsx! {
        document::Stylesheet { href: CARD_CSS }
        div {
            class: "stat-card stat-card--{tone}",
            div {
                class: "stat-card-icon",
                {icon}
            }
            div {
                class: "stat-card-text",
                span { class: "stat-card-label", "{label}" }
                span { class: "stat-card-value", "{value}" }
                if !hint.is_empty() {
                    span { class: "stat-card-hint", "{hint}" }
                }
            }
        }
    }
}
