use dioxus::prelude::*;

/// Text input. Gets the error styling when `invalid` is set.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] step: String,
    #[props(default)] disabled: bool,
    #[props(default)] invalid: bool,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    let state = if invalid { "input input-invalid" } else { "input" };
    rsx! {
        input {
            id: "{id}",
            class: "{state} {class}",
            r#type: r#type.clone(),
            placeholder: "{placeholder}",
            value: "{value}",
            step: "{step}",
            disabled: disabled,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// `<select>` over `(value, label)` pairs. An empty `placeholder` adds no
/// blank option.
#[component]
pub fn Select(
    #[props(default)] id: String,
    #[props(default)] class: String,
    value: String,
    options: Vec<(String, String)>,
    #[props(default)] placeholder: String,
    #[props(default)] invalid: bool,
    onchange: EventHandler<FormEvent>,
) -> Element {
    let state = if invalid { "input input-invalid" } else { "input" };
    rsx! {
        select {
            id: "{id}",
            class: "{state} {class}",
            value: "{value}",
            onchange: move |evt| onchange.call(evt),
            if !placeholder.is_empty() {
                option { value: "", "{placeholder}" }
            }
            for (v, label) in options {
                option { key: "{v}", value: "{v}", selected: v == value, "{label}" }
            }
        }
    }
}

/// Inline validation message under an input. Renders nothing without a message.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            p { class: "field-error", role: "alert", "{message}" }
        },
        None => rsx! {},
    }
}
