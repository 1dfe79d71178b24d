use api::Location;
use dioxus::prelude::*;
use ui::components::{Button, Input};
use ui::widgets::{preferred_location, WeatherCard};
use ui::{use_auth, use_fields};

/// Days of forecast on the full weather page.
const OUTLOOK_DAYS: u8 = 7;

#[component]
pub fn Weather() -> Element {
    let auth = use_auth();
    let fields = use_fields();
    let mut query = use_signal(String::new);
    let mut searched = use_signal(|| None::<Location>);

    let location = searched()
        .unwrap_or_else(|| preferred_location(auth.read().user.as_ref(), &fields.read().fields));

    rsx! {
        div {
            class: "page-header",
            h1 { "Weather" }
            form {
                class: "form-actions",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let name = query().trim().to_string();
                    searched.set((!name.is_empty()).then_some(Location::Named(name)));
                },
                Input {
                    placeholder: "Search a location",
                    value: query(),
                    oninput: move |evt: FormEvent| query.set(evt.value()),
                }
                Button { r#type: "submit", "Search" }
            }
        }
        WeatherCard { location: location, days: OUTLOOK_DAYS }
    }
}
