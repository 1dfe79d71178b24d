use dioxus::prelude::*;
use ui::forms::RegisterCard;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();
    rsx! {
        RegisterCard {
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
