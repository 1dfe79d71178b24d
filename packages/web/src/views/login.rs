use dioxus::prelude::*;
use ui::forms::LoginCard;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    rsx! {
        LoginCard {
            on_register: move |_| {
                nav.push(Route::Register {});
            },
        }
    }
}
