use dioxus::prelude::*;
use ui::widgets::MarketPrices;

#[component]
pub fn Market() -> Element {
    rsx! {
        div {
            class: "page-header",
            h1 { "Market Prices" }
        }
        MarketPrices {}
    }
}
