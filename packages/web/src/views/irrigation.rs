use dioxus::prelude::*;
use store::display::hectares;
use ui::components::Card;
use ui::widgets::IrrigationCard;
use ui::{use_cancel_token, use_field_store, use_fields};

#[component]
pub fn Irrigation() -> Element {
    let store = use_field_store();
    let fields = use_fields();
    let cancel = use_cancel_token();

    let _loader = use_resource(move || {
        let store = store.clone();
        let cancel = cancel.clone();
        async move { store.fetch_fields(&cancel).await }
    });

    let list = fields.read().fields.clone();

    rsx! {
        div {
            class: "page-header",
            h1 { "Irrigation" }
        }
        div {
            class: "page-grid",
            IrrigationCard {}
            Card {
                title: "Irrigation by field",
                if list.is_empty() {
                    p { class: "widget-empty", "No fields yet" }
                } else {
                    table {
                        class: "field-table",
                        thead {
                            tr {
                                th { "Field" }
                                th { "Crop" }
                                th { class: "num", "Area" }
                                th { "Method" }
                            }
                        }
                        tbody {
                            for field in list {
                                tr {
                                    key: "{field.id}",
                                    td { "{field.name}" }
                                    td { "{field.crop_type}" }
                                    td { class: "num", {hectares(field.area)} }
                                    td { {field.irrigation_type.clone().unwrap_or_else(|| "Not set".to_string())} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
