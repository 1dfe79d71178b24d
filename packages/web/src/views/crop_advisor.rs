use dioxus::prelude::*;
use ui::forms::{RecommendationPanel, YieldPanel};
use ui::{use_cancel_token, use_crop_store, use_field_store};

#[component]
pub fn CropAdvisor() -> Element {
    let crops = use_crop_store();
    let fields = use_field_store();
    let cancel = use_cancel_token();

    // The yield form offers the user's fields as presets
    let _loader = use_resource(move || {
        let fields = fields.clone();
        let cancel = cancel.clone();
        async move {
            if fields.state().fields.is_empty() {
                fields.fetch_fields(&cancel).await;
            }
        }
    });
    use_drop(move || crops.clear_results());

    rsx! {
        div {
            class: "page-header",
            h1 { "Crop Advisor" }
        }
        div {
            class: "page-grid",
            RecommendationPanel {}
            YieldPanel {}
        }
    }
}
