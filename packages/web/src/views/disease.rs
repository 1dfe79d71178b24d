use dioxus::prelude::*;
use ui::forms::DiseaseUploader;

#[component]
pub fn DiseaseDetection() -> Element {
    rsx! {
        div {
            class: "page-header",
            h1 { "Disease Detection" }
        }
        p { "Upload a clear photo of an affected leaf to identify diseases or pests and get treatment advice." }
        DiseaseUploader {}
    }
}
