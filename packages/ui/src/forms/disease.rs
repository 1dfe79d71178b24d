//! Image analysis: pick or drop one photo, preview it, send it for disease or
//! pest detection.
//!
//! The size and type are checked from file metadata before the bytes are
//! read. The preview URL is revoked when replaced and when the uploader
//! unmounts, which also cancels an analysis still in flight.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;
use store::upload::{content_type_for, human_size, validate_metadata, MAX_IMAGE_BYTES};
use store::{Error, ImageUpload};

use crate::cell::use_cancel_token;
use crate::components::{Button, ButtonVariant, Card, Select, Spinner};
use crate::context::{use_crop_store, use_crops};
use crate::forms::{options, preview, CROP_TYPES};
use crate::icons::{FaBug, FaCircleCheck, FaCloudArrowUp, FaTriangleExclamation};
use crate::Icon;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnalysisKind {
    #[default]
    Disease,
    Pest,
}

impl AnalysisKind {
    fn label(self) -> &'static str {
        match self {
            AnalysisKind::Disease => "Disease",
            AnalysisKind::Pest => "Pest",
        }
    }
}

/// The preview URL currently shown, owned outside the signal graph so it
/// can still be revoked while the component is being dropped.
#[derive(Clone, Default)]
struct PreviewSlot(Rc<RefCell<Option<String>>>);

impl PreviewSlot {
    fn replace(&self, url: Option<String>) {
        if let Some(old) = self.0.replace(url) {
            preview::revoke(&old);
        }
    }
}

#[component]
pub fn DiseaseUploader(#[props(default)] kind: AnalysisKind) -> Element {
    let store = use_crop_store();
    let crops = use_crops();
    let cancel = use_cancel_token();
    let mut mode = use_signal(|| kind);
    let mut crop_type = use_signal(String::new);
    let mut preview_url = use_signal(|| None::<String>);
    let mut file_label = use_signal(|| None::<String>);
    let mut rejection = use_signal(|| None::<String>);
    let mut dragging = use_signal(|| false);

    let slot = use_hook(PreviewSlot::default);
    use_drop({
        let slot = slot.clone();
        move || slot.replace(None)
    });

    let reset = {
        let store = store.clone();
        let slot = slot.clone();
        move |_: MouseEvent| {
            store.clear_results();
            slot.replace(None);
            preview_url.set(None);
            file_label.set(None);
            rejection.set(None);
        }
    };

    let analyze = use_callback(move |files: Arc<dyn FileEngine>| {
        let store = store.clone();
        let cancel = cancel.clone();
        let slot = slot.clone();
        spawn(async move {
            let Some(name) = files.files().into_iter().next() else {
                return;
            };
            let content_type = content_type_for(&name);
            let size = files.file_size(&name).await.unwrap_or(0);
            if let Err(e) = validate_metadata(content_type, size) {
                tracing::info!(file = %name, size, "image rejected before reading: {e}");
                rejection.set(Some(e.to_string()));
                return;
            }
            rejection.set(None);

            let Some(bytes) = files.read_file(&name).await else {
                rejection.set(Some(format!("Could not read {name}")));
                return;
            };

            let url = preview::object_url(&bytes, content_type);
            slot.replace(url.clone());
            preview_url.set(url);
            file_label.set(Some(format!("{name} ({})", human_size(size))));
            store.clear_results();

            let upload = ImageUpload::new(name, Some(content_type), bytes);
            let crop = crop_type();
            let crop = (!crop.is_empty()).then_some(crop.as_str());
            let outcome = match mode() {
                AnalysisKind::Disease => store.detect_disease(upload, crop, &cancel).await.map(|_| ()),
                AnalysisKind::Pest => store.detect_pest(upload, crop, &cancel).await.map(|_| ()),
            };
            if let Err(e) = outcome {
                if let Error::Validation(v) = &e {
                    rejection.set(Some(v.to_string()));
                }
                tracing::debug!("analysis did not complete: {e}");
            }
        });
    });

    let state = crops.read().clone();
    let max = human_size(MAX_IMAGE_BYTES);

    rsx! {
        Card {
            title: "Crop health analysis",
            class: "uploader",
            div {
                class: "uploader-controls",
                div {
                    class: "segmented",
                    for option in [AnalysisKind::Disease, AnalysisKind::Pest] {
                        button {
                            key: "{option:?}",
                            r#type: "button",
                            class: if mode() == option { "segment active" } else { "segment" },
                            onclick: move |_| mode.set(option),
                            {option.label()}
                        }
                    }
                }
                Select {
                    id: "analysis-crop",
                    value: crop_type(),
                    options: options(CROP_TYPES),
                    placeholder: "Any crop",
                    onchange: move |evt: FormEvent| crop_type.set(evt.value()),
                }
            }
            label {
                class: if dragging() { "dropzone dragging" } else { "dropzone" },
                ondragover: move |evt: DragEvent| {
                    evt.prevent_default();
                    dragging.set(true);
                },
                ondragleave: move |_| dragging.set(false),
                ondrop: move |evt: DragEvent| {
                    evt.prevent_default();
                    dragging.set(false);
                    if let Some(files) = evt.files() {
                        analyze.call(files);
                    }
                },
                input {
                    r#type: "file",
                    accept: "image/*",
                    class: "dropzone-input",
                    onchange: move |evt: FormEvent| {
                        if let Some(files) = evt.files() {
                            analyze.call(files);
                        }
                    },
                }
                if let Some(url) = preview_url() {
                    img { class: "dropzone-preview", src: "{url}", alt: "Selected image" }
                } else {
                    Icon { icon: FaCloudArrowUp, width: 32, height: 32 }
                    p { "Drop a leaf photo here or click to choose one" }
                    p { class: "dropzone-hint", "JPEG, PNG or WebP up to {max}" }
                }
            }
            if let Some(label) = file_label() {
                p { class: "uploader-file", "{label}" }
            }
            if let Some(message) = rejection() {
                p { class: "form-error", "{message}" }
            }
            if state.loading {
                Spinner { label: "Analyzing image..." }
            }
            if let Some(result) = state.disease.clone() {
                div {
                    class: if result.is_healthy { "analysis-result healthy" } else { "analysis-result diseased" },
                    div {
                        class: "analysis-headline",
                        if result.is_healthy {
                            Icon { icon: FaCircleCheck, width: 20, height: 20 }
                        } else {
                            Icon { icon: FaTriangleExclamation, width: 20, height: 20 }
                        }
                        strong { {result.headline()} }
                        span { class: "confidence", {format!("{}% confidence", result.confidence_percent())} }
                    }
                    if let Some(severity) = result.severity.clone() {
                        p { "Severity: {severity}" }
                    }
                    if let Some(recommendation) = result.recommendation.clone() {
                        p { class: "analysis-recommendation", "{recommendation}" }
                    }
                    if !result.treatments.is_empty() {
                        ul {
                            class: "analysis-treatments",
                            for treatment in result.treatments.clone() {
                                li { key: "{treatment}", "{treatment}" }
                            }
                        }
                    }
                }
            }
            if let Some(result) = state.pest.clone() {
                div {
                    class: if result.detected { "analysis-result diseased" } else { "analysis-result healthy" },
                    div {
                        class: "analysis-headline",
                        Icon { icon: FaBug, width: 20, height: 20 }
                        strong {
                            {if result.detected { result.pest.clone().unwrap_or_else(|| "Pest detected".to_string()) } else { "No pests detected".to_string() }}
                        }
                        span { class: "confidence", {format!("{}% confidence", result.confidence_percent())} }
                    }
                    if let Some(severity) = result.severity.clone() {
                        p { "Severity: {severity}" }
                    }
                    if let Some(recommendation) = result.recommendation.clone() {
                        p { class: "analysis-recommendation", "{recommendation}" }
                    }
                }
            }
            if state.disease.is_some() || state.pest.is_some() {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: reset,
                    "Analyze another image"
                }
            }
        }
    }
}

