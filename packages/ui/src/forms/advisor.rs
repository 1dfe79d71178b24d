//! Crop recommendation and yield prediction panels.

use dioxus::prelude::*;
use store::forms::{RecommendationForm, YieldForm};
use store::FormErrors;

use crate::cell::use_cancel_token;
use crate::components::{Button, ButtonVariant, Card, Input, Select};
use crate::context::{use_crop_store, use_crops, use_fields};
use crate::forms::{error_for, options, FormRow, CROP_TYPES, SOIL_TYPES};

const SEASONS: &[&str] = &["Kharif", "Rabi", "Zaid"];

/// One numeric input of the recommendation form.
#[component]
fn NutrientInput(
    id: String,
    label: String,
    value: String,
    error: Option<String>,
    #[props(default = "any".to_string())] step: String,
    oninput: EventHandler<String>,
) -> Element {
    let invalid = error.is_some();
    rsx! {
        FormRow {
            html_for: id.clone(),
            label: label,
            error: error,
            Input {
                id: id,
                r#type: "number",
                step: step,
                value: value,
                invalid: invalid,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}

/// Soil and climate readings in, ranked crops out.
#[component]
pub fn RecommendationPanel() -> Element {
    let store = use_crop_store();
    let crops = use_crops();
    let cancel = use_cancel_token();
    let mut form = use_signal(RecommendationForm::default);
    let mut errors = use_signal(FormErrors::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let request = match form.read().validate() {
            Ok(request) => request,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(FormErrors::default());
        let store = store.clone();
        let cancel = cancel.clone();
        spawn(async move {
            if let Err(e) = store.recommend_crops(&request, &cancel).await {
                tracing::debug!("no recommendations: {e}");
            }
        });
    };

    let state = crops.read().clone();

    rsx! {
        Card {
            title: "Crop recommendation",
            class: "advisor-card",
            form {
                class: "form form-grid",
                onsubmit: onsubmit,
                NutrientInput {
                    id: "rec-nitrogen",
                    label: "Nitrogen (kg/ha)",
                    value: form.read().nitrogen.clone(),
                    error: error_for(errors, "nitrogen"),
                    oninput: move |v: String| form.write().nitrogen = v,
                }
                NutrientInput {
                    id: "rec-phosphorus",
                    label: "Phosphorus (kg/ha)",
                    value: form.read().phosphorus.clone(),
                    error: error_for(errors, "phosphorus"),
                    oninput: move |v: String| form.write().phosphorus = v,
                }
                NutrientInput {
                    id: "rec-potassium",
                    label: "Potassium (kg/ha)",
                    value: form.read().potassium.clone(),
                    error: error_for(errors, "potassium"),
                    oninput: move |v: String| form.write().potassium = v,
                }
                NutrientInput {
                    id: "rec-temperature",
                    label: "Temperature (°C)",
                    value: form.read().temperature.clone(),
                    error: error_for(errors, "temperature"),
                    oninput: move |v: String| form.write().temperature = v,
                }
                NutrientInput {
                    id: "rec-humidity",
                    label: "Humidity (%)",
                    value: form.read().humidity.clone(),
                    error: error_for(errors, "humidity"),
                    oninput: move |v: String| form.write().humidity = v,
                }
                NutrientInput {
                    id: "rec-ph",
                    label: "Soil pH",
                    value: form.read().ph.clone(),
                    error: error_for(errors, "ph"),
                    step: "0.1",
                    oninput: move |v: String| form.write().ph = v,
                }
                NutrientInput {
                    id: "rec-rainfall",
                    label: "Rainfall (mm)",
                    value: form.read().rainfall.clone(),
                    error: error_for(errors, "rainfall"),
                    oninput: move |v: String| form.write().rainfall = v,
                }
                div {
                    class: "form-actions",
                    Button {
                        r#type: "submit",
                        disabled: state.loading,
                        if state.loading { "Analyzing..." } else { "Get recommendations" }
                    }
                }
            }
            if !state.recommendations.is_empty() {
                ol {
                    class: "recommendation-list",
                    for rec in state.recommendations.clone() {
                        li {
                            key: "{rec.crop}",
                            class: "recommendation",
                            div {
                                class: "recommendation-header",
                                strong { "{rec.crop}" }
                                span { class: "confidence", {format!("{}% match", rec.confidence_percent())} }
                            }
                            div {
                                class: "confidence-bar",
                                div {
                                    class: "confidence-fill",
                                    style: format!("width: {}%", rec.confidence_percent()),
                                }
                            }
                            if let Some(reason) = rec.reason.clone() {
                                p { class: "recommendation-reason", "{reason}" }
                            }
                            if let Some(expected) = rec.expected_yield.clone() {
                                p { class: "recommendation-yield", "Expected yield: {expected}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Yield estimate for a crop and area, optionally pre-filled from a field.
#[component]
pub fn YieldPanel() -> Element {
    let store = use_crop_store();
    let crops = use_crops();
    let fields = use_fields();
    let cancel = use_cancel_token();
    let mut form = use_signal(YieldForm::default);
    let mut errors = use_signal(FormErrors::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let request = match form.read().validate() {
            Ok(request) => request,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(FormErrors::default());
        let store = store.clone();
        let cancel = cancel.clone();
        spawn(async move {
            if let Err(e) = store.predict_yield(&request, &cancel).await {
                tracing::debug!("no yield prediction: {e}");
            }
        });
    };

    let pick_field = move |evt: FormEvent| {
        let id = evt.value();
        let picked = fields.read().find(&id).cloned();
        match picked {
            Some(field) => form.set(YieldForm::from_field(&field)),
            None => form.write().field_id.clear(),
        }
    };

    let field_options: Vec<(String, String)> = fields
        .read()
        .fields
        .iter()
        .map(|f| (f.id.clone(), f.name.clone()))
        .collect();
    let state = crops.read().clone();

    rsx! {
        Card {
            title: "Yield prediction",
            class: "advisor-card",
            form {
                class: "form",
                onsubmit: onsubmit,
                if !field_options.is_empty() {
                    FormRow {
                        html_for: "yield-field",
                        label: "Field",
                        Select {
                            id: "yield-field",
                            value: form.read().field_id.clone(),
                            options: field_options,
                            placeholder: "Enter details manually",
                            onchange: pick_field,
                        }
                    }
                }
                div {
                    class: "form-pair",
                    FormRow {
                        html_for: "yield-crop",
                        label: "Crop",
                        error: error_for(errors, "crop_type"),
                        Select {
                            id: "yield-crop",
                            value: form.read().crop_type.clone(),
                            options: options(CROP_TYPES),
                            placeholder: "Select a crop",
                            invalid: errors.read().get("crop_type").is_some(),
                            onchange: move |evt: FormEvent| form.write().crop_type = evt.value(),
                        }
                    }
                    FormRow {
                        html_for: "yield-area",
                        label: "Area (ha)",
                        error: error_for(errors, "area"),
                        Input {
                            id: "yield-area",
                            r#type: "number",
                            step: "0.01",
                            value: form.read().area.clone(),
                            invalid: errors.read().get("area").is_some(),
                            oninput: move |evt: FormEvent| form.write().area = evt.value(),
                        }
                    }
                }
                div {
                    class: "form-pair",
                    FormRow {
                        html_for: "yield-season",
                        label: "Season",
                        Select {
                            id: "yield-season",
                            value: form.read().season.clone(),
                            options: options(SEASONS),
                            placeholder: "Any",
                            onchange: move |evt: FormEvent| form.write().season = evt.value(),
                        }
                    }
                    FormRow {
                        html_for: "yield-soil",
                        label: "Soil type",
                        Select {
                            id: "yield-soil",
                            value: form.read().soil_type.clone(),
                            options: options(SOIL_TYPES),
                            placeholder: "Unknown",
                            onchange: move |evt: FormEvent| form.write().soil_type = evt.value(),
                        }
                    }
                }
                div {
                    class: "form-actions",
                    Button {
                        r#type: "submit",
                        disabled: state.loading,
                        if state.loading { "Predicting..." } else { "Predict yield" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            form.set(YieldForm::default());
                            errors.set(FormErrors::default());
                        },
                        "Reset"
                    }
                }
            }
            if let Some(prediction) = state.yield_prediction.clone() {
                div {
                    class: "yield-result",
                    span { class: "yield-value", {format!("{:.1} {}", prediction.predicted_yield, prediction.unit)} }
                    if let Some(confidence) = prediction.confidence {
                        span { class: "confidence", {format!("{:.0}% confidence", if confidence <= 1.0 { confidence * 100.0 } else { confidence })} }
                    }
                    if !prediction.factors.is_empty() {
                        ul {
                            class: "yield-factors",
                            for factor in prediction.factors.clone() {
                                li { key: "{factor}", "{factor}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
