//! # Forms
//!
//! Inputs hold raw text in a [`store::forms`] value; submitting runs its
//! `validate()` and either shows the per-input messages or hands the payload
//! to a store. Nothing is sent while a form has errors.
//!
//! | Component | Store call |
//! |-----------|------------|
//! | [`LoginCard`] | `AuthStore::login` |
//! | [`RegisterCard`] | `AuthStore::register` |
//! | [`FieldEditor`] | `FieldStore::add_field` / `update_field` |
//! | [`FieldList`] | `FieldStore::fetch_fields` / `delete_field` |
//! | [`ProfileEditor`] | `AuthStore::update_profile` |
//! | [`RecommendationPanel`] | `CropStore::recommend_crops` |
//! | [`YieldPanel`] | `CropStore::predict_yield` |
//! | [`DiseaseUploader`] | `CropStore::detect_disease` / `detect_pest` |

mod advisor;
mod disease;
mod field;
mod preview;
mod profile;
mod session;

pub use advisor::{RecommendationPanel, YieldPanel};
pub use disease::{AnalysisKind, DiseaseUploader};
pub use field::{FieldEditor, FieldList};
pub use profile::ProfileEditor;
pub use session::{LoginCard, RegisterCard};

use dioxus::prelude::*;
use store::FormErrors;

use crate::components::{FieldError, Label};

const FORMS_CSS: Asset = asset!("/assets/styling/forms.css");

pub(crate) const CROP_TYPES: &[&str] = &[
    "Wheat", "Rice", "Maize", "Cotton", "Sugarcane", "Soybean", "Pulses", "Vegetables",
];
pub(crate) const SOIL_TYPES: &[&str] = &["Alluvial", "Black", "Red", "Laterite", "Sandy", "Clay", "Loamy"];
pub(crate) const IRRIGATION_TYPES: &[&str] = &["Drip", "Sprinkler", "Flood", "Furrow", "Rainfed"];

/// `(value, label)` pairs for a [`Select`](crate::components::Select).
pub(crate) fn options(values: &[&str]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|v| (v.to_string(), v.to_string()))
        .collect()
}

/// The message recorded for `field`, if any.
pub(crate) fn error_for(errors: Signal<FormErrors>, field: &str) -> Option<String> {
    errors.read().get(field).map(str::to_string)
}

/// Label, input and inline error for one form input.
#[component]
pub(crate) fn FormRow(
    html_for: String,
    label: String,
    #[props(default)] error: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        document::Stylesheet { href: FORMS_CSS }
        div {
            class: "form-row",
            Label { html_for: html_for, "{label}" }
            {children}
            FieldError { message: error }
        }
    }
}
