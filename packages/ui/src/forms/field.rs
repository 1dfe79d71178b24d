use api::Field;
use dioxus::prelude::*;
use store::display::hectares;
use store::forms::FieldForm;
use store::FormErrors;

use crate::cell::use_cancel_token;
use crate::components::{Button, ButtonVariant, Card, Input, Select};
use crate::context::{use_field_store, use_fields};
use crate::forms::{error_for, options, FormRow, CROP_TYPES, IRRIGATION_TYPES, SOIL_TYPES};
use crate::icons::{FaPen, FaPlus, FaTrash};
use crate::views::ConfirmDialog;
use crate::widgets::{LoadError, LoadingRow};
use crate::Icon;

/// Create form, or edit form when `field` is given.
#[component]
pub fn FieldEditor(
    #[props(default)] field: Option<Field>,
    on_saved: EventHandler<Field>,
    on_cancel: EventHandler<()>,
) -> Element {
    let store = use_field_store();
    let cancel = use_cancel_token();
    let editing_id = field.as_ref().map(|f| f.id.clone());
    let mut form = use_signal(|| field.as_ref().map(FieldForm::from_field).unwrap_or_default());
    let mut errors = use_signal(FormErrors::default);
    let mut saving = use_signal(|| false);

    let is_edit = editing_id.is_some();
    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let input = match form.read().validate() {
            Ok(input) => input,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(FormErrors::default());
        saving.set(true);
        let store = store.clone();
        let cancel = cancel.clone();
        let editing_id = editing_id.clone();
        spawn(async move {
            let result = match editing_id {
                Some(id) => store.update_field(&id, &input, &cancel).await,
                None => store.add_field(&input, &cancel).await,
            };
            saving.set(false);
            match result {
                Ok(field) => on_saved.call(field),
                Err(e) => tracing::debug!("field not saved: {e}"),
            }
        });
    };

    rsx! {
        Card {
            title: if is_edit { "Edit field".to_string() } else { "Add field".to_string() },
            class: "field-editor",
            form {
                class: "form",
                onsubmit: onsubmit,
                FormRow {
                    html_for: "field-name",
                    label: "Name",
                    error: error_for(errors, "name"),
                    Input {
                        id: "field-name",
                        placeholder: "North Field",
                        value: form.read().name.clone(),
                        invalid: errors.read().get("name").is_some(),
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                }
                div {
                    class: "form-pair",
                    FormRow {
                        html_for: "field-area",
                        label: "Area (ha)",
                        error: error_for(errors, "area"),
                        Input {
                            id: "field-area",
                            r#type: "number",
                            step: "0.01",
                            value: form.read().area.clone(),
                            invalid: errors.read().get("area").is_some(),
                            oninput: move |evt: FormEvent| form.write().area = evt.value(),
                        }
                    }
                    FormRow {
                        html_for: "field-crop",
                        label: "Crop",
                        error: error_for(errors, "crop_type"),
                        Select {
                            id: "field-crop",
                            value: form.read().crop_type.clone(),
                            options: options(CROP_TYPES),
                            placeholder: "Select a crop",
                            invalid: errors.read().get("crop_type").is_some(),
                            onchange: move |evt: FormEvent| form.write().crop_type = evt.value(),
                        }
                    }
                }
                div {
                    class: "form-pair",
                    FormRow {
                        html_for: "field-soil",
                        label: "Soil type",
                        Select {
                            id: "field-soil",
                            value: form.read().soil_type.clone(),
                            options: options(SOIL_TYPES),
                            placeholder: "Unknown",
                            onchange: move |evt: FormEvent| form.write().soil_type = evt.value(),
                        }
                    }
                    FormRow {
                        html_for: "field-irrigation",
                        label: "Irrigation",
                        Select {
                            id: "field-irrigation",
                            value: form.read().irrigation_type.clone(),
                            options: options(IRRIGATION_TYPES),
                            placeholder: "Unknown",
                            onchange: move |evt: FormEvent| form.write().irrigation_type = evt.value(),
                        }
                    }
                }
                div {
                    class: "form-pair",
                    FormRow {
                        html_for: "field-latitude",
                        label: "Latitude",
                        error: error_for(errors, "latitude"),
                        Input {
                            id: "field-latitude",
                            r#type: "number",
                            step: "any",
                            value: form.read().latitude.clone(),
                            invalid: errors.read().get("latitude").is_some(),
                            oninput: move |evt: FormEvent| form.write().latitude = evt.value(),
                        }
                    }
                    FormRow {
                        html_for: "field-longitude",
                        label: "Longitude",
                        error: error_for(errors, "longitude"),
                        Input {
                            id: "field-longitude",
                            r#type: "number",
                            step: "any",
                            value: form.read().longitude.clone(),
                            invalid: errors.read().get("longitude").is_some(),
                            oninput: move |evt: FormEvent| form.write().longitude = evt.value(),
                        }
                    }
                }
                div {
                    class: "form-actions",
                    Button {
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else if is_edit { "Save changes" } else { "Add field" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: saving(),
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

/// All fields with open, edit and delete actions. Loads the list on mount.
#[component]
pub fn FieldList(
    on_open: EventHandler<String>,
    on_edit: EventHandler<String>,
    on_add: EventHandler<()>,
) -> Element {
    let store = use_field_store();
    let fields = use_fields();
    let cancel = use_cancel_token();
    let mut pending_delete = use_signal(|| None::<Field>);
    let mut deleting = use_signal(|| false);

    let _loader = use_resource({
        let store = store.clone();
        let cancel = cancel.clone();
        move || {
            let store = store.clone();
            let cancel = cancel.clone();
            async move { store.fetch_fields(&cancel).await }
        }
    });

    let confirm_delete = move |_: ()| {
        let Some(field) = pending_delete() else {
            return;
        };
        deleting.set(true);
        let store = store.clone();
        let cancel = cancel.clone();
        spawn(async move {
            if let Err(e) = store.delete_field(&field.id, &cancel).await {
                tracing::debug!(id = %field.id, "field not deleted: {e}");
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    };

    let state = fields.read().clone();
    // Errors after the first load are toasted; the table stays.
    let load_error = state.error.clone().filter(|_| state.fields.is_empty());

    rsx! {
        Card {
            title: "Fields",
            class: "field-list",
            div {
                class: "field-list-toolbar",
                span { class: "field-list-count", {format!("{} fields, {}", state.fields.len(), hectares(state.summary().total_area))} }
                Button {
                    onclick: move |_| on_add.call(()),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Add field"
                }
            }
            if state.loading && state.fields.is_empty() {
                LoadingRow {}
            } else if let Some(message) = load_error {
                LoadError { message: message }
            } else if state.fields.is_empty() {
                p { class: "widget-empty", "No fields yet. Add your first field to get started." }
            } else {
                table {
                    class: "field-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Crop" }
                            th { class: "num", "Area" }
                            th { "Soil" }
                            th { "Irrigation" }
                            th {}
                        }
                    }
                    tbody {
                        for field in state.fields.clone() {
                            tr {
                                key: "{field.id}",
                                td {
                                    a {
                                        href: "#",
                                        onclick: {
                                            let id = field.id.clone();
                                            move |evt: MouseEvent| {
                                                evt.prevent_default();
                                                on_open.call(id.clone());
                                            }
                                        },
                                        "{field.name}"
                                    }
                                }
                                td { "{field.crop_type}" }
                                td { class: "num", {hectares(field.area)} }
                                td { {field.soil_type.clone().unwrap_or_else(|| "-".to_string())} }
                                td { {field.irrigation_type.clone().unwrap_or_else(|| "-".to_string())} }
                                td {
                                    class: "row-actions",
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Edit",
                                        onclick: {
                                            let id = field.id.clone();
                                            move |_| on_edit.call(id.clone())
                                        },
                                        Icon { icon: FaPen, width: 12, height: 12 }
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Delete",
                                        onclick: {
                                            let field = field.clone();
                                            move |_| pending_delete.set(Some(field.clone()))
                                        },
                                        Icon { icon: FaTrash, width: 12, height: 12 }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        if let Some(field) = pending_delete() {
            ConfirmDialog {
                title: "Delete field",
                message: format!("Delete \"{}\"? This cannot be undone.", field.name),
                busy: deleting(),
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
