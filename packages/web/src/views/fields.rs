//! Field list, detail and the create/edit forms.

use dioxus::prelude::*;
use store::display::hectares;
use ui::components::{Button, ButtonVariant, Card, FullScreenSpinner};
use ui::forms::{FieldEditor, FieldList};
use ui::views::ConfirmDialog;
use ui::widgets::WeatherCard;
use ui::{use_cancel_token, use_field_store, use_fields};

use crate::Route;

#[component]
pub fn Fields() -> Element {
    let nav = use_navigator();
    rsx! {
        div {
            class: "page-header",
            h1 { "My Fields" }
        }
        FieldList {
            on_open: move |id: String| {
                nav.push(Route::FieldDetail { id });
            },
            on_edit: move |id: String| {
                nav.push(Route::FieldEdit { id });
            },
            on_add: move |_| {
                nav.push(Route::FieldNew {});
            },
        }
    }
}

#[component]
pub fn FieldNew() -> Element {
    let nav = use_navigator();
    rsx! {
        FieldEditor {
            on_saved: move |field: api::Field| {
                nav.replace(Route::FieldDetail { id: field.id });
            },
            on_cancel: move |_| {
                nav.push(Route::Fields {});
            },
        }
    }
}

/// Loads `id` into the field store's selection whenever it changes. `id` is
/// the resource's only dependency: store reads go through `peek`.
fn use_selected_field(id: ReadOnlySignal<String>) {
    let store = use_field_store();
    let cancel = use_cancel_token();
    let _loader = use_resource(move || {
        let store = store.clone();
        let cancel = cancel.clone();
        let id = id();
        async move {
            // Show the list entry at once, then refresh from the server
            let cached = store.state().find(&id).cloned();
            store.select_field(cached);
            store.fetch_field(&id, &cancel).await;
        }
    });
}

#[component]
pub fn FieldDetail(id: ReadOnlySignal<String>) -> Element {
    use_selected_field(id);
    let nav = use_navigator();
    let state = use_fields();
    let store = use_field_store();
    let cancel = use_cancel_token();
    let mut confirm = use_signal(|| false);

    let selected = state.read().selected.clone().filter(|f| f.id == id());
    let Some(field) = selected else {
        return if state.read().loading {
            rsx! { FullScreenSpinner {} }
        } else {
            rsx! {
                Card {
                    title: "Field not found",
                    p { "This field does not exist or was deleted." }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            nav.push(Route::Fields {});
                        },
                        "Back to fields"
                    }
                }
            }
        };
    };

    let delete = {
        let field_id = field.id.clone();
        move |_: ()| {
            let store = store.clone();
            let cancel = cancel.clone();
            let field_id = field_id.clone();
            spawn(async move {
                match store.delete_field(&field_id, &cancel).await {
                    Ok(()) => {
                        nav.replace(Route::Fields {});
                    }
                    Err(e) => {
                        tracing::debug!(id = %field_id, "field not deleted: {e}");
                        confirm.set(false);
                    }
                }
            });
        }
    };

    let coordinates = field.coordinates();

    rsx! {
        div {
            class: "page-header",
            h1 { "{field.name}" }
            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: {
                        let id = field.id.clone();
                        move |_| {
                            nav.push(Route::FieldEdit { id: id.clone() });
                        }
                    },
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| confirm.set(true),
                    "Delete"
                }
            }
        }
        div {
            class: "page-grid",
            Card {
                title: "Details",
                dl {
                    class: "irrigation-details",
                    dt { "Crop" }
                    dd { "{field.crop_type}" }
                    dt { "Area" }
                    dd { {hectares(field.area)} }
                    dt { "Soil" }
                    dd { {field.soil_type.clone().unwrap_or_else(|| "Unknown".to_string())} }
                    dt { "Irrigation" }
                    dd { {field.irrigation_type.clone().unwrap_or_else(|| "Unknown".to_string())} }
                    if let Some((lat, lon)) = coordinates {
                        dt { "Location" }
                        dd { "{lat:.4}, {lon:.4}" }
                    }
                    if let Some(created) = field.created_at {
                        dt { "Added" }
                        dd { {created.format("%b %-d, %Y").to_string()} }
                    }
                }
            }
            if let Some((latitude, longitude)) = coordinates {
                WeatherCard {
                    location: api::Location::Coordinates { latitude, longitude },
                }
            }
        }
        if confirm() {
            ConfirmDialog {
                title: "Delete field",
                message: format!("Delete \"{}\"? This cannot be undone.", field.name),
                busy: state.read().loading,
                on_confirm: delete,
                on_cancel: move |_| confirm.set(false),
            }
        }
    }
}

#[component]
pub fn FieldEdit(id: ReadOnlySignal<String>) -> Element {
    use_selected_field(id);
    let nav = use_navigator();
    let state = use_fields();

    let selected = state.read().selected.clone().filter(|f| f.id == id());
    match selected {
        Some(field) => rsx! {
            FieldEditor {
                // Fresh form per record
                key: "{field.id}",
                field: field,
                on_saved: move |saved: api::Field| {
                    nav.replace(Route::FieldDetail { id: saved.id });
                },
                on_cancel: move |_| {
                    nav.push(Route::FieldDetail { id: id() });
                },
            }
        },
        None if state.read().loading => rsx! { FullScreenSpinner {} },
        None => rsx! {
            Card {
                title: "Field not found",
                p { "This field does not exist or was deleted." }
            }
        },
    }
}
