use dioxus::prelude::*;
use store::forms::ProfileForm;
use store::FormErrors;

use crate::cell::use_cancel_token;
use crate::components::{Button, Card, Input};
use crate::context::{use_auth, use_auth_store};
use crate::forms::{error_for, FormRow};

/// Account and farm details of the signed-in user.
#[component]
pub fn ProfileEditor() -> Element {
    let auth = use_auth_store();
    let state = use_auth();
    let cancel = use_cancel_token();
    let mut form = use_signal(|| {
        state
            .peek()
            .user
            .as_ref()
            .map(ProfileForm::from_user)
            .unwrap_or_default()
    });
    let mut errors = use_signal(FormErrors::default);
    let mut saving = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let update = match form.read().validate() {
            Ok(update) => update,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(FormErrors::default());
        saving.set(true);
        let auth = auth.clone();
        let cancel = cancel.clone();
        spawn(async move {
            match auth.update_profile(&update, &cancel).await {
                Ok(user) => form.set(ProfileForm::from_user(&user)),
                Err(e) => tracing::debug!("profile not saved: {e}"),
            }
            saving.set(false);
        });
    };

    let username = state
        .read()
        .user
        .as_ref()
        .map(|u| u.username.clone())
        .unwrap_or_default();

    rsx! {
        Card {
            title: "Profile",
            class: "profile-editor",
            p { class: "profile-username", "Signed in as " strong { "{username}" } }
            form {
                class: "form",
                onsubmit: onsubmit,
                div {
                    class: "form-pair",
                    FormRow {
                        html_for: "profile-first-name",
                        label: "First name",
                        Input {
                            id: "profile-first-name",
                            value: form.read().first_name.clone(),
                            oninput: move |evt: FormEvent| form.write().first_name = evt.value(),
                        }
                    }
                    FormRow {
                        html_for: "profile-last-name",
                        label: "Last name",
                        Input {
                            id: "profile-last-name",
                            value: form.read().last_name.clone(),
                            oninput: move |evt: FormEvent| form.write().last_name = evt.value(),
                        }
                    }
                }
                FormRow {
                    html_for: "profile-email",
                    label: "Email",
                    error: error_for(errors, "email"),
                    Input {
                        id: "profile-email",
                        r#type: "email",
                        value: form.read().email.clone(),
                        invalid: errors.read().get("email").is_some(),
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                }
                FormRow {
                    html_for: "profile-farm-name",
                    label: "Farm name",
                    Input {
                        id: "profile-farm-name",
                        value: form.read().farm_name.clone(),
                        oninput: move |evt: FormEvent| form.write().farm_name = evt.value(),
                    }
                }
                div {
                    class: "form-pair",
                    FormRow {
                        html_for: "profile-location",
                        label: "Location",
                        Input {
                            id: "profile-location",
                            value: form.read().location.clone(),
                            oninput: move |evt: FormEvent| form.write().location = evt.value(),
                        }
                    }
                    FormRow {
                        html_for: "profile-phone",
                        label: "Phone",
                        error: error_for(errors, "phone"),
                        Input {
                            id: "profile-phone",
                            r#type: "tel",
                            value: form.read().phone.clone(),
                            invalid: errors.read().get("phone").is_some(),
                            oninput: move |evt: FormEvent| form.write().phone = evt.value(),
                        }
                    }
                }
                div {
                    class: "form-pair",
                    FormRow {
                        html_for: "profile-farm-size",
                        label: "Farm size (ha)",
                        error: error_for(errors, "farm_size"),
                        Input {
                            id: "profile-farm-size",
                            r#type: "number",
                            step: "0.01",
                            value: form.read().farm_size.clone(),
                            invalid: errors.read().get("farm_size").is_some(),
                            oninput: move |evt: FormEvent| form.write().farm_size = evt.value(),
                        }
                    }
                    FormRow {
                        html_for: "profile-crops",
                        label: "Crops (comma separated)",
                        Input {
                            id: "profile-crops",
                            placeholder: "Wheat, Rice",
                            value: form.read().crops.clone(),
                            oninput: move |evt: FormEvent| form.write().crops = evt.value(),
                        }
                    }
                }
                div {
                    class: "form-actions",
                    Button {
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save profile" }
                    }
                }
            }
        }
    }
}
