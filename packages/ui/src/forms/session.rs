//! Sign-in and sign-up cards. Neither navigates on success: the route guard
//! moves the user on once the auth state flips.

use dioxus::prelude::*;
use store::forms::{LoginForm, RegisterForm};
use store::FormErrors;

use crate::cell::use_cancel_token;
use crate::components::{Button, Card, Input};
use crate::context::{use_auth, use_auth_store};
use crate::forms::{error_for, FormRow};

#[component]
pub fn LoginCard(#[props(default)] on_register: EventHandler<()>) -> Element {
    let auth = use_auth_store();
    let state = use_auth();
    let cancel = use_cancel_token();
    let mut form = use_signal(LoginForm::default);
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
        let auth = auth.clone();
        let cancel = cancel.clone();
        spawn(async move {
            if let Err(e) = auth.login(&request, &cancel).await {
                tracing::debug!("login rejected: {e}");
            }
        });
    };

    let submitting = state.read().submitting;

    rsx! {
        Card {
            title: "Sign in",
            class: "auth-card",
            form {
                class: "form",
                onsubmit: onsubmit,
                FormRow {
                    html_for: "login-username",
                    label: "Username",
                    error: error_for(errors, "username"),
                    Input {
                        id: "login-username",
                        value: form.read().username.clone(),
                        invalid: errors.read().get("username").is_some(),
                        oninput: move |evt: FormEvent| form.write().username = evt.value(),
                    }
                }
                FormRow {
                    html_for: "login-password",
                    label: "Password",
                    error: error_for(errors, "password"),
                    Input {
                        id: "login-password",
                        r#type: "password",
                        value: form.read().password.clone(),
                        invalid: errors.read().get("password").is_some(),
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }
                }
                if let Some(message) = state.read().error.clone() {
                    p { class: "form-error", "{message}" }
                }
                Button {
                    r#type: "submit",
                    class: "form-submit",
                    disabled: submitting,
                    if submitting { "Signing in..." } else { "Sign in" }
                }
            }
            p {
                class: "auth-switch",
                "No account yet? "
                a {
                    href: "#",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_register.call(());
                    },
                    "Register"
                }
            }
        }
    }
}

#[component]
pub fn RegisterCard(#[props(default)] on_login: EventHandler<()>) -> Element {
    let auth = use_auth_store();
    let state = use_auth();
    let cancel = use_cancel_token();
    let mut form = use_signal(RegisterForm::default);
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
        let auth = auth.clone();
        let cancel = cancel.clone();
        spawn(async move {
            if let Err(e) = auth.register(&request, &cancel).await {
                tracing::debug!("registration rejected: {e}");
            }
        });
    };

    let submitting = state.read().submitting;

    rsx! {
        Card {
            title: "Create account",
            class: "auth-card",
            form {
                class: "form",
                onsubmit: onsubmit,
                FormRow {
                    html_for: "register-username",
                    label: "Username",
                    error: error_for(errors, "username"),
                    Input {
                        id: "register-username",
                        value: form.read().username.clone(),
                        invalid: errors.read().get("username").is_some(),
                        oninput: move |evt: FormEvent| form.write().username = evt.value(),
                    }
                }
                FormRow {
                    html_for: "register-email",
                    label: "Email",
                    error: error_for(errors, "email"),
                    Input {
                        id: "register-email",
                        r#type: "email",
                        value: form.read().email.clone(),
                        invalid: errors.read().get("email").is_some(),
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                }
                div {
                    class: "form-pair",
                    FormRow {
                        html_for: "register-password",
                        label: "Password",
                        error: error_for(errors, "password"),
                        Input {
                            id: "register-password",
                            r#type: "password",
                            value: form.read().password.clone(),
                            invalid: errors.read().get("password").is_some(),
                            oninput: move |evt: FormEvent| form.write().password = evt.value(),
                        }
                    }
                    FormRow {
                        html_for: "register-password-confirm",
                        label: "Confirm password",
                        error: error_for(errors, "password_confirm"),
                        Input {
                            id: "register-password-confirm",
                            r#type: "password",
                            value: form.read().password_confirm.clone(),
                            invalid: errors.read().get("password_confirm").is_some(),
                            oninput: move |evt: FormEvent| form.write().password_confirm = evt.value(),
                        }
                    }
                }
                FormRow {
                    html_for: "register-farm",
                    label: "Farm name (optional)",
                    Input {
                        id: "register-farm",
                        value: form.read().farm_name.clone(),
                        oninput: move |evt: FormEvent| form.write().farm_name = evt.value(),
                    }
                }
                div {
                    class: "form-pair",
                    FormRow {
                        html_for: "register-location",
                        label: "Location (optional)",
                        Input {
                            id: "register-location",
                            value: form.read().location.clone(),
                            oninput: move |evt: FormEvent| form.write().location = evt.value(),
                        }
                    }
                    FormRow {
                        html_for: "register-phone",
                        label: "Phone (optional)",
                        Input {
                            id: "register-phone",
                            r#type: "tel",
                            value: form.read().phone.clone(),
                            oninput: move |evt: FormEvent| form.write().phone = evt.value(),
                        }
                    }
                }
                if let Some(message) = state.read().error.clone() {
                    p { class: "form-error", "{message}" }
                }
                Button {
                    r#type: "submit",
                    class: "form-submit",
                    disabled: submitting,
                    if submitting { "Creating account..." } else { "Register" }
                }
            }
            p {
                class: "auth-switch",
                "Already registered? "
                a {
                    href: "#",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_login.call(());
                    },
                    "Sign in"
                }
            }
        }
    }
}
