use dioxus::prelude::*;

use crate::api;
use crate::components::common::ErrorMessage;
use crate::models::{RegisterRequest, Role};
use crate::state::{dispatch, show_notification, NotificationType, ShellEvent};
use crate::validation::{sanitize_mobile_input, validate_signup, SignupForm};

#[component]
pub fn SignupPage() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut mobile = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut admin_account = use_signal(|| false);
    let mut is_loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let mut signup = move |_| {
        let form = SignupForm {
            name: name(),
            email: email(),
            mobile_number: mobile(),
            password: password(),
            confirm_password: confirm_password(),
            admin_account: admin_account(),
        };

        // All field checks run before any remote call
        if let Err(msg) = validate_signup(&form) {
            error.set(Some(msg));
            return;
        }

        error.set(None);
        is_loading.set(true);

        spawn(async move {
            let role = if form.admin_account { Role::Admin } else { Role::User };
            let request = RegisterRequest {
                name: form.name,
                email: form.email.clone(),
                mobile_number: form.mobile_number,
                password: form.password.clone(),
                role,
            };

            match api::auth::register(&request).await {
                Ok(_) => {
                    if form.admin_account {
                        // Admin accounts go straight to the dashboard
                        match api::auth::login(&form.email, &form.password).await {
                            Ok(_) => {
                                show_notification(
                                    "Admin account created! Redirecting to dashboard...",
                                    NotificationType::Success,
                                );
                                dispatch(ShellEvent::AdminSignupCompleted);
                            }
                            Err(e) => {
                                tracing::warn!("Auto-login after admin signup failed: {}", e);
                                show_notification(
                                    "Account created! Please login to continue.",
                                    NotificationType::Info,
                                );
                                dispatch(ShellEvent::SwitchToLogin);
                            }
                        }
                    } else {
                        show_notification(
                            "Account created successfully! Please login.",
                            NotificationType::Success,
                        );
                        dispatch(ShellEvent::SwitchToLogin);
                    }
                }
                Err(e) => {
                    error.set(Some(format!("Signup failed: {}", e)));
                }
            }
            is_loading.set(false);
        });
    };

    let email_placeholder = if admin_account() {
        "Admin Email (name@admin.com)"
    } else {
        "Email Address"
    };

    rsx! {
        div { class: "auth-screen",
            div { class: "auth-card",
                div { class: "auth-header",
                    h1 { "MobileRecharge" }
                    p { class: "muted", "Create your account" }
                }

                // Account type
                div { class: "account-type",
                    button {
                        r#type: "button",
                        class: if !admin_account() { "account-type-btn active" } else { "account-type-btn" },
                        onclick: move |_| admin_account.set(false),
                        "User Account"
                    }
                    button {
                        r#type: "button",
                        class: if admin_account() { "account-type-btn active-admin" } else { "account-type-btn" },
                        onclick: move |_| admin_account.set(true),
                        "Admin Account"
                    }
                }
                p { class: "muted small centered",
                    if admin_account() {
                        "Admin accounts have access to dashboard and management features"
                    } else {
                        "User accounts can recharge and view history"
                    }
                }

                if let Some(err) = error.read().as_ref() {
                    ErrorMessage { message: err.clone() }
                }

                form {
                    onsubmit: move |e| {
                        e.prevent_default();
                        signup(e);
                    },

                    div { class: "form-field",
                        input {
                            r#type: "text",
                            placeholder: "Full Name",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                    }
                    div { class: "form-field",
                        input {
                            r#type: "email",
                            placeholder: "{email_placeholder}",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-field",
                        input {
                            r#type: "tel",
                            placeholder: "Mobile Number",
                            maxlength: "10",
                            value: "{mobile}",
                            oninput: move |e| mobile.set(sanitize_mobile_input(&e.value())),
                        }
                    }
                    div { class: "form-field",
                        input {
                            r#type: "password",
                            placeholder: "Password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    div { class: "form-field",
                        input {
                            r#type: "password",
                            placeholder: "Confirm Password",
                            value: "{confirm_password}",
                            oninput: move |e| confirm_password.set(e.value()),
                        }
                    }

                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: *is_loading.read(),
                        if *is_loading.read() {
                            "Creating Account..."
                        } else if admin_account() {
                            "Sign Up as Admin"
                        } else {
                            "Sign Up as User"
                        }
                    }
                }

                div { class: "auth-footer",
                    p { class: "muted",
                        "Already have an account? "
                        button {
                            class: "link-button",
                            onclick: move |_| dispatch(ShellEvent::SwitchToLogin),
                            "Login"
                        }
                    }
                }
            }
        }
    }
}
