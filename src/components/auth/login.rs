use dioxus::prelude::*;

use crate::api;
use crate::components::common::ErrorMessage;
use crate::state::{dispatch, ShellEvent};

#[component]
pub fn LoginPage() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut is_loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let mut login = move |_| {
        let email_val = email();
        let password_val = password();

        if email_val.is_empty() || password_val.is_empty() {
            error.set(Some("Please fill in all fields".to_string()));
            return;
        }

        is_loading.set(true);
        error.set(None);

        spawn(async move {
            match api::auth::login(&email_val, &password_val).await {
                Ok(response) => {
                    dispatch(ShellEvent::LoginSucceeded { role: response.role });
                }
                Err(e) => {
                    error.set(Some(format!("Login failed: {}", e)));
                }
            }
            is_loading.set(false);
        });
    };

    rsx! {
        div { class: "auth-screen",
            div { class: "auth-card",
                div { class: "auth-header",
                    h1 { "MobileRecharge" }
                    p { class: "muted", "Sign in to your account" }
                }

                if let Some(err) = error.read().as_ref() {
                    ErrorMessage { message: err.clone() }
                }

                form {
                    onsubmit: move |e| {
                        e.prevent_default();
                        login(e);
                    },

                    div { class: "form-field",
                        input {
                            r#type: "email",
                            placeholder: "Email Address",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
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

                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: *is_loading.read(),
                        if *is_loading.read() { "Signing In..." } else { "Sign In" }
                    }
                }

                div { class: "auth-footer",
                    p { class: "muted",
                        "Don't have an account? "
                        button {
                            class: "link-button",
                            onclick: move |_| dispatch(ShellEvent::SwitchToSignup),
                            "Sign Up"
                        }
                    }
                }
            }
        }
    }
}
