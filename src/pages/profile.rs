use dioxus::prelude::*;
use tracing::warn;

use crate::api;
use crate::models::{RechargeRecord, UpdateProfileRequest};
use crate::state::{dispatch, show_notification, NotificationType, ShellEvent, SHELL};
use crate::validation::{sanitize_mobile_input, validate_mobile};

struct AccountStats {
    total_recharges: usize,
    total_spent: u32,
}

fn account_stats(history: &[RechargeRecord]) -> AccountStats {
    AccountStats {
        total_recharges: history.len(),
        total_spent: history.iter().map(|r| r.amount).sum(),
    }
}

fn validate_profile(name: &str, email: &str, mobile: &str) -> Result<(), String> {
    if name.trim().is_empty() || email.trim().is_empty() || mobile.trim().is_empty() {
        return Err("All fields are required".to_string());
    }
    if !email.contains('@') || !email.contains('.') {
        return Err("Please enter a valid email address".to_string());
    }
    validate_mobile(mobile)?;
    Ok(())
}

#[component]
pub fn ProfilePage() -> Element {
    let mut editing = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut mobile = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_saving = use_signal(|| false);

    let mut start_editing = move |_| {
        if let Some(profile) = SHELL.read().profile.as_ref() {
            name.set(profile.name.clone());
            email.set(profile.email.clone());
            mobile.set(profile.mobile_number.clone());
        }
        error.set(None);
        editing.set(true);
    };

    let mut save = move |_| {
        if let Err(e) = validate_profile(&name(), &email(), &mobile()) {
            error.set(Some(e));
            return;
        }
        let request = UpdateProfileRequest {
            name: name(),
            email: email(),
            mobile_number: mobile(),
        };
        is_saving.set(true);
        spawn(async move {
            match api::users::update_profile(&request).await {
                Ok(profile) => {
                    dispatch(ShellEvent::ProfileLoaded(profile));
                    show_notification("Profile updated", NotificationType::Success);
                    editing.set(false);
                    error.set(None);
                }
                Err(e) => {
                    warn!("profile update failed: {}", e);
                    error.set(Some(format!("Update failed: {}", e)));
                }
            }
            is_saving.set(false);
        });
    };

    let shell = SHELL.read();
    let stats = account_stats(&shell.history);

    rsx! {
        div { class: "page",
            h1 { "My Profile" }

            if let Some(profile) = shell.profile.clone() {
                div { class: "profile-layout",
                    div { class: "card profile-card",
                        div { class: "avatar avatar-large", "{profile.initial()}" }

                        if editing() {
                            if let Some(message) = error() {
                                div { class: "form-error", "{message}" }
                            }
                            div { class: "form-field",
                                label { "Name" }
                                input {
                                    value: "{name}",
                                    oninput: move |e| name.set(e.value()),
                                }
                            }
                            div { class: "form-field",
                                label { "Email" }
                                input {
                                    r#type: "email",
                                    value: "{email}",
                                    oninput: move |e| email.set(e.value()),
                                }
                            }
                            div { class: "form-field",
                                label { "Mobile Number" }
                                input {
                                    r#type: "tel",
                                    value: "{mobile}",
                                    oninput: move |e| mobile.set(sanitize_mobile_input(&e.value())),
                                }
                            }
                            div { class: "profile-actions",
                                button {
                                    class: "btn btn-primary",
                                    disabled: is_saving(),
                                    onclick: move |e| save(e),
                                    if is_saving() { "Saving..." } else { "Save" }
                                }
                                button {
                                    class: "btn btn-secondary",
                                    onclick: move |_| editing.set(false),
                                    "Cancel"
                                }
                            }
                        } else {
                            h2 { "{profile.name}" }
                            p { class: "muted", "{profile.email}" }
                            p { class: "muted", "{profile.mobile_number}" }
                            span { class: "badge badge-role", "{profile.role.as_str()}" }
                            button {
                                class: "btn btn-secondary btn-block",
                                onclick: move |e| start_editing(e),
                                "Edit Profile"
                            }
                        }
                    }

                    div { class: "card",
                        h3 { "Account" }
                        div { class: "stat-row",
                            span { class: "muted", "Total recharges" }
                            span { "{stats.total_recharges}" }
                        }
                        div { class: "stat-row",
                            span { class: "muted", "Total spent" }
                            span { "₹{stats.total_spent}" }
                        }
                    }
                }
            } else {
                div { class: "empty-state", "Loading profile..." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RechargeStatus;

    fn record(amount: u32) -> RechargeRecord {
        RechargeRecord {
            id: String::new(),
            mobile_number: "9876543210".to_string(),
            operator: "Jio".to_string(),
            plan_name: "Premium Plan".to_string(),
            amount,
            status: RechargeStatus::Success,
            transaction_id: String::new(),
            created_at: None,
            user_name: String::new(),
        }
    }

    #[test]
    fn stats_sum_all_recharges() {
        let stats = account_stats(&[record(199), record(399)]);
        assert_eq!(stats.total_recharges, 2);
        assert_eq!(stats.total_spent, 598);
    }

    #[test]
    fn profile_validation_rejects_bad_email_and_mobile() {
        assert!(validate_profile("Asha", "asha@example.com", "9876543210").is_ok());
        assert!(validate_profile("", "asha@example.com", "9876543210").is_err());
        assert!(validate_profile("Asha", "asha-example", "9876543210").is_err());
        assert!(validate_profile("Asha", "asha@example.com", "98765").is_err());
    }
}
