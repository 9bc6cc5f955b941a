use dioxus::prelude::*;
use tracing::warn;

use crate::api;
use crate::models::{CreateRechargeRequest, Plan, OPERATORS};
use crate::state::{dispatch, show_notification, NotificationType, ShellEvent, SHELL};
use crate::validation::{sanitize_mobile_input, validate_amount, validate_mobile};

const QUICK_AMOUNTS: [u32; 5] = [99, 199, 399, 599, 999];

/// The stored record carries the plan name, so a form submission is matched
/// back to a catalog plan by operator and price when possible.
fn plan_name_for(plans: &[Plan], operator: &str, amount: u32) -> String {
    plans
        .iter()
        .find(|p| p.operator == operator && p.price == amount)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "Custom Recharge".to_string())
}

#[component]
pub fn RechargePage() -> Element {
    let seeded = SHELL.read().selection.clone();
    let mut mobile = use_signal(String::new);
    let mut operator = use_signal(|| seeded.operator.clone().unwrap_or_default());
    let mut amount = use_signal(|| seeded.amount.map(|a| a.to_string()).unwrap_or_default());
    let mut error = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| false);

    let logged_in = SHELL.read().logged_in;

    let mut submit = move |_| {
        error.set(None);

        if !logged_in {
            error.set(Some("Please login to proceed with recharge".to_string()));
            return;
        }
        if let Err(e) = validate_mobile(&mobile()) {
            error.set(Some(e));
            return;
        }
        if operator().is_empty() {
            error.set(Some("Please select an operator".to_string()));
            return;
        }
        let parsed = match validate_amount(&amount()) {
            Ok(v) => v,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };

        let request = CreateRechargeRequest {
            mobile_number: mobile(),
            operator: operator(),
            plan_name: plan_name_for(&SHELL.read().plans, &operator(), parsed),
            amount: parsed,
        };

        is_loading.set(true);
        spawn(async move {
            match api::recharges::create_recharge(&request).await {
                Ok(response) => {
                    show_notification(
                        &format!("Recharge successful! Transaction ID: {}", response.recharge.transaction_id),
                        NotificationType::Success,
                    );
                    mobile.set(String::new());
                    amount.set(String::new());
                    dispatch(ShellEvent::RechargeCompleted(response.recharge));
                }
                Err(e) => {
                    warn!("recharge failed: {}", e);
                    error.set(Some(format!("Recharge failed: {}", e)));
                }
            }
            is_loading.set(false);
        });
    };

    rsx! {
        div { class: "page",
            h1 { "Mobile Recharge" }

            div { class: "card recharge-form",
                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }

                div { class: "form-field",
                    label { "Mobile Number" }
                    input {
                        r#type: "tel",
                        placeholder: "10-digit mobile number",
                        value: "{mobile}",
                        oninput: move |e| mobile.set(sanitize_mobile_input(&e.value())),
                    }
                }

                div { class: "form-field",
                    label { "Operator" }
                    select {
                        value: "{operator}",
                        onchange: move |e| operator.set(e.value()),
                        option { value: "", disabled: true, "Select operator" }
                        for op in OPERATORS {
                            option { key: "{op}", value: "{op}", "{op}" }
                        }
                    }
                }

                div { class: "form-field",
                    label { "Amount" }
                    input {
                        r#type: "number",
                        placeholder: "Enter amount",
                        value: "{amount}",
                        oninput: move |e| amount.set(e.value()),
                    }
                    div { class: "quick-amounts",
                        for quick in QUICK_AMOUNTS {
                            button {
                                key: "{quick}",
                                class: "btn btn-secondary btn-small",
                                onclick: move |_| amount.set(quick.to_string()),
                                "₹{quick}"
                            }
                        }
                    }
                }

                button {
                    class: "btn btn-primary btn-block",
                    disabled: is_loading(),
                    onclick: move |e| submit(e),
                    if is_loading() { "Processing..." } else { "Recharge Now" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_catalog_plan_by_operator_and_price() {
        let plans = Plan::fallback_catalog();
        assert_eq!(plan_name_for(&plans, "Jio", 399), "Premium Plan");
    }

    #[test]
    fn falls_back_to_custom_recharge() {
        let plans = Plan::fallback_catalog();
        assert_eq!(plan_name_for(&plans, "Jio", 123), "Custom Recharge");
        assert_eq!(plan_name_for(&plans, "Airtel", 399), "Custom Recharge");
    }
}
