use dioxus::prelude::*;

use crate::api;
use crate::models::{CreatePlanRequest, Plan, OPERATORS};
use crate::state::{dispatch, show_notification, NotificationType, ShellEvent};

#[component]
pub fn PlansTab(mut plans: Signal<Vec<Plan>>) -> Element {
    let mut show_create = use_signal(|| false);

    let mut toggle_popular = move |plan: Plan| {
        spawn(async move {
            let request = CreatePlanRequest {
                name: plan.name.clone(),
                operator: plan.operator.clone(),
                price: plan.price,
                validity: plan.validity.clone(),
                data: plan.data.clone(),
                calls: plan.calls.clone(),
                sms: plan.sms.clone(),
                description: plan.description.clone(),
                popular: !plan.popular,
            };
            match api::plans::update_plan(&plan.id, &request).await {
                Ok(updated) => {
                    let mut list = plans.write();
                    if let Some(row) = list.iter_mut().find(|p| p.id == updated.id) {
                        *row = updated;
                    }
                    drop(list);
                    dispatch(ShellEvent::PlansLoaded(plans.read().clone()));
                }
                Err(e) => {
                    tracing::warn!("Failed to update plan {}: {}", plan.id, e);
                    show_notification(&format!("Failed to update plan: {}", e), NotificationType::Error);
                }
            }
        });
    };

    let mut delete_plan = move |plan_id: String| {
        spawn(async move {
            match api::plans::delete_plan(&plan_id).await {
                Ok(()) => {
                    plans.write().retain(|p| p.id != plan_id);
                    // Keep the storefront catalog in step with the admin view
                    dispatch(ShellEvent::PlansLoaded(plans.read().clone()));
                    show_notification("Plan deleted successfully!", NotificationType::Success);
                }
                Err(e) => {
                    tracing::warn!("Failed to delete plan {}: {}", plan_id, e);
                    show_notification(&format!("Failed to delete plan: {}", e), NotificationType::Error);
                }
            }
        });
    };

    rsx! {
        div { class: "admin-tab",
            div { class: "admin-tab-heading with-action",
                div {
                    h2 { "Plan Management" }
                    p { class: "muted", "Create and manage recharge plans" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_create.set(true),
                    "Create Plan"
                }
            }

            if *show_create.read() {
                CreatePlanModal {
                    on_close: move |_| show_create.set(false),
                    on_created: move |plan: Plan| {
                        plans.write().push(plan);
                        dispatch(ShellEvent::PlansLoaded(plans.read().clone()));
                        show_create.set(false);
                    },
                }
            }

            if plans.read().is_empty() {
                div { class: "empty-state",
                    p { "No plans created yet" }
                    p { class: "muted small", "Create your first plan to get started" }
                }
            } else {
                div { class: "plan-grid",
                    for plan in plans.read().iter().cloned() {
                        PlanCard {
                            key: "{plan.id}",
                            plan: plan.clone(),
                            on_toggle_popular: {
                                let plan = plan.clone();
                                move |_| toggle_popular(plan.clone())
                            },
                            on_delete: move |_| delete_plan(plan.id.clone()),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PlanCard(plan: Plan, on_toggle_popular: EventHandler<()>, on_delete: EventHandler<()>) -> Element {
    rsx! {
        div { class: "card plan-card",
            div { class: "plan-card-header",
                div {
                    h3 { "{plan.name}" }
                    p { class: "muted", "{plan.operator}" }
                }
                if plan.popular {
                    span { class: "badge badge-popular", "Popular" }
                }
            }
            p { class: "plan-price", "₹{plan.price}" }
            p { "Data: {plan.data}" }
            p { "Validity: {plan.validity}" }
            p { "Calls: {plan.calls}" }
            p { "SMS: {plan.sms}" }
            if !plan.description.is_empty() {
                p { class: "muted small", "{plan.description}" }
            }
            button {
                class: "btn btn-secondary btn-block",
                onclick: move |_| on_toggle_popular.call(()),
                if plan.popular { "Unmark Popular" } else { "Mark as Popular" }
            }
            button {
                class: "btn btn-danger btn-block",
                onclick: move |_| on_delete.call(()),
                "Delete Plan"
            }
        }
    }
}

#[component]
fn CreatePlanModal(on_close: EventHandler<()>, on_created: EventHandler<Plan>) -> Element {
    let mut name = use_signal(String::new);
    let mut operator = use_signal(|| "Airtel".to_string());
    let mut price = use_signal(String::new);
    let mut validity = use_signal(String::new);
    let mut data = use_signal(String::new);
    let mut calls = use_signal(String::new);
    let mut sms = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut popular = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let mut create = move |_| {
        let Ok(price_val) = price().parse::<u32>() else {
            error.set(Some("Price must be a whole number".to_string()));
            return;
        };
        if name().is_empty() || validity().is_empty() {
            error.set(Some("Name and validity are required".to_string()));
            return;
        }
        error.set(None);

        let or_default = |value: String| if value.is_empty() { "N/A".to_string() } else { value };
        let request = CreatePlanRequest {
            name: name(),
            operator: operator(),
            price: price_val,
            validity: validity(),
            data: or_default(data()),
            calls: or_default(calls()),
            sms: or_default(sms()),
            description: description(),
            popular: popular(),
        };

        spawn(async move {
            match api::plans::create_plan(&request).await {
                Ok(plan) => {
                    show_notification("Plan created successfully!", NotificationType::Success);
                    on_created.call(plan);
                }
                Err(e) => {
                    tracing::warn!("Failed to create plan: {}", e);
                    error.set(Some(format!("Failed to create plan: {}", e)));
                }
            }
        });
    };

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                h3 { "Create New Plan" }

                if let Some(err) = error.read().as_ref() {
                    crate::components::common::ErrorMessage { message: err.clone() }
                }

                form {
                    onsubmit: move |e| {
                        e.prevent_default();
                        create(e);
                    },

                    input {
                        r#type: "text",
                        placeholder: "Plan Name",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                    select {
                        onchange: move |e| operator.set(e.value()),
                        for op in OPERATORS {
                            option { value: "{op}", "{op}" }
                        }
                    }
                    input {
                        r#type: "number",
                        placeholder: "Price",
                        value: "{price}",
                        oninput: move |e| price.set(e.value()),
                    }
                    input {
                        r#type: "text",
                        placeholder: "Validity",
                        value: "{validity}",
                        oninput: move |e| validity.set(e.value()),
                    }
                    input {
                        r#type: "text",
                        placeholder: "Data",
                        value: "{data}",
                        oninput: move |e| data.set(e.value()),
                    }
                    input {
                        r#type: "text",
                        placeholder: "Calls",
                        value: "{calls}",
                        oninput: move |e| calls.set(e.value()),
                    }
                    input {
                        r#type: "text",
                        placeholder: "SMS",
                        value: "{sms}",
                        oninput: move |e| sms.set(e.value()),
                    }
                    textarea {
                        placeholder: "Description",
                        value: "{description}",
                        oninput: move |e| description.set(e.value()),
                    }
                    label { class: "checkbox-row",
                        input {
                            r#type: "checkbox",
                            checked: popular(),
                            onchange: move |e| popular.set(e.checked()),
                        }
                        "Popular Plan"
                    }

                    div { class: "modal-actions",
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            "Create Plan"
                        }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
