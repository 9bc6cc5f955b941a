use dioxus::prelude::*;

use crate::models::OPERATORS;
use crate::state::{dispatch, Page, ShellEvent, SHELL};

/// Landing dashboard. Operator tiles jump straight into the plan browser
/// with that operator pre-selected.
#[component]
pub fn HomePage() -> Element {
    let shell = SHELL.read();

    let greeting = shell
        .profile
        .as_ref()
        .map(|p| format!("Welcome back, {}!", p.name))
        .unwrap_or_else(|| "Recharge in seconds".to_string());

    let popular: Vec<_> = shell.plans.iter().filter(|p| p.popular).cloned().collect();

    rsx! {
        div { class: "page",
            section { class: "hero card",
                h1 { "{greeting}" }
                p { class: "muted",
                    "Prepaid recharges for every major operator. Pick a plan, pay, done."
                }
                div { class: "hero-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| dispatch(ShellEvent::Navigate(Page::Recharge)),
                        "Quick Recharge"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| dispatch(ShellEvent::Navigate(Page::Plans)),
                        "Browse Plans"
                    }
                }
            }

            section {
                h2 { "Choose your operator" }
                div { class: "operator-grid",
                    for operator in OPERATORS {
                        button {
                            key: "{operator}",
                            class: "operator-tile",
                            onclick: move |_| dispatch(ShellEvent::OperatorChosen(operator.to_string())),
                            span { class: "operator-name", "{operator}" }
                            span { class: "muted small", "View plans" }
                        }
                    }
                }
            }

            if !popular.is_empty() {
                section {
                    h2 { "Popular plans" }
                    div { class: "plan-grid",
                        for plan in popular {
                            div { class: "plan-card", key: "{plan.operator}-{plan.name}",
                                div { class: "plan-card-header",
                                    span { class: "badge badge-popular", "Popular" }
                                    h3 { "{plan.name}" }
                                    span { class: "muted", "{plan.operator}" }
                                }
                                div { class: "plan-price", "₹{plan.price}" }
                                ul { class: "plan-details",
                                    li { "{plan.data}" }
                                    li { "{plan.validity} validity" }
                                    li { "{plan.calls} calls" }
                                }
                                button {
                                    class: "btn btn-primary btn-block",
                                    onclick: {
                                        let operator = plan.operator.clone();
                                        let price = plan.price;
                                        move |_| dispatch(ShellEvent::PlanChosen {
                                            operator: operator.clone(),
                                            price,
                                        })
                                    },
                                    "Recharge Now"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
