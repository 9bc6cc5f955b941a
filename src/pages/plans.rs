use dioxus::prelude::*;

use crate::models::{Plan, OPERATORS};
use crate::state::{dispatch, ShellEvent, SHELL};

/// Plans for one operator. Defaults to the first carrier when nothing has
/// been picked yet.
fn plans_for<'a>(plans: &'a [Plan], operator: Option<&str>) -> (String, Vec<&'a Plan>) {
    let operator = operator.unwrap_or(OPERATORS[0]).to_string();
    let matching = plans.iter().filter(|p| p.operator == operator).collect();
    (operator, matching)
}

#[component]
pub fn PlansPage() -> Element {
    let shell = SHELL.read();
    let (active, matching) = plans_for(&shell.plans, shell.selection.operator.as_deref());
    let matching: Vec<Plan> = matching.into_iter().cloned().collect();

    rsx! {
        div { class: "page",
            h1 { "Recharge Plans" }

            div { class: "operator-tabs",
                for operator in OPERATORS {
                    button {
                        key: "{operator}",
                        class: if operator == active { "operator-tab active" } else { "operator-tab" },
                        onclick: move |_| dispatch(ShellEvent::OperatorChosen(operator.to_string())),
                        "{operator}"
                    }
                }
            }

            if matching.is_empty() {
                div { class: "empty-state", "No plans available for {active} right now." }
            } else {
                div { class: "plan-grid",
                    for plan in matching {
                        div { class: "plan-card", key: "{plan.id}",
                            div { class: "plan-card-header",
                                if plan.popular {
                                    span { class: "badge badge-popular", "Popular" }
                                }
                                h3 { "{plan.name}" }
                            }
                            div { class: "plan-price", "₹{plan.price}" }
                            ul { class: "plan-details",
                                li { "{plan.data}" }
                                li { "{plan.validity} validity" }
                                li { "{plan.calls} calls" }
                                li { "{plan.sms} SMS" }
                            }
                            if !plan.description.is_empty() {
                                p { class: "muted small", "{plan.description}" }
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
                                "Select Plan"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_operator() {
        let plans = Plan::fallback_catalog();
        let (active, matching) = plans_for(&plans, None);
        assert_eq!(active, "Airtel");
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].operator, "Airtel");
    }

    #[test]
    fn filters_to_chosen_operator() {
        let plans = Plan::fallback_catalog();
        let (active, matching) = plans_for(&plans, Some("BSNL"));
        assert_eq!(active, "BSNL");
        assert!(matching.iter().all(|p| p.operator == "BSNL"));
        assert!(!matching.is_empty());
    }

    #[test]
    fn unknown_operator_matches_nothing() {
        let plans = Plan::fallback_catalog();
        let (_, matching) = plans_for(&plans, Some("Tata"));
        assert!(matching.is_empty());
    }
}
