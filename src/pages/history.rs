use dioxus::prelude::*;
use tracing::warn;

use crate::api;
use crate::state::{dispatch, ShellEvent, SHELL};

/// Recharge history for the signed-in user. Refreshed on entry; the cached
/// list keeps rendering if the refresh fails.
#[component]
pub fn HistoryPage() -> Element {
    // Peek: a HistoryLoaded write to the snapshot must not re-trigger
    // this fetch.
    use_effect(move || {
        if SHELL.peek().logged_in {
            spawn(async move {
                match api::recharges::get_user_recharges().await {
                    Ok(history) => dispatch(ShellEvent::HistoryLoaded(history)),
                    Err(e) => warn!("Failed to refresh recharge history: {}", e),
                }
            });
        }
    });

    let shell = SHELL.read();

    rsx! {
        div { class: "page",
            h1 { "Recharge History" }

            if !shell.logged_in {
                div { class: "empty-state",
                    p { "Login to see your recharge history." }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| dispatch(ShellEvent::RequestLogin),
                        "Login"
                    }
                }
            } else if shell.history.is_empty() {
                div { class: "empty-state",
                    p { "No recharges yet." }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| dispatch(ShellEvent::Navigate(crate::state::Page::Recharge)),
                        "Make your first recharge"
                    }
                }
            } else {
                div { class: "history-list",
                    for record in shell.history.iter().cloned() {
                        div { class: "card history-row", key: "{record.id}",
                            div { class: "history-main",
                                span { class: "history-plan", "{record.plan_name}" }
                                span { class: "muted", "{record.operator} · {record.mobile_number}" }
                                if !record.transaction_id.is_empty() {
                                    span { class: "muted small", "Txn: {record.transaction_id}" }
                                }
                            }
                            div { class: "history-side",
                                span { class: "history-amount", "₹{record.amount}" }
                                span { class: "badge {record.status.color_class()}",
                                    "{record.status.display_name()}"
                                }
                                if let Some(at) = record.created_at {
                                    span { class: "muted small",
                                        {at.format("%d %b %Y").to_string()}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
