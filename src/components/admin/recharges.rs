use dioxus::prelude::*;
use tracing::warn;

use crate::api;
use crate::models::{RechargeRecord, RechargeStatus};
use crate::state::{show_notification, NotificationType};

fn date_label(record: &RechargeRecord) -> Option<String> {
    record.created_at.map(|at| at.format("%d %b %Y, %H:%M").to_string())
}

/// Every transaction on the platform, with a per-row status override for
/// resolving stuck pending recharges.
#[component]
pub fn RechargesTab(mut recharges: Signal<Vec<RechargeRecord>>) -> Element {
    let mut set_status = move |(recharge_id, status): (String, RechargeStatus)| {
        spawn(async move {
            match api::recharges::update_recharge_status(&recharge_id, status).await {
                Ok(updated) => {
                    let mut list = recharges.write();
                    if let Some(row) = list.iter_mut().find(|r| r.id == updated.id) {
                        *row = updated;
                    }
                    drop(list);
                    show_notification(
                        &format!("Recharge marked {}", status.display_name().to_lowercase()),
                        NotificationType::Success,
                    );
                }
                Err(e) => {
                    warn!("failed to update recharge status: {}", e);
                    show_notification("Failed to update recharge status", NotificationType::Error);
                }
            }
        });
    };

    rsx! {
        div { class: "admin-panel",
            div { class: "admin-panel-header",
                h2 { "Recharges" }
                span { class: "muted", "{recharges.read().len()} transactions" }
            }

            if recharges.read().is_empty() {
                div { class: "empty-state", "No recharges found" }
            } else {
                table { class: "admin-table",
                    thead {
                        tr {
                            th { "User" }
                            th { "Mobile" }
                            th { "Plan" }
                            th { "Amount" }
                            th { "Status" }
                            th { "Date" }
                        }
                    }
                    tbody {
                        for recharge in recharges.read().iter().cloned() {
                            tr { key: "{recharge.id}",
                                td {
                                    div { class: "table-identity",
                                        span { "{recharge.user_name}" }
                                        if !recharge.transaction_id.is_empty() {
                                            span { class: "muted small", "{recharge.transaction_id}" }
                                        }
                                    }
                                }
                                td { "{recharge.mobile_number}" }
                                td {
                                    div { class: "table-identity",
                                        span { "{recharge.plan_name}" }
                                        span { class: "muted small", "{recharge.operator}" }
                                    }
                                }
                                td { "₹{recharge.amount}" }
                                td {
                                    if recharge.status == RechargeStatus::Pending {
                                        select {
                                            class: "status-select",
                                            onchange: {
                                                let recharge_id = recharge.id.clone();
                                                move |e: Event<FormData>| {
                                                    let next = match e.value().as_str() {
                                                        "success" => RechargeStatus::Success,
                                                        "failed" => RechargeStatus::Failed,
                                                        _ => return,
                                                    };
                                                    set_status((recharge_id.clone(), next));
                                                }
                                            },
                                            option { value: "pending", selected: true, "Pending" }
                                            option { value: "success", "Success" }
                                            option { value: "failed", "Failed" }
                                        }
                                    } else {
                                        span { class: "badge {recharge.status.color_class()}",
                                            "{recharge.status.display_name()}"
                                        }
                                    }
                                }
                                td {
                                    if let Some(date) = date_label(&recharge) {
                                        span { class: "muted", "{date}" }
                                    } else {
                                        span { class: "muted", "-" }
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(created: Option<chrono::DateTime<chrono::Utc>>) -> RechargeRecord {
        RechargeRecord {
            id: "r1".to_string(),
            mobile_number: "9876543210".to_string(),
            operator: "Jio".to_string(),
            plan_name: "Jio Premium".to_string(),
            amount: 399,
            status: RechargeStatus::Success,
            transaction_id: "TXN123".to_string(),
            created_at: created,
            user_name: "Asha".to_string(),
        }
    }

    #[test]
    fn date_label_formats_timestamp() {
        let at = chrono::Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        assert_eq!(date_label(&record(Some(at))).as_deref(), Some("05 Mar 2024, 14:30"));
    }

    #[test]
    fn date_label_absent_without_timestamp() {
        assert_eq!(date_label(&record(None)), None);
    }
}
