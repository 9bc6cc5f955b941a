use dioxus::prelude::*;

use crate::models::{Plan, RechargeRecord, RechargeStatus, UserProfile};

#[derive(Clone, Default, PartialEq)]
pub struct PlatformStats {
    pub total_users: usize,
    pub total_plans: usize,
    pub total_recharges: usize,
    pub total_revenue: u64,
    pub success_rate: f64,
}

pub fn platform_stats(
    users: &[UserProfile],
    plans: &[Plan],
    recharges: &[RechargeRecord],
) -> PlatformStats {
    let success_rate = if recharges.is_empty() {
        0.0
    } else {
        let succeeded = recharges.iter().filter(|r| r.status == RechargeStatus::Success).count();
        succeeded as f64 * 100.0 / recharges.len() as f64
    };

    PlatformStats {
        total_users: users.len(),
        total_plans: plans.len(),
        total_recharges: recharges.len(),
        total_revenue: recharges.iter().map(|r| r.amount as u64).sum(),
        success_rate,
    }
}

#[component]
pub fn OverviewTab(
    users: Signal<Vec<UserProfile>>,
    plans: Signal<Vec<Plan>>,
    recharges: Signal<Vec<RechargeRecord>>,
) -> Element {
    let stats = platform_stats(&users.read(), &plans.read(), &recharges.read());
    let success_rate = format!("{:.1}", stats.success_rate);

    rsx! {
        div { class: "admin-tab",
            div { class: "admin-tab-heading",
                h2 { "Dashboard Overview" }
                p { class: "muted", "Monitor your platform performance and manage operations efficiently." }
            }

            div { class: "stat-grid",
                StatCard { title: "Total Users", value: stats.total_users.to_string() }
                StatCard { title: "Total Plans", value: stats.total_plans.to_string() }
                StatCard { title: "Total Revenue", value: format!("₹{}", stats.total_revenue) }
                StatCard { title: "Success Rate", value: format!("{success_rate}%") }
            }
        }
    }
}

#[component]
fn StatCard(title: String, value: String) -> Element {
    rsx! {
        div { class: "stat-card",
            p { class: "muted", "{title}" }
            p { class: "stat-value", "{value}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn recharge(amount: u32, status: RechargeStatus) -> RechargeRecord {
        RechargeRecord {
            id: String::new(),
            mobile_number: "9876543210".to_string(),
            operator: "Jio".to_string(),
            plan_name: "Premium Plan".to_string(),
            amount,
            status,
            transaction_id: String::new(),
            created_at: None,
            user_name: String::new(),
        }
    }

    #[test]
    fn stats_sum_revenue_and_success_rate() {
        let users = vec![UserProfile {
            id: "u1".to_string(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            mobile_number: "9876543210".to_string(),
            role: Role::User,
            created_at: None,
        }];
        let recharges = vec![
            recharge(199, RechargeStatus::Success),
            recharge(399, RechargeStatus::Success),
            recharge(99, RechargeStatus::Failed),
            recharge(599, RechargeStatus::Pending),
        ];

        let stats = platform_stats(&users, &[], &recharges);
        assert_eq!(stats.total_users, 1);
        assert_eq!(stats.total_recharges, 4);
        assert_eq!(stats.total_revenue, 199 + 399 + 99 + 599);
        assert!((stats.success_rate - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn stats_with_no_recharges_report_zero_rate() {
        let stats = platform_stats(&[], &[], &[]);
        assert_eq!(stats.total_revenue, 0);
        assert_eq!(stats.success_rate, 0.0);
    }
}
