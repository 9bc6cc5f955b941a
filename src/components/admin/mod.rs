//! Admin dashboard: a parallel shell activated only for admin sessions.
//! It owns its own tab state and local caches of users, plans and
//! recharges, independent of the storefront's navigation state.

pub mod dashboard;
pub mod plans;
pub mod recharges;
pub mod users;

use dioxus::prelude::*;

use crate::api;
use crate::components::common::LoadingSpinner;
use crate::models::{Plan, RechargeRecord, UserProfile};
use crate::state::{dispatch, ShellEvent, SHELL};

use dashboard::OverviewTab;
use plans::PlansTab;
use recharges::RechargesTab;
use users::UsersTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Dashboard,
    Users,
    Plans,
    Recharges,
}

impl AdminTab {
    const ALL: [AdminTab; 4] = [
        AdminTab::Dashboard,
        AdminTab::Users,
        AdminTab::Plans,
        AdminTab::Recharges,
    ];

    fn label(&self) -> &'static str {
        match self {
            AdminTab::Dashboard => "Dashboard",
            AdminTab::Users => "Users",
            AdminTab::Plans => "Plans",
            AdminTab::Recharges => "Recharges",
        }
    }
}

#[component]
pub fn AdminShell() -> Element {
    let mut tab = use_signal(|| AdminTab::Dashboard);
    let mut users = use_signal(Vec::<UserProfile>::new);
    let mut plans = use_signal(Vec::<Plan>::new);
    let mut recharges = use_signal(Vec::<RechargeRecord>::new);
    let mut is_loading = use_signal(|| true);

    // All three lists are fetched concurrently on mount; each one
    // degrades to empty on its own failure.
    use_effect(move || {
        spawn(async move {
            is_loading.set(true);

            let (users_res, plans_res, recharges_res) = futures::join!(
                api::users::get_users(),
                api::plans::get_plans(),
                api::recharges::get_all_recharges(),
            );

            match users_res {
                Ok(data) => users.set(data),
                Err(e) => tracing::warn!("Failed to load users: {}", e),
            }
            match plans_res {
                Ok(data) => plans.set(data),
                Err(e) => tracing::warn!("Failed to load plans: {}", e),
            }
            match recharges_res {
                Ok(data) => recharges.set(data),
                Err(e) => tracing::warn!("Failed to load recharges: {}", e),
            }

            is_loading.set(false);
        });
    });

    let shell = SHELL.read();
    let admin_name = shell
        .profile
        .as_ref()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "Administrator".to_string());
    let admin_initial = admin_name.chars().next().map(|c| c.to_ascii_uppercase()).unwrap_or('A');

    let tab_count = move |t: AdminTab| match t {
        AdminTab::Dashboard => None,
        AdminTab::Users => Some(users.read().len()),
        AdminTab::Plans => Some(plans.read().len()),
        AdminTab::Recharges => Some(recharges.read().len()),
    };

    if *is_loading.read() {
        return rsx! {
            div { class: "admin-loading",
                LoadingSpinner {}
                p { "Loading Admin Dashboard..." }
            }
        };
    }

    rsx! {
        div { class: "admin-screen",
            header { class: "admin-header",
                div { class: "admin-brand",
                    div { class: "admin-logo", "MR" }
                    div {
                        h1 { "Admin Dashboard" }
                        p { class: "muted", "Mobile Recharge Management" }
                    }
                }
                div { class: "admin-session",
                    div { class: "admin-identity",
                        p { "{admin_name}" }
                        p { class: "muted small", "Super Admin" }
                    }
                    div { class: "avatar", "{admin_initial}" }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| dispatch(ShellEvent::Logout),
                        "Logout"
                    }
                }
            }

            div { class: "admin-body",
                nav { class: "admin-nav",
                    for t in AdminTab::ALL {
                        button {
                            key: "{t.label()}",
                            class: if tab() == t { "admin-nav-item active" } else { "admin-nav-item" },
                            onclick: move |_| tab.set(t),
                            span { "{t.label()}" }
                            if let Some(count) = tab_count(t) {
                                span { class: "count-pill", "{count}" }
                            }
                        }
                    }
                }

                main { class: "admin-content",
                    match tab() {
                        AdminTab::Dashboard => rsx! {
                            OverviewTab { users, plans, recharges }
                        },
                        AdminTab::Users => rsx! {
                            UsersTab { users }
                        },
                        AdminTab::Plans => rsx! {
                            PlansTab { plans }
                        },
                        AdminTab::Recharges => rsx! {
                            RechargesTab { recharges }
                        },
                    }
                }
            }
        }
    }
}
