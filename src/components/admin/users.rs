use dioxus::prelude::*;

use crate::api;
use crate::models::{AdminUpdateUserRequest, Role, UserProfile};
use crate::state::{show_notification, NotificationType};

/// Which accounts the user table is narrowed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Only(Role),
}

/// Local search over the cached user list: case-insensitive substring on
/// name/email, plain substring on mobile number, exact role match. No
/// remote round-trip.
pub fn filter_users<'a>(
    users: &'a [UserProfile],
    term: &str,
    role: RoleFilter,
) -> Vec<&'a UserProfile> {
    let term = term.to_lowercase();
    users
        .iter()
        .filter(|u| {
            let matches_term = term.is_empty()
                || u.name.to_lowercase().contains(&term)
                || u.email.to_lowercase().contains(&term)
                || u.mobile_number.contains(&term);
            let matches_role = match role {
                RoleFilter::All => true,
                RoleFilter::Only(r) => u.role == r,
            };
            matches_term && matches_role
        })
        .collect()
}

fn joined_label(user: &UserProfile) -> Option<String> {
    user.created_at.map(|c| c.format("%d %b %Y").to_string())
}

#[component]
pub fn UsersTab(mut users: Signal<Vec<UserProfile>>) -> Element {
    let mut search_term = use_signal(String::new);
    let mut role_filter = use_signal(RoleFilter::default);

    let all_users = users.read();
    let visible: Vec<UserProfile> = filter_users(&all_users, &search_term(), role_filter())
        .into_iter()
        .cloned()
        .collect();
    drop(all_users);

    let mut set_role = move |(user, role): (UserProfile, Role)| {
        spawn(async move {
            match api::users::update_user(&user.id, &AdminUpdateUserRequest::with_role(&user, role)).await {
                Ok(updated) => {
                    let mut list = users.write();
                    if let Some(row) = list.iter_mut().find(|u| u.id == updated.id) {
                        *row = updated;
                    }
                    drop(list);
                    show_notification(
                        &format!("{} is now {}", user.name, role.as_str()),
                        NotificationType::Success,
                    );
                }
                Err(e) => {
                    tracing::warn!("Failed to update role for {}: {}", user.id, e);
                    show_notification("Failed to update user role", NotificationType::Error);
                }
            }
        });
    };

    let mut delete_user = move |user_id: String| {
        spawn(async move {
            // Optimistic: the row disappears whatever the server says.
            if let Err(e) = api::users::delete_user(&user_id).await {
                tracing::warn!("Failed to delete user {}: {}", user_id, e);
                show_notification("User removed from list", NotificationType::Info);
            } else {
                show_notification("User deleted successfully!", NotificationType::Success);
            }
            users.write().retain(|u| u.id != user_id);
        });
    };

    rsx! {
        div { class: "admin-tab",
            div { class: "admin-tab-heading",
                h2 { "User Management" }
                p { class: "muted", "Monitor and manage customer accounts across the platform" }
            }

            div { class: "filter-bar",
                input {
                    r#type: "text",
                    placeholder: "Search users by name, email, or phone...",
                    value: "{search_term}",
                    oninput: move |e| search_term.set(e.value()),
                }
                select {
                    onchange: move |e| {
                        let filter = match e.value().as_str() {
                            "User" => RoleFilter::Only(Role::User),
                            "Admin" => RoleFilter::Only(Role::Admin),
                            _ => RoleFilter::All,
                        };
                        role_filter.set(filter);
                    },
                    option { value: "all", "All Users" }
                    option { value: "User", "Regular Users" }
                    option { value: "Admin", "Administrators" }
                }
            }

            if visible.is_empty() {
                div { class: "empty-state",
                    p { "No matching users" }
                }
            } else {
                table { class: "admin-table",
                    thead {
                        tr {
                            th { "User" }
                            th { "Contact" }
                            th { "Role" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for user in visible {
                            tr { key: "{user.id}",
                                td {
                                    div { class: "table-identity",
                                        div { class: "avatar", "{user.initial()}" }
                                        div {
                                            p { "{user.name}" }
                                            p { class: "muted small", "{user.email}" }
                                        }
                                    }
                                }
                                td {
                                    p { "{user.mobile_number}" }
                                    if let Some(joined) = joined_label(&user) {
                                        p { class: "muted small", "Joined {joined}" }
                                    }
                                }
                                td {
                                    span { class: "badge badge-role", "{user.role.as_str()}" }
                                }
                                td {
                                    button {
                                        class: "btn btn-secondary btn-small",
                                        onclick: {
                                            let user = user.clone();
                                            let flipped = if user.role.is_admin() { Role::User } else { Role::Admin };
                                            move |_| set_role((user.clone(), flipped))
                                        },
                                        if user.role.is_admin() { "Make User" } else { "Make Admin" }
                                    }
                                    button {
                                        class: "btn btn-danger btn-small",
                                        onclick: {
                                            let user_id = user.id.clone();
                                            move |_| delete_user(user_id.clone())
                                        },
                                        "Delete"
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

    fn user(name: &str, email: &str, mobile: &str, role: Role) -> UserProfile {
        UserProfile {
            id: format!("id-{name}"),
            name: name.to_string(),
            email: email.to_string(),
            mobile_number: mobile.to_string(),
            role,
            created_at: None,
        }
    }

    fn sample() -> Vec<UserProfile> {
        vec![
            user("Asha Rao", "asha@example.com", "9876543210", Role::User),
            user("Vikram Shah", "vikram@admin.com", "9123456780", Role::Admin),
            user("Meera Nair", "meera@example.com", "9988776655", Role::User),
        ]
    }

    #[test]
    fn empty_term_and_all_roles_match_everyone() {
        let users = sample();
        assert_eq!(filter_users(&users, "", RoleFilter::All).len(), 3);
    }

    #[test]
    fn search_matches_name_email_and_mobile() {
        let users = sample();
        assert_eq!(filter_users(&users, "asha", RoleFilter::All).len(), 1);
        assert_eq!(filter_users(&users, "ADMIN.COM", RoleFilter::All).len(), 1);
        assert_eq!(filter_users(&users, "99887", RoleFilter::All).len(), 1);
        assert!(filter_users(&users, "nobody", RoleFilter::All).is_empty());
    }

    #[test]
    fn role_filter_is_exact() {
        let users = sample();
        let admins = filter_users(&users, "", RoleFilter::Only(Role::Admin));
        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].name, "Vikram Shah");

        let regulars = filter_users(&users, "", RoleFilter::Only(Role::User));
        assert_eq!(regulars.len(), 2);
    }

    #[test]
    fn term_and_role_combine() {
        let users = sample();
        let hits = filter_users(&users, "example.com", RoleFilter::Only(Role::Admin));
        assert!(hits.is_empty());
    }
}
