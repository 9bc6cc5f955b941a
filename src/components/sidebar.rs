use dioxus::prelude::*;

use crate::state::{dispatch, Page, ShellEvent, SHELL};

#[component]
pub fn Sidebar() -> Element {
    let shell = SHELL.read();
    let logged_in = shell.logged_in;
    let profile = shell.profile.clone();

    let mut items = vec![
        (Page::Home, "Dashboard"),
        (Page::Recharge, "Recharge"),
        (Page::History, "History"),
    ];
    if logged_in {
        items.push((Page::Profile, "Profile"));
    }

    rsx! {
        aside { class: "sidebar",
            if let Some(profile) = profile {
                div { class: "sidebar-profile",
                    div { class: "avatar", "{profile.initial()}" }
                    div {
                        h3 { "{profile.name}" }
                        p { class: "muted", "{profile.role.as_str()}" }
                        p { class: "muted small", "{profile.email}" }
                        p { class: "muted small", "{profile.mobile_number}" }
                    }
                }
            }

            h2 { class: "sidebar-title", "Menu" }

            ul { class: "sidebar-menu",
                for (page, label) in items {
                    li {
                        key: "{label}",
                        class: "sidebar-item",
                        onclick: move |_| dispatch(ShellEvent::Navigate(page)),
                        "{label}"
                    }
                }
            }
        }
    }
}
