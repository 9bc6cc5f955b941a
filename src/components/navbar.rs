use dioxus::prelude::*;

use crate::state::{dispatch, Page, ShellEvent, SHELL};

#[component]
pub fn Navbar() -> Element {
    let shell = SHELL.read();
    let current = shell.page;
    let logged_in = shell.logged_in;
    let username = shell.profile.as_ref().map(|p| p.name.clone());

    let item_class = move |page: Page| {
        if current == page {
            "nav-item nav-item-active"
        } else {
            "nav-item"
        }
    };

    rsx! {
        nav { class: "navbar",
            h1 { class: "navbar-brand", "MobileRecharge" }

            ul { class: "navbar-menu",
                li {
                    class: item_class(Page::Home),
                    onclick: move |_| dispatch(ShellEvent::Navigate(Page::Home)),
                    "Home"
                }
                li {
                    class: item_class(Page::Recharge),
                    onclick: move |_| dispatch(ShellEvent::Navigate(Page::Recharge)),
                    "Recharge"
                }
                li {
                    class: item_class(Page::Contact),
                    onclick: move |_| dispatch(ShellEvent::Navigate(Page::Contact)),
                    "Contact"
                }
            }

            div { class: "navbar-session",
                if let Some(name) = username {
                    span { class: "navbar-user", "Welcome, {name}" }
                }
                if logged_in {
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| dispatch(ShellEvent::Logout),
                        "Logout"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| dispatch(ShellEvent::RequestLogin),
                        "Login"
                    }
                }
            }
        }
    }
}
