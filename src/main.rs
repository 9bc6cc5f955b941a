//! MobileRecharge Hub
//!
//! A prepaid recharge storefront built with Dioxus: plan browsing,
//! recharges, account history, and a role-gated admin dashboard, all
//! talking to a REST backend.

mod api;
mod components;
mod models;
mod pages;
mod state;
mod validation;

use dioxus::prelude::*;

use components::admin::AdminShell;
use components::auth::{LoginPage, SignupPage};
use components::common::Notification;
use components::navbar::Navbar;
use components::sidebar::Sidebar;
use state::{dispatch, Page, ShellEvent, SHELL};

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        run_app();
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive("recharge_hub=info".parse().unwrap()),
            )
            .init();

        dotenvy::dotenv().ok();

        run_app();
    }
}

fn run_app() {
    // On web, the API is served from the same origin as the page.
    #[cfg(target_arch = "wasm32")]
    let api_url = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:5000".to_string());

    #[cfg(not(target_arch = "wasm32"))]
    let api_url =
        std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());

    api::init_api_client(&api_url);

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Kick off the initial data loads once the app is mounted.
    use_effect(|| {
        state::shell::boot();
    });

    let page = SHELL.read().page;

    rsx! {
        // Global styles
        style { {include_str!("../assets/styles.css")} }

        // Notification toast
        Notification {}

        match page {
            Page::Login => rsx! { LoginPage {} },
            Page::Signup => rsx! { SignupPage {} },
            Page::Admin => rsx! { AdminShell {} },
            _ => rsx! { Storefront {} },
        }
    }
}

/// Customer-facing layout: navbar on top, sidebar on the left, the active
/// page in the middle.
#[component]
fn Storefront() -> Element {
    let shell = SHELL.read();
    let page = shell.page;
    let notice = shell.notice.clone();
    drop(shell);

    rsx! {
        div { class: "app-shell",
            Navbar {}

            if let Some(message) = notice {
                div { class: "notice-banner",
                    span { "{message}" }
                    button {
                        class: "link-button",
                        onclick: move |_| dispatch(ShellEvent::RequestLogin),
                        "Login"
                    }
                    button {
                        class: "notice-dismiss",
                        onclick: move |_| dispatch(ShellEvent::DismissNotice),
                        "\u{00d7}"
                    }
                }
            }

            div { class: "app-body",
                Sidebar {}

                main { class: "app-content",
                    match page {
                        Page::Home => rsx! { pages::HomePage {} },
                        Page::Plans => rsx! { pages::PlansPage {} },
                        Page::Recharge => rsx! { pages::RechargePage {} },
                        Page::History => rsx! { pages::HistoryPage {} },
                        Page::Contact => rsx! { pages::ContactPage {} },
                        Page::Profile => rsx! { pages::ProfilePage {} },
                        _ => rsx! { pages::HomePage {} },
                    }
                }
            }

            footer { class: "app-footer",
                span { "MobileRecharge \u{00b7} Fast, secure prepaid recharges" }
            }
        }
    }
}
