use dioxus::prelude::*;

use crate::state::{clear_notification, UI_STATE};

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "spinner-wrap",
            div { class: "spinner" }
        }
    }
}

/// Inline error box rendered next to the form that triggered it.
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "form-error",
            p { "{message}" }
        }
    }
}

#[component]
pub fn Notification() -> Element {
    let notification = UI_STATE.read().notification.clone();

    // Auto-dismiss after 4 seconds. The timer carries the sequence number
    // of the toast it was spawned for, so a timer left over from an earlier
    // toast cannot dismiss a newer one early.
    use_effect(move || {
        let state = UI_STATE.read();
        if state.notification.is_none() {
            return;
        }
        let seq = state.seq;
        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            {
                gloo_timers::future::TimeoutFuture::new(4000).await;
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                tokio::time::sleep(std::time::Duration::from_millis(4000)).await;
            }
            UI_STATE.write().dismiss_expired(seq);
        });
    });

    if let Some(notif) = notification {
        let color_class = notif.notification_type.color_class();
        rsx! {
            div { class: "toast {color_class}",
                p { "{notif.message}" }
                button {
                    class: "toast-close",
                    onclick: move |_| clear_notification(),
                    "\u{2715}"
                }
            }
        }
    } else {
        rsx! {}
    }
}
