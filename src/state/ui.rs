use dioxus::prelude::*;

/// Global UI state
pub static UI_STATE: GlobalSignal<UiState> = Signal::global(UiState::default);

#[derive(Clone, Default)]
pub struct UiState {
    pub notification: Option<Notification>,
    /// Bumped on every show. Dismiss timers carry the value they were
    /// spawned with so a timer left over from an earlier toast is a no-op.
    pub seq: u64,
}

impl UiState {
    pub fn show(&mut self, message: &str, notification_type: NotificationType) {
        self.seq += 1;
        self.notification = Some(Notification {
            message: message.to_string(),
            notification_type,
        });
    }

    pub fn dismiss_expired(&mut self, seq: u64) {
        if self.seq == seq {
            self.notification = None;
        }
    }
}

#[derive(Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
}

#[derive(Clone, PartialEq)]
pub enum NotificationType {
    Success,
    Error,
    Info,
}

impl NotificationType {
    pub fn color_class(&self) -> &str {
        match self {
            NotificationType::Success => "toast-success",
            NotificationType::Error => "toast-error",
            NotificationType::Info => "toast-info",
        }
    }
}

pub fn show_notification(message: &str, notification_type: NotificationType) {
    UI_STATE.write().show(message, notification_type);
}

pub fn clear_notification() {
    UI_STATE.write().notification = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_timer_does_not_dismiss_newer_toast() {
        let mut state = UiState::default();
        state.show("first", NotificationType::Success);
        let first_seq = state.seq;
        state.show("second", NotificationType::Error);

        state.dismiss_expired(first_seq);

        let live = state.notification.expect("newer toast should survive");
        assert_eq!(live.message, "second");
    }

    #[test]
    fn timer_dismisses_its_own_toast() {
        let mut state = UiState::default();
        state.show("saved", NotificationType::Success);

        state.dismiss_expired(state.seq);

        assert!(state.notification.is_none());
    }
}
