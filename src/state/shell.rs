//! The application shell: one snapshot of all cross-page state, advanced
//! by a pure reducer.
//!
//! Pages never mutate shared state. They read the current [`ShellState`]
//! and call [`dispatch`] with a [`ShellEvent`]; the reducer returns the
//! next snapshot plus a list of [`Effect`]s, and the effect runner issues
//! the actual fetches. Fetch completions come back as events, so a
//! completion that arrives after the session it assumed is gone (say, a
//! slow profile fetch finishing after logout) is dropped by the reducer
//! instead of silently repopulating state.

use dioxus::prelude::*;

use crate::api;
use crate::models::{Plan, RechargeRecord, Role, UserProfile};
use crate::state::session;

/// Everything the user can be looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Login,
    Signup,
    Plans,
    Recharge,
    History,
    Contact,
    Profile,
    Admin,
}

/// Cart-like state carried from plan selection into the recharge form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub operator: Option<String>,
    pub amount: Option<u32>,
}

#[derive(Clone, Default, PartialEq)]
pub struct ShellState {
    pub page: Page,
    pub logged_in: bool,
    pub is_admin: bool,
    pub selection: Selection,
    pub profile: Option<UserProfile>,
    pub plans: Vec<Plan>,
    pub history: Vec<RechargeRecord>,
    /// Inline banner shown when an action was blocked (e.g. selecting a
    /// plan while logged out).
    pub notice: Option<String>,
}

impl ShellState {
    /// Initial state on load, read synchronously from the session store.
    /// A reloading admin lands on Home, never straight in the management
    /// view.
    pub fn restore() -> Self {
        let logged_in = session::is_authenticated();
        let is_admin = logged_in && session::role() == Some(Role::Admin);
        ShellState {
            logged_in,
            is_admin,
            ..ShellState::default()
        }
    }
}

#[derive(Debug, Clone)]
pub enum ShellEvent {
    /// Navbar "Login" button.
    RequestLogin,
    /// Login form accepted by the server.
    LoginSucceeded { role: Role },
    SwitchToSignup,
    SwitchToLogin,
    /// Admin signup followed by a successful auto-login.
    AdminSignupCompleted,
    Logout,
    /// An operator card was picked on the home page.
    OperatorChosen(String),
    /// A concrete plan was picked on the plans page.
    PlanChosen { operator: String, price: u32 },
    /// The recharge was recorded remotely; the server's record comes back.
    RechargeCompleted(RechargeRecord),
    Navigate(Page),
    /// Fetch completions.
    PlansLoaded(Vec<Plan>),
    PlansUnavailable,
    ProfileLoaded(UserProfile),
    HistoryLoaded(Vec<RechargeRecord>),
    DismissNotice,
}

/// Side effects requested by the reducer, run by [`run_effect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    FetchProfile,
    FetchHistory,
    FetchPlans,
    ClearSession,
}

/// The transition function. Pure: no I/O, no global access.
pub fn reduce(state: &ShellState, event: ShellEvent) -> (ShellState, Vec<Effect>) {
    let mut next = state.clone();
    let mut effects = Vec::new();
    // Any interaction clears a previous blocked-action banner.
    next.notice = None;

    match event {
        ShellEvent::RequestLogin => {
            if !next.logged_in {
                next.page = Page::Login;
            }
        }
        ShellEvent::LoginSucceeded { role } => {
            next.logged_in = true;
            next.is_admin = role.is_admin();
            next.page = if next.is_admin { Page::Admin } else { Page::Home };
            effects.push(Effect::FetchProfile);
            effects.push(Effect::FetchHistory);
        }
        ShellEvent::SwitchToSignup => {
            if next.page == Page::Login {
                next.page = Page::Signup;
            }
        }
        ShellEvent::SwitchToLogin => {
            if next.page == Page::Signup {
                next.page = Page::Login;
            }
        }
        ShellEvent::AdminSignupCompleted => {
            next.logged_in = true;
            next.is_admin = true;
            next.page = Page::Admin;
            effects.push(Effect::FetchProfile);
            effects.push(Effect::FetchHistory);
        }
        ShellEvent::Logout => {
            // Full reset: cached profile, history and plan list all go.
            next = ShellState {
                page: Page::Home,
                ..ShellState::default()
            };
            effects.push(Effect::ClearSession);
        }
        ShellEvent::OperatorChosen(operator) => {
            next.selection.operator = Some(operator);
            next.page = Page::Plans;
        }
        ShellEvent::PlanChosen { operator, price } => {
            if next.logged_in {
                next.selection = Selection {
                    operator: Some(operator),
                    amount: Some(price),
                };
                next.page = Page::Recharge;
            } else {
                next.notice = Some("Please login first to proceed with recharge.".to_string());
            }
        }
        ShellEvent::RechargeCompleted(record) => {
            next.history.push(record);
            next.selection.amount = None;
            next.page = Page::History;
        }
        ShellEvent::Navigate(page) => {
            if page != Page::Admin || next.is_admin {
                next.page = page;
            }
        }
        ShellEvent::PlansLoaded(plans) => {
            next.plans = plans;
        }
        ShellEvent::PlansUnavailable => {
            if next.plans.is_empty() {
                next.plans = Plan::fallback_catalog();
            }
        }
        ShellEvent::ProfileLoaded(profile) => {
            // Stale completion guard: ignore results for a session that
            // has ended in the meantime.
            if next.logged_in {
                next.profile = Some(profile);
            }
        }
        ShellEvent::HistoryLoaded(history) => {
            if next.logged_in {
                next.history = history;
            }
        }
        ShellEvent::DismissNotice => {}
    }

    (next, effects)
}

/// Global shell snapshot.
pub static SHELL: GlobalSignal<ShellState> = Signal::global(ShellState::restore);

/// Apply an event to the global snapshot and run the requested effects.
pub fn dispatch(event: ShellEvent) {
    let (next, effects) = reduce(&SHELL.read(), event);
    *SHELL.write() = next;
    for effect in effects {
        run_effect(effect);
    }
}

/// Kick off the loads that happen on app start: the plan catalog for
/// everyone, profile and history when a persisted session exists.
/// Peeks rather than reads so the caller's reactive scope does not
/// re-run this on every snapshot change.
pub fn boot() {
    run_effect(Effect::FetchPlans);
    if SHELL.peek().logged_in {
        run_effect(Effect::FetchProfile);
        run_effect(Effect::FetchHistory);
    }
}

fn run_effect(effect: Effect) {
    match effect {
        Effect::ClearSession => session::clear(),
        Effect::FetchProfile => {
            spawn(async move {
                match api::users::get_profile().await {
                    Ok(profile) => dispatch(ShellEvent::ProfileLoaded(profile)),
                    Err(e) => tracing::warn!("Failed to load user profile: {}", e),
                }
            });
        }
        Effect::FetchHistory => {
            spawn(async move {
                match api::recharges::get_user_recharges().await {
                    Ok(history) => dispatch(ShellEvent::HistoryLoaded(history)),
                    Err(e) => tracing::warn!("Failed to load recharge history: {}", e),
                }
            });
        }
        Effect::FetchPlans => {
            spawn(async move {
                match api::plans::get_plans().await {
                    Ok(plans) => dispatch(ShellEvent::PlansLoaded(plans)),
                    Err(e) => {
                        tracing::warn!("Failed to load plans, using built-in catalog: {}", e);
                        dispatch(ShellEvent::PlansUnavailable);
                    }
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RechargeStatus, OPERATORS};

    fn logged_in_state() -> ShellState {
        ShellState {
            logged_in: true,
            ..ShellState::default()
        }
    }

    fn record(amount: u32) -> RechargeRecord {
        RechargeRecord {
            id: String::new(),
            mobile_number: "9876543210".to_string(),
            operator: "Airtel".to_string(),
            plan_name: "Basic Plan".to_string(),
            amount,
            status: RechargeStatus::Success,
            transaction_id: format!("TXN{amount}"),
            created_at: None,
            user_name: "Asha".to_string(),
        }
    }

    #[test]
    fn admin_login_lands_on_admin_and_user_login_on_home() {
        let start = ShellState::default();
        let (at_login, _) = reduce(&start, ShellEvent::RequestLogin);
        assert_eq!(at_login.page, Page::Login);

        let (admin, effects) = reduce(&at_login, ShellEvent::LoginSucceeded { role: Role::Admin });
        assert_eq!(admin.page, Page::Admin);
        assert!(admin.logged_in && admin.is_admin);
        assert!(effects.contains(&Effect::FetchProfile));
        assert!(effects.contains(&Effect::FetchHistory));

        let (user, _) = reduce(&at_login, ShellEvent::LoginSucceeded { role: Role::User });
        assert_eq!(user.page, Page::Home);
        assert!(user.logged_in && !user.is_admin);
    }

    #[test]
    fn request_login_is_ignored_when_already_authenticated() {
        let state = logged_in_state();
        let (next, _) = reduce(&state, ShellEvent::RequestLogin);
        assert_eq!(next.page, Page::Home);
    }

    #[test]
    fn login_and_signup_screens_switch_both_ways() {
        let (login, _) = reduce(&ShellState::default(), ShellEvent::RequestLogin);
        let (signup, _) = reduce(&login, ShellEvent::SwitchToSignup);
        assert_eq!(signup.page, Page::Signup);
        let (back, _) = reduce(&signup, ShellEvent::SwitchToLogin);
        assert_eq!(back.page, Page::Login);
    }

    #[test]
    fn logout_from_any_state_resets_everything() {
        for page in [Page::Plans, Page::History, Page::Profile, Page::Admin] {
            let state = ShellState {
                page,
                logged_in: true,
                is_admin: page == Page::Admin,
                profile: Some(profile()),
                plans: Plan::fallback_catalog(),
                history: vec![record(199)],
                ..ShellState::default()
            };
            let (next, effects) = reduce(&state, ShellEvent::Logout);
            assert_eq!(next.page, Page::Home);
            assert!(!next.logged_in && !next.is_admin);
            assert!(next.profile.is_none());
            assert!(next.plans.is_empty());
            assert!(next.history.is_empty());
            assert_eq!(effects, vec![Effect::ClearSession]);
        }
    }

    #[test]
    fn choosing_an_operator_opens_the_plans_page() {
        let (next, _) = reduce(&ShellState::default(), ShellEvent::OperatorChosen("Jio".to_string()));
        assert_eq!(next.page, Page::Plans);
        assert_eq!(next.selection.operator.as_deref(), Some("Jio"));
    }

    #[test]
    fn plan_selection_while_logged_out_is_blocked_with_a_message() {
        let event = ShellEvent::PlanChosen {
            operator: "Airtel".to_string(),
            price: 199,
        };
        let (next, _) = reduce(&ShellState::default(), event);
        assert_ne!(next.page, Page::Recharge);
        assert!(next.notice.is_some());
        assert!(next.notice.unwrap().contains("login"));
    }

    #[test]
    fn plan_selection_while_logged_in_fills_the_cart() {
        let event = ShellEvent::PlanChosen {
            operator: "Vi".to_string(),
            price: 479,
        };
        let (next, _) = reduce(&logged_in_state(), event);
        assert_eq!(next.page, Page::Recharge);
        assert_eq!(next.selection.operator.as_deref(), Some("Vi"));
        assert_eq!(next.selection.amount, Some(479));
    }

    #[test]
    fn completed_recharge_appends_exactly_one_record_and_clears_the_amount() {
        let state = ShellState {
            page: Page::Recharge,
            selection: Selection {
                operator: Some("Airtel".to_string()),
                amount: Some(199),
            },
            history: vec![record(99)],
            ..logged_in_state()
        };
        let new_record = record(199);
        let (next, _) = reduce(&state, ShellEvent::RechargeCompleted(new_record.clone()));
        assert_eq!(next.page, Page::History);
        assert_eq!(next.history.len(), state.history.len() + 1);
        assert_eq!(next.history.last(), Some(&new_record));
        assert_eq!(next.selection.amount, None);
        // The chosen operator is kept for a follow-up recharge.
        assert_eq!(next.selection.operator.as_deref(), Some("Airtel"));
    }

    #[test]
    fn admin_page_is_unreachable_without_the_admin_role() {
        let (next, _) = reduce(&logged_in_state(), ShellEvent::Navigate(Page::Admin));
        assert_eq!(next.page, Page::Home);

        let admin_state = ShellState {
            is_admin: true,
            ..logged_in_state()
        };
        let (next, _) = reduce(&admin_state, ShellEvent::Navigate(Page::Admin));
        assert_eq!(next.page, Page::Admin);
    }

    #[test]
    fn plain_navigation_moves_between_pages() {
        let (next, _) = reduce(&ShellState::default(), ShellEvent::Navigate(Page::Contact));
        assert_eq!(next.page, Page::Contact);
    }

    #[test]
    fn plan_fetch_failure_falls_back_to_the_builtin_catalog() {
        let (next, _) = reduce(&ShellState::default(), ShellEvent::PlansUnavailable);
        assert_eq!(next.plans.len(), 4);
        for operator in OPERATORS {
            assert_eq!(next.plans.iter().filter(|p| p.operator == operator).count(), 1);
        }

        // A catalog already loaded is not overwritten by a late failure.
        let loaded = ShellState {
            plans: vec![Plan::fallback_catalog().remove(0)],
            ..ShellState::default()
        };
        let (next, _) = reduce(&loaded, ShellEvent::PlansUnavailable);
        assert_eq!(next.plans.len(), 1);
    }

    #[test]
    fn stale_fetch_completions_after_logout_are_dropped() {
        let state = ShellState::default(); // logged out
        let (next, _) = reduce(&state, ShellEvent::ProfileLoaded(profile()));
        assert!(next.profile.is_none());
        let (next, _) = reduce(&state, ShellEvent::HistoryLoaded(vec![record(99)]));
        assert!(next.history.is_empty());
    }

    #[test]
    fn session_lifecycle_and_restore() {
        // Successful login response {token: "abc", role: Admin}.
        session::persist("abc", Role::Admin);
        assert!(session::is_authenticated());
        assert_eq!(session::role(), Some(Role::Admin));

        // A reload restores the session but always lands on Home.
        let restored = ShellState::restore();
        assert!(restored.logged_in && restored.is_admin);
        assert_eq!(restored.page, Page::Home);

        // Logout: no intermediate state.
        session::clear();
        assert!(!session::is_authenticated());
        let restored = ShellState::restore();
        assert!(!restored.logged_in && !restored.is_admin);

        // An empty token never counts as authenticated.
        session::persist("", Role::User);
        assert!(!session::is_authenticated());
        // Role is reported independently of token validity.
        assert_eq!(session::role(), Some(Role::User));
        session::clear();
    }

    fn profile() -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            mobile_number: "9876543210".to_string(),
            role: Role::User,
            created_at: None,
        }
    }
}
