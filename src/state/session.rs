//! Session store: the client-held proof of authentication.
//!
//! Two string entries - the bearer token and the account role - persisted
//! in browser localStorage so a reload keeps the user signed in. On native
//! builds (desktop mode, unit tests) the same contract is backed by an
//! in-process map.
//!
//! The stored role is a UI hint only: the server re-authorizes every
//! privileged call, and nothing here verifies token expiry.

use crate::models::Role;

const TOKEN_KEY: &str = "token";
const ROLE_KEY: &str = "userRole";

/// Persist a freshly issued session. Called by the login facade.
pub fn persist(token: &str, role: Role) {
    backend::set(TOKEN_KEY, token);
    backend::set(ROLE_KEY, role.as_str());
}

/// Drop the session unconditionally. Idempotent, never fails.
pub fn clear() {
    backend::remove(TOKEN_KEY);
    backend::remove(ROLE_KEY);
}

/// The current bearer token, if a non-empty one is stored. Read by the
/// HTTP client at send time, never captured.
pub fn token() -> Option<String> {
    backend::get(TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn is_authenticated() -> bool {
    token().is_some()
}

/// The stored role, independent of token validity.
pub fn role() -> Option<Role> {
    backend::get(ROLE_KEY).as_deref().and_then(Role::parse)
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use web_sys::Storage;

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn get(key: &str) -> Option<String> {
        storage()?.get_item(key).ok()?
    }

    pub fn set(key: &str, value: &str) {
        if let Some(storage) = storage() {
            if storage.set_item(key, value).is_err() {
                tracing::warn!("localStorage write failed for {}", key);
            }
        }
    }

    pub fn remove(key: &str) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::collections::HashMap;
    use std::sync::{Mutex, OnceLock};

    fn store() -> &'static Mutex<HashMap<String, String>> {
        static STORE: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();
        STORE.get_or_init(|| Mutex::new(HashMap::new()))
    }

    pub fn get(key: &str) -> Option<String> {
        store().lock().unwrap().get(key).cloned()
    }

    pub fn set(key: &str, value: &str) {
        store().lock().unwrap().insert(key.to_string(), value.to_string());
    }

    pub fn remove(key: &str) {
        store().lock().unwrap().remove(key);
    }
}
