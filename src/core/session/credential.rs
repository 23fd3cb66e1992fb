//! Persisted bearer credential
//!
//! One token slot per browser origin, stored as JSON with a client-readable
//! expiry. Writing overwrites the previous token; removal is explicit
//! (logout, failed refresh, failed restore). A record past its expiry loads
//! as absent and is cleared on sight.
//!
//! The same storage also caches a previously entered age per user id, used
//! by the profile merge fallback.

use serde::{Deserialize, Serialize};

/// Storage key for the credential in localStorage.
const STORAGE_KEY_SESSION: &str = "eventra_session";

/// Fixed credential lifetime: one day from persist.
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// The persisted bearer token with its expiry (unix seconds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCredential {
    pub token: String,
    pub expires_at: i64,
}

impl StoredCredential {
    /// Stamp a fresh credential with the fixed TTL.
    pub fn issued_at(token: impl Into<String>, now: i64) -> Self {
        Self {
            token: token.into(),
            expires_at: now + TOKEN_TTL_SECS,
        }
    }

    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at <= now
    }
}

/// localStorage key for a user's cached age.
pub fn age_cache_key(user_id: &str) -> String {
    format!("eventra_age_{user_id}")
}

/// Current time in unix seconds.
#[cfg(not(feature = "ssr"))]
pub fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

#[cfg(feature = "ssr")]
pub fn now_secs() -> i64 {
    0
}

/// Load the stored credential, clearing and skipping it when expired.
#[cfg(not(feature = "ssr"))]
pub fn load() -> Option<StoredCredential> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let raw = storage.get_item(STORAGE_KEY_SESSION).ok()??;
    let credential: StoredCredential = serde_json::from_str(&raw).ok()?;
    if credential.is_expired(now_secs()) {
        let _ = storage.remove_item(STORAGE_KEY_SESSION);
        return None;
    }
    Some(credential)
}

/// The bearer token to attach to outgoing requests, if any.
#[cfg(not(feature = "ssr"))]
pub fn access_token() -> Option<String> {
    load().map(|credential| credential.token)
}

/// Persist a new token, overwriting the previous slot.
#[cfg(not(feature = "ssr"))]
pub fn store(token: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let credential = StoredCredential::issued_at(token, now_secs());
            let _ = storage.set_item(
                STORAGE_KEY_SESSION,
                &serde_json::to_string(&credential).unwrap_or_default(),
            );
        }
    }
}

/// Delete the stored credential.
#[cfg(not(feature = "ssr"))]
pub fn clear() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(STORAGE_KEY_SESSION);
        }
    }
}

/// Previously entered age for this user, if one was cached.
#[cfg(not(feature = "ssr"))]
pub fn cached_age(user_id: &str) -> Option<u32> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let raw = storage.get_item(&age_cache_key(user_id)).ok()??;
    raw.parse().ok()
}

/// Cache the age a user entered, keyed by user id.
#[cfg(not(feature = "ssr"))]
pub fn remember_age(user_id: &str, age: u32) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(&age_cache_key(user_id), &age.to_string());
        }
    }
}

// SSR stubs. Session restore and token reads only happen in the browser.

#[cfg(feature = "ssr")]
pub fn load() -> Option<StoredCredential> {
    None
}

#[cfg(feature = "ssr")]
pub fn access_token() -> Option<String> {
    None
}

#[cfg(feature = "ssr")]
pub fn store(_token: &str) {}

#[cfg(feature = "ssr")]
pub fn clear() {}

#[cfg(feature = "ssr")]
pub fn cached_age(_user_id: &str) -> Option<u32> {
    None
}

#[cfg(feature = "ssr")]
pub fn remember_age(_user_id: &str, _age: u32) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_credential_expires_after_one_day() {
        let credential = StoredCredential::issued_at("tok", 1_000);
        assert_eq!(credential.expires_at, 1_000 + TOKEN_TTL_SECS);
        assert!(!credential.is_expired(1_000));
        assert!(!credential.is_expired(1_000 + TOKEN_TTL_SECS - 1));
        assert!(credential.is_expired(1_000 + TOKEN_TTL_SECS));
        assert!(credential.is_expired(1_000 + TOKEN_TTL_SECS + 1));
    }

    #[test]
    fn age_cache_keys_are_scoped_per_user() {
        assert_eq!(age_cache_key("u-1"), "eventra_age_u-1");
        assert_ne!(age_cache_key("u-1"), age_cache_key("u-2"));
    }
}
