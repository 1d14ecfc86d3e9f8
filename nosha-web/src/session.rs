//! Persisted client session.
//!
//! The four keys below are the entire durable client-side state surface.
//! Every page reads the session through [`SessionStore`]; only the login,
//! registration and logout flows write it. Nothing else in the app touches
//! the storage medium directly.

use gloo_storage::{LocalStorage, Storage};
use shared::models::VendorProfile;
use thiserror::Error;

const IS_AUTHENTICATED_KEY: &str = "isAuthenticated";
const TOKEN_KEY: &str = "token";
const USER_DATA_KEY: &str = "userData";
const IS_NEW_USER_KEY: &str = "isNewUser";

/// The authenticated-principal state shared across the application.
///
/// Invariant: `is_authenticated` implies both `token` and `user` are present.
/// [`SessionStore::session`] never hands out a value violating this.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Whether a vendor is signed in.
    pub is_authenticated: bool,
    /// Bearer token for API calls.
    pub token: Option<String>,
    /// The signed-in vendor's profile.
    pub user: Option<VendorProfile>,
}

impl Session {
    /// A fully-populated, authenticated session.
    #[must_use]
    pub fn authenticated(token: String, user: VendorProfile) -> Self {
        Self {
            is_authenticated: true,
            token: Some(token),
            user: Some(user),
        }
    }
}

/// Session persistence failure. Callers abort the operation that needed the
/// write rather than continuing with an inconsistent session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The underlying storage medium rejected a write.
    #[error("session storage unavailable: {0}")]
    Storage(String),
}

/// Read/write/clear access to the persisted session.
#[derive(Debug)]
pub struct SessionStore;

impl SessionStore {
    /// Persist an authenticated session.
    ///
    /// The authenticated flag is written last so a concurrent reader either
    /// sees the previous session or the complete new one. If any write
    /// fails, the earlier writes are rolled back before the error returns.
    pub fn set_session(token: &str, user: &VendorProfile) -> Result<(), SessionError> {
        LocalStorage::set(TOKEN_KEY, token).map_err(|err| SessionError::Storage(err.to_string()))?;

        if let Err(err) = LocalStorage::set(USER_DATA_KEY, user) {
            LocalStorage::delete(TOKEN_KEY);
            return Err(SessionError::Storage(err.to_string()));
        }

        if let Err(err) = LocalStorage::set(IS_AUTHENTICATED_KEY, "true") {
            LocalStorage::delete(TOKEN_KEY);
            LocalStorage::delete(USER_DATA_KEY);
            return Err(SessionError::Storage(err.to_string()));
        }

        Ok(())
    }

    /// Remove the session. Safe to call when nothing is stored.
    pub fn clear_session() {
        LocalStorage::delete(IS_AUTHENTICATED_KEY);
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_DATA_KEY);
        LocalStorage::delete(IS_NEW_USER_KEY);
    }

    /// Read the current session.
    ///
    /// A partially-written session (flag without token/profile, or one of
    /// the pair missing) is reported on the console and treated as signed
    /// out rather than surfaced to callers.
    #[must_use]
    pub fn session() -> Session {
        let flag: Option<String> = LocalStorage::get(IS_AUTHENTICATED_KEY).ok();
        let token: Option<String> = LocalStorage::get(TOKEN_KEY).ok();
        let user: Option<VendorProfile> = LocalStorage::get(USER_DATA_KEY).ok();

        let (session, consistent) = assemble(flag.as_deref(), token, user);
        if !consistent {
            web_sys::console::warn_1(
                &"inconsistent persisted session; treating as signed out".into(),
            );
        }
        session
    }

    /// Bearer token, if a complete session is stored.
    #[must_use]
    pub fn token() -> Option<String> {
        Self::session().token
    }

    /// Flag a freshly-registered vendor so the app routes through onboarding.
    pub fn mark_new_user() {
        let _ = LocalStorage::set(IS_NEW_USER_KEY, "true");
    }

    /// Clear the onboarding flag once the welcome flow finishes.
    pub fn complete_onboarding() {
        LocalStorage::delete(IS_NEW_USER_KEY);
    }

    /// Whether the signed-in vendor still has onboarding to finish.
    #[must_use]
    pub fn is_new_user() -> bool {
        LocalStorage::get::<String>(IS_NEW_USER_KEY).is_ok_and(|value| value == "true")
    }
}

/// Decide what a stored (flag, token, user) triple means.
///
/// Returns the invariant-satisfying session plus whether the stored state
/// was internally consistent. Kept free of storage access so it is testable
/// off-wasm.
fn assemble(
    flag: Option<&str>,
    token: Option<String>,
    user: Option<VendorProfile>,
) -> (Session, bool) {
    let flagged = flag == Some("true");
    match (flagged, token, user) {
        (true, Some(token), Some(user)) => (Session::authenticated(token, user), true),
        // Flag set but the pair is incomplete, or leftovers without a flag.
        (true, _, _) => (Session::default(), false),
        (false, token, user) => {
            let consistent = token.is_none() && user.is_none();
            (Session::default(), consistent)
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn profile() -> VendorProfile {
        VendorProfile {
            id: 9,
            first_name: "Sara".to_string(),
            last_name: "Hassan".to_string(),
            email: "sara@example.com".to_string(),
            market_name: None,
            market_location: None,
        }
    }

    #[wasm_bindgen_test]
    fn set_then_get_roundtrips() {
        SessionStore::clear_session();
        SessionStore::set_session("t-wasm", &profile()).unwrap();

        let session = SessionStore::session();
        assert!(session.is_authenticated);
        assert_eq!(session.token.as_deref(), Some("t-wasm"));
        assert_eq!(session.user.unwrap().id, 9);
        SessionStore::clear_session();
    }

    #[wasm_bindgen_test]
    fn clear_is_idempotent() {
        SessionStore::clear_session();
        SessionStore::clear_session();
        assert_eq!(SessionStore::session(), Session::default());
    }

    #[wasm_bindgen_test]
    fn onboarding_flag_lifecycle() {
        SessionStore::complete_onboarding();
        assert!(!SessionStore::is_new_user());
        SessionStore::mark_new_user();
        assert!(SessionStore::is_new_user());
        SessionStore::complete_onboarding();
        assert!(!SessionStore::is_new_user());
    }
}
