//! # Client session and route policy
//!
//! The part of the web client with real invariants:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`session_store`] | [`SessionStore`]: user + token in memory, written through to [`store::Storage`] |
//! | [`guard`] | [`guard()`] / [`home_redirect`]: render, wait or redirect for a route |
//! | [`policy`] | [`VerificationPolicy`]: which verifications gate which actions |
//! | [`config`] | [`AppConfig`]: backend URL and policy, from TOML or the environment |
//!
//! The store is constructor-injected with its storage backend and has no global
//! state, so it can be driven directly in tests.

pub mod config;
pub mod error;
pub mod guard;
pub mod policy;
pub mod session_store;

#[cfg(test)]
mod testing;

pub use config::{ApiConfig, AppConfig};
pub use error::SessionError;
pub use guard::{
    guard, home_redirect, landing_for, AuthStatus, GuardDecision, Landing, RouteAccess,
    CLIENT_HOME_PATH, LOGIN_PATH, OWNER_HOME_PATH,
};
pub use policy::{Action, Verification, VerificationPolicy};
pub use session_store::SessionStore;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{owner_user, FakeAuthApi};
    use api::AuthResponse;
    use store::{MemoryStorage, TOKEN_KEY};

    #[test]
    fn test_fresh_start_redirects_protected_route_to_login() {
        let session = SessionStore::initialized(MemoryStorage::new());
        assert!(!session.is_loading());

        let decision = guard(session.status(), RouteAccess::CLIENT);
        assert_eq!(decision.redirect_path(), Some("/login"));
    }

    #[tokio::test]
    async fn test_owner_login_then_navigation() {
        let api = FakeAuthApi::with_login(AuthResponse {
            user: Some(owner_user()),
            token: Some("abc".to_string()),
        });
        let mut session = SessionStore::initialized(MemoryStorage::new());
        session.login(&api, "owner@x.com", "secret").await.unwrap();
        assert!(session.is_authenticated());

        assert_eq!(guard(session.status(), RouteAccess::OWNER), GuardDecision::Render);
        assert_eq!(
            guard(session.status(), RouteAccess::CLIENT).redirect_path(),
            Some("/owner")
        );
        assert_eq!(home_redirect(session.status()).redirect_path(), Some("/owner"));
    }

    #[test]
    fn test_token_without_user_is_logged_out() {
        let storage = MemoryStorage::with_items([(TOKEN_KEY, "abc")]);
        let session = SessionStore::initialized(storage);

        assert!(!session.is_authenticated());
        assert_eq!(session.status(), AuthStatus::Anonymous);
        assert_eq!(
            guard(session.status(), RouteAccess::Authenticated),
            GuardDecision::Redirect(Landing::Login)
        );
    }

    #[test]
    fn test_reload_restores_what_login_stored() {
        let storage = MemoryStorage::new();
        let mut session = SessionStore::initialized(storage.clone());
        session
            .set_auth(owner_user(), "abc".to_string())
            .unwrap();

        // A second "page load" over the same storage
        let reloaded = SessionStore::initialized(storage);
        assert_eq!(reloaded.user(), Some(&owner_user()));
        assert_eq!(reloaded.token(), Some("abc"));
    }
}
