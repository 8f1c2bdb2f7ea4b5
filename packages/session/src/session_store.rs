//! # Session store: who is logged in
//!
//! [`SessionStore`] owns the current user profile and bearer token, mirrored into a
//! [`Storage`] backend under [`USER_KEY`] (JSON) and [`TOKEN_KEY`] (raw string).
//!
//! ## Lifecycle
//!
//! 1. [`SessionStore::new`] starts empty with `is_loading() == true`.
//! 2. [`SessionStore::initialize`] reads both slots once, synchronously. A user entry
//!    that does not parse is treated as absent; a lone slot is treated as logged out.
//! 3. `login` / `set_auth` / `verify_email` replace the session wholesale,
//!    `verify_phone` patches a flag, `logout` clears everything.
//!
//! Every mutation writes storage first and memory second, so a failing write leaves
//! memory untouched and the two never disagree.
//!
//! ## Async operations and UI signals
//!
//! The async operations (`login`, `verify_phone`, `verify_email`) hold `&mut self`
//! across the network call. UI code that keeps the store inside a reactive signal
//! cannot hold a write borrow across an await, so each operation is also exposed as
//! a precondition check plus a synchronous `complete_*` commit step. Both paths run
//! the same validation and the same write-through.

use api::{AuthApi, AuthResponse, EmailVerificationResponse, LoginRequest, Role, User};
use store::{Storage, TOKEN_KEY, USER_KEY};

use crate::error::SessionError;
use crate::guard::AuthStatus;

pub struct SessionStore<S> {
    storage: S,
    user: Option<User>,
    token: Option<String>,
    loading: bool,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            user: None,
            token: None,
            loading: true,
        }
    }

    /// Construct and immediately hydrate from storage.
    pub fn initialized(storage: S) -> Self {
        let mut session = Self::new(storage);
        session.initialize();
        session
    }

    /// Hydrate from storage. Runs once; later calls are no-ops.
    pub fn initialize(&mut self) {
        if !self.loading {
            return;
        }

        let user = self.read_user();
        let token = self.read_token();
        match (user, token) {
            (Some(user), Some(token)) => {
                tracing::debug!(user_id = %user.id, role = %user.role, "Restored session");
                self.user = Some(user);
                self.token = Some(token);
            }
            (None, None) => {}
            _ => tracing::debug!("Ignoring partial session in storage"),
        }
        self.loading = false;
    }

    fn read_user(&self) -> Option<User> {
        let raw = match self.storage.get_item(USER_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::error!("Failed to read stored user: {}", e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::debug!("Discarding unparsable stored user: {}", e);
                None
            }
        }
    }

    fn read_token(&self) -> Option<String> {
        match self.storage.get_item(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::error!("Failed to read stored token: {}", e);
                None
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Role of the authenticated user, `None` when logged out.
    pub fn role(&self) -> Option<Role> {
        if self.is_authenticated() {
            self.user.as_ref().map(|u| u.role)
        } else {
            None
        }
    }

    pub fn status(&self) -> AuthStatus {
        if self.loading {
            return AuthStatus::Loading;
        }
        match self.role() {
            Some(role) => AuthStatus::Authenticated(role),
            None => AuthStatus::Anonymous,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Commit a user and token together, e.g. right after registration.
    pub fn set_auth(&mut self, user: User, token: String) -> Result<(), SessionError> {
        if token.is_empty() {
            return Err(SessionError::InvalidResponse);
        }
        let previous_user = self.storage.get_item(USER_KEY)?;
        self.storage
            .set_item(USER_KEY, &serde_json::to_string(&user)?)?;
        if let Err(e) = self.storage.set_item(TOKEN_KEY, &token) {
            self.restore_user_slot(previous_user);
            return Err(e.into());
        }

        tracing::info!(user_id = %user.id, role = %user.role, "Signed in");
        self.user = Some(user);
        self.token = Some(token);
        Ok(())
    }

    /// Put the user slot back after a half-finished [`Self::set_auth`]. If that
    /// fails too, both slots are dropped so a reload starts logged out.
    fn restore_user_slot(&self, previous: Option<String>) {
        let restored = match &previous {
            Some(raw) => self.storage.set_item(USER_KEY, raw),
            None => self.storage.remove_item(USER_KEY),
        };
        if let Err(e) = restored {
            tracing::error!("Failed to roll back stored user: {}", e);
            let _ = self.storage.remove_item(USER_KEY);
            let _ = self.storage.remove_item(TOKEN_KEY);
        }
    }

    /// Validate an authentication response and commit it.
    ///
    /// A response without a user or with a missing/empty token is rejected and the
    /// current session is left as it was.
    pub fn complete_login(&mut self, response: AuthResponse) -> Result<&User, SessionError> {
        let (Some(user), Some(token)) = (response.user, response.token) else {
            tracing::warn!("Login response missing user or token");
            return Err(SessionError::InvalidResponse);
        };
        self.set_auth(user, token)?;
        self.user.as_ref().ok_or(SessionError::InvalidResponse)
    }

    /// Authenticate with an email, username or phone plus password.
    pub async fn login<A: AuthApi>(
        &mut self,
        api: &A,
        credential: &str,
        password: &str,
    ) -> Result<(), SessionError> {
        let response = api.login(&LoginRequest::new(credential, password)).await?;
        self.complete_login(response)?;
        Ok(())
    }

    /// Clear the session in memory and in storage. Safe to call when logged out.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        if self.is_authenticated() {
            tracing::info!("Signed out");
        }
        self.user = None;
        self.token = None;

        let removed_token = self.storage.remove_item(TOKEN_KEY);
        self.storage.remove_item(USER_KEY)?;
        removed_token?;
        Ok(())
    }

    /// Replace the stored profile, keeping the token.
    pub fn update_user(&mut self, user: User) -> Result<(), SessionError> {
        self.storage
            .set_item(USER_KEY, &serde_json::to_string(&user)?)?;
        self.user = Some(user);
        Ok(())
    }

    /// Phone number the confirmation code was sent to.
    pub fn phone_for_verification(&self) -> Result<String, SessionError> {
        self.user
            .as_ref()
            .and_then(User::phone_on_file)
            .map(str::to_string)
            .ok_or(SessionError::MissingPhone)
    }

    /// Mark the phone as verified after the backend confirmed the code.
    pub fn complete_phone_verification(&mut self) -> Result<(), SessionError> {
        let mut user = self.user.clone().ok_or(SessionError::MissingPhone)?;
        user.phone_verified = true;
        self.update_user(user)
    }

    pub async fn verify_phone<A: AuthApi>(
        &mut self,
        api: &A,
        code: &str,
    ) -> Result<(), SessionError> {
        let phone = self.phone_for_verification()?;
        api.confirm_phone_verification(&phone, code).await?;
        self.complete_phone_verification()
    }

    pub fn ensure_email_on_file(&self) -> Result<(), SessionError> {
        match self.user.as_ref().and_then(User::email_on_file) {
            Some(_) => Ok(()),
            None => Err(SessionError::MissingEmail),
        }
    }

    /// An email is on file and still unverified.
    pub fn needs_email_code(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|u| !u.email_verified && u.email_on_file().is_some())
    }

    /// Store exactly the user the backend returned for the confirmed code.
    pub fn complete_email_verification(
        &mut self,
        response: EmailVerificationResponse,
    ) -> Result<(), SessionError> {
        self.update_user(response.user)
    }

    pub async fn verify_email<A: AuthApi>(
        &mut self,
        api: &A,
        code: &str,
    ) -> Result<(), SessionError> {
        self.ensure_email_on_file()?;
        let response = api.confirm_email_verification(code).await?;
        self.complete_email_verification(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{client_user, owner_user, FailingStorage, FakeAuthApi};
    use store::MemoryStorage;

    fn logged_in(user: User) -> (SessionStore<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        let mut session = SessionStore::initialized(storage.clone());
        session.set_auth(user, "tok-1".to_string()).unwrap();
        (session, storage)
    }

    fn assert_consistent(session: &SessionStore<MemoryStorage>) {
        assert_eq!(
            session.is_authenticated(),
            session.user().is_some() && session.token().is_some()
        );
    }

    #[test]
    fn test_new_store_is_loading_until_initialized() {
        let mut session = SessionStore::new(MemoryStorage::new());
        assert!(session.is_loading());
        assert_eq!(session.status(), AuthStatus::Loading);

        session.initialize();
        assert!(!session.is_loading());
        assert!(!session.is_authenticated());
        assert_eq!(session.status(), AuthStatus::Anonymous);
    }

    #[test]
    fn test_initialize_restores_session() {
        let user_json = serde_json::to_string(&owner_user()).unwrap();
        let storage = MemoryStorage::with_items([(USER_KEY, user_json.as_str()), (TOKEN_KEY, "abc")]);

        let session = SessionStore::initialized(storage);
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc"));
        assert_eq!(session.status(), AuthStatus::Authenticated(Role::Owner));
    }

    #[test]
    fn test_initialize_runs_once() {
        let storage = MemoryStorage::new();
        let mut session = SessionStore::initialized(storage.clone());

        let user_json = serde_json::to_string(&client_user()).unwrap();
        storage.set_item(USER_KEY, &user_json).unwrap();
        storage.set_item(TOKEN_KEY, "abc").unwrap();

        session.initialize();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_corrupt_user_is_treated_as_logged_out() {
        let storage = MemoryStorage::with_items([(USER_KEY, "{not json"), (TOKEN_KEY, "abc")]);
        let session = SessionStore::initialized(storage);
        assert!(!session.is_loading());
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_user_without_token_is_logged_out() {
        let user_json = serde_json::to_string(&client_user()).unwrap();
        let storage = MemoryStorage::with_items([(USER_KEY, user_json.as_str())]);
        let session = SessionStore::initialized(storage);
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert_consistent(&session);
    }

    #[test]
    fn test_token_is_stored_raw() {
        let (_session, storage) = logged_in(client_user());
        assert_eq!(storage.get_item(TOKEN_KEY).unwrap().as_deref(), Some("tok-1"));

        let stored: User =
            serde_json::from_str(&storage.get_item(USER_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored, client_user());
    }

    #[test]
    fn test_failed_token_write_rolls_back_user_slot() {
        let (_session, storage) = logged_in(client_user());
        let flaky = FailingStorage::on_set(storage.clone(), TOKEN_KEY);
        let mut session_on_flaky = SessionStore::initialized(flaky);
        assert_eq!(session_on_flaky.user(), Some(&client_user()));

        let err = session_on_flaky
            .set_auth(owner_user(), "owner-tok".to_string())
            .unwrap_err();
        assert!(err.is_environment_fault());
        assert_eq!(session_on_flaky.user(), Some(&client_user()));
        assert_eq!(session_on_flaky.token(), Some("tok-1"));

        // A reload sees the old pair, never the new user with the old token
        let reloaded = SessionStore::initialized(storage.clone());
        assert_eq!(reloaded.user(), Some(&client_user()));
        assert_eq!(reloaded.token(), Some("tok-1"));
        assert_eq!(reloaded.role(), Some(Role::Client));
    }

    #[test]
    fn test_failed_token_write_on_empty_storage_leaves_no_user() {
        let storage = MemoryStorage::new();
        let mut session =
            SessionStore::initialized(FailingStorage::on_set(storage.clone(), TOKEN_KEY));

        assert!(session.set_auth(owner_user(), "owner-tok".to_string()).is_err());
        assert!(!session.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_failed_user_write_leaves_memory_untouched() {
        let (_session, storage) = logged_in(client_user());
        let mut session =
            SessionStore::initialized(FailingStorage::on_set(storage.clone(), USER_KEY));

        let mut edited = client_user();
        edited.full_name = "Carla Ruiz".to_string();
        assert!(session.update_user(edited).is_err());
        assert_eq!(session.user(), Some(&client_user()));

        let reloaded = SessionStore::initialized(storage);
        assert_eq!(reloaded.user(), Some(&client_user()));
    }

    #[tokio::test]
    async fn test_login_commits_user_and_token() {
        let api = FakeAuthApi::with_login(AuthResponse {
            user: Some(owner_user()),
            token: Some("abc".to_string()),
        });
        let storage = MemoryStorage::new();
        let mut session = SessionStore::initialized(storage.clone());

        session.login(&api, "owner@x.com", "secret").await.unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::Owner));
        assert_eq!(storage.get_item(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
        assert_eq!(api.calls(), vec!["login"]);
        assert_eq!(api.last_credential().as_deref(), Some("owner@x.com"));
    }

    #[tokio::test]
    async fn test_login_missing_token_keeps_previous_session() {
        let (mut session, storage) = logged_in(client_user());
        let api = FakeAuthApi::with_login(AuthResponse {
            user: Some(owner_user()),
            token: None,
        });

        let err = session.login(&api, "owner@x.com", "secret").await.unwrap_err();
        assert!(matches!(err, SessionError::InvalidResponse));

        assert_eq!(session.user(), Some(&client_user()));
        assert_eq!(session.token(), Some("tok-1"));
        assert_eq!(storage.get_item(TOKEN_KEY).unwrap().as_deref(), Some("tok-1"));
    }

    #[tokio::test]
    async fn test_login_missing_user_or_empty_token_fails() {
        let mut session = SessionStore::initialized(MemoryStorage::new());

        let api = FakeAuthApi::with_login(AuthResponse {
            user: None,
            token: Some("abc".to_string()),
        });
        assert!(session.login(&api, "a", "b").await.is_err());

        let api = FakeAuthApi::with_login(AuthResponse {
            user: Some(client_user()),
            token: Some(String::new()),
        });
        assert!(session.login(&api, "a", "b").await.is_err());

        assert!(!session.is_authenticated());
        assert!(session.storage().is_empty());
    }

    #[tokio::test]
    async fn test_login_api_error_is_propagated() {
        let mut session = SessionStore::initialized(MemoryStorage::new());
        let api = FakeAuthApi::failing(401, "Invalid credentials");

        let err = session.login(&api, "a", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(!err.is_environment_fault());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_logout_clears_memory_and_storage() {
        let (mut session, storage) = logged_in(owner_user());

        session.logout().unwrap();
        assert!(session.user().is_none());
        assert!(session.token().is_none());
        assert!(!storage.contains(USER_KEY));
        assert!(!storage.contains(TOKEN_KEY));

        // Idempotent
        session.logout().unwrap();
        assert!(!session.is_authenticated());
        assert_consistent(&session);
    }

    #[test]
    fn test_update_user_keeps_token() {
        let (mut session, storage) = logged_in(client_user());
        let mut edited = client_user();
        edited.full_name = "Carla Ruiz".to_string();

        session.update_user(edited.clone()).unwrap();
        assert_eq!(session.user(), Some(&edited));
        assert_eq!(session.token(), Some("tok-1"));

        let stored: User =
            serde_json::from_str(&storage.get_item(USER_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored.full_name, "Carla Ruiz");
    }

    #[tokio::test]
    async fn test_verify_phone_without_phone_makes_no_call() {
        let mut user = client_user();
        user.phone = None;
        let (mut session, _) = logged_in(user);
        let api = FakeAuthApi::default();

        let err = session.verify_phone(&api, "123456").await.unwrap_err();
        assert!(matches!(err, SessionError::MissingPhone));
        assert!(api.calls().is_empty());

        // Logged out: same precondition failure
        session.logout().unwrap();
        assert!(session.verify_phone(&api, "123456").await.is_err());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_verify_phone_patches_flag() {
        let (mut session, storage) = logged_in(client_user());
        let api = FakeAuthApi::default();

        session.verify_phone(&api, "123456").await.unwrap();

        assert_eq!(api.calls(), vec!["confirm_phone_verification"]);
        let user = session.user().unwrap();
        assert!(user.phone_verified);
        assert_eq!(user.full_name, client_user().full_name);
        assert!(session.is_authenticated());

        let stored: User =
            serde_json::from_str(&storage.get_item(USER_KEY).unwrap().unwrap()).unwrap();
        assert!(stored.phone_verified);
    }

    #[tokio::test]
    async fn test_verify_phone_failure_leaves_user() {
        let (mut session, _) = logged_in(client_user());
        let api = FakeAuthApi::failing(400, "Invalid code");

        assert!(session.verify_phone(&api, "000000").await.is_err());
        assert!(!session.user().unwrap().phone_verified);
    }

    #[tokio::test]
    async fn test_verify_email_without_email_makes_no_call() {
        let mut user = client_user();
        user.email = String::new();
        let (mut session, _) = logged_in(user);
        let api = FakeAuthApi::default();

        let err = session.verify_email(&api, "123456").await.unwrap_err();
        assert!(matches!(err, SessionError::MissingEmail));
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_needs_email_code() {
        let session = SessionStore::initialized(MemoryStorage::new());
        assert!(!session.needs_email_code());

        let (session, _) = logged_in(client_user());
        assert!(session.needs_email_code());

        let (session, _) = logged_in(owner_user());
        assert!(!session.needs_email_code());

        let mut no_email = client_user();
        no_email.email = String::new();
        let (session, _) = logged_in(no_email);
        assert!(!session.needs_email_code());
    }

    #[tokio::test]
    async fn test_verify_email_stores_server_user() {
        let mut local = client_user();
        local.phone_verified = true;
        let (mut session, storage) = logged_in(local);

        // The server's copy differs in more than the verified flag
        let mut server_user = client_user();
        server_user.email_verified = true;
        server_user.full_name = "Server Name".to_string();
        let api = FakeAuthApi::with_verified_user(server_user.clone());

        session.verify_email(&api, "123456").await.unwrap();

        assert_eq!(session.user(), Some(&server_user));
        assert_eq!(session.token(), Some("tok-1"));
        let stored: User =
            serde_json::from_str(&storage.get_item(USER_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored, server_user);
    }
}
