//! Test doubles shared by the unit tests in this crate.

use std::cell::RefCell;

use api::{
    ApiError, AuthApi, AuthResponse, EmailVerificationResponse, LoginRequest, MessageResponse,
    RegisterRequest, RegisterResponse, Role, User,
};
use store::{MemoryStorage, Storage, StorageError};

pub fn client_user() -> User {
    User {
        id: "u-client".to_string(),
        full_name: "Carla Client".to_string(),
        username: "carla".to_string(),
        email: "carla@example.com".to_string(),
        phone: Some("+51999888777".to_string()),
        role: Role::Client,
        email_verified: false,
        phone_verified: false,
        avatar_url: None,
        gender: None,
        birth_date: None,
        notification_channel: None,
        marketing_opt_in: None,
        language: None,
        barbershop: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn owner_user() -> User {
    User {
        id: "u-owner".to_string(),
        full_name: "Oscar Owner".to_string(),
        username: "oscar".to_string(),
        email: "owner@x.com".to_string(),
        role: Role::Owner,
        email_verified: true,
        ..client_user()
    }
}

/// Memory-backed storage whose writes to one key always fail.
pub struct FailingStorage {
    inner: MemoryStorage,
    failing_key: &'static str,
}

impl FailingStorage {
    pub fn on_set(inner: MemoryStorage, failing_key: &'static str) -> Self {
        Self { inner, failing_key }
    }
}

impl Storage for FailingStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == self.failing_key {
            return Err(StorageError::Unavailable("quota".to_string()));
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key)
    }
}

/// Records every call; answers with canned data or a fixed HTTP failure.
#[derive(Default)]
pub struct FakeAuthApi {
    login_response: AuthResponse,
    verified_user: Option<User>,
    failure: Option<(u16, String)>,
    calls: RefCell<Vec<&'static str>>,
    last_credential: RefCell<Option<String>>,
}

impl FakeAuthApi {
    pub fn with_login(response: AuthResponse) -> Self {
        Self {
            login_response: response,
            ..Self::default()
        }
    }

    pub fn with_verified_user(user: User) -> Self {
        Self {
            verified_user: Some(user),
            ..Self::default()
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            failure: Some((status, message.to_string())),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn last_credential(&self) -> Option<String> {
        self.last_credential.borrow().clone()
    }

    fn record(&self, call: &'static str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some((status, message)) => Err(ApiError::Http {
                status: *status,
                message: message.clone(),
                code: None,
            }),
            None => Ok(()),
        }
    }

    fn message(&self) -> MessageResponse {
        MessageResponse {
            message: "ok".to_string(),
        }
    }
}

impl AuthApi for FakeAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        *self.last_credential.borrow_mut() = Some(request.credential.clone());
        self.record("login")?;
        Ok(self.login_response.clone())
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.record("register")?;
        Ok(RegisterResponse {
            user: self.login_response.user.clone(),
            token: self.login_response.token.clone(),
            message: Some("registered".to_string()),
        })
    }

    async fn request_email_verification(&self) -> Result<MessageResponse, ApiError> {
        self.record("request_email_verification")?;
        Ok(self.message())
    }

    async fn confirm_email_verification(
        &self,
        _code: &str,
    ) -> Result<EmailVerificationResponse, ApiError> {
        self.record("confirm_email_verification")?;
        let user = self.verified_user.clone().unwrap_or_else(|| User {
            email_verified: true,
            ..client_user()
        });
        Ok(EmailVerificationResponse {
            user,
            message: "verified".to_string(),
        })
    }

    async fn request_phone_verification(&self, _phone: &str) -> Result<MessageResponse, ApiError> {
        self.record("request_phone_verification")?;
        Ok(self.message())
    }

    async fn confirm_phone_verification(
        &self,
        _phone: &str,
        _code: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.record("confirm_phone_verification")?;
        Ok(self.message())
    }

    async fn request_password_reset(&self, _phone: &str) -> Result<MessageResponse, ApiError> {
        self.record("request_password_reset")?;
        Ok(self.message())
    }

    async fn confirm_password_reset(
        &self,
        _phone: &str,
        _code: &str,
        _new_password: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.record("confirm_password_reset")?;
        Ok(self.message())
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.record("current_user")?;
        Ok(self.verified_user.clone().unwrap_or_else(client_user))
    }
}
