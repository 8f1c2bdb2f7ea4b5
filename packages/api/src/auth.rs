//! # Authentication endpoints
//!
//! Login, registration, verification codes and password reset. The session store in
//! the `session` crate depends on the [`AuthApi`] trait rather than on
//! [`ApiClient`] directly, so it can be exercised against an in-process fake.
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | [`login`](AuthApi::login) | `POST /auth/login` |
//! | [`register`](AuthApi::register) | `POST /auth/register` |
//! | [`request_email_verification`](AuthApi::request_email_verification) | `POST /auth/verify-email/request` |
//! | [`confirm_email_verification`](AuthApi::confirm_email_verification) | `POST /auth/verify-email/confirm` |
//! | [`request_phone_verification`](AuthApi::request_phone_verification) | `POST /auth/verify-phone/request` |
//! | [`confirm_phone_verification`](AuthApi::confirm_phone_verification) | `POST /auth/verify-phone/confirm` |
//! | [`request_password_reset`](AuthApi::request_password_reset) | `POST /auth/password-reset/request` |
//! | [`confirm_password_reset`](AuthApi::confirm_password_reset) | `POST /auth/password-reset/confirm` |
//! | [`current_user`](AuthApi::current_user) | `GET /users/me` |

use std::future::Future;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::User;

#[derive(Clone, Serialize)]
pub struct LoginRequest {
    /// Email, username or phone. The backend works out which.
    pub credential: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(credential: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credential: credential.into(),
            password: password.into(),
        }
    }
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
}

/// Body of a successful login.
///
/// Both fields are optional on the wire so a half-formed response can be detected
/// and rejected instead of failing deep inside JSON decoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailVerificationResponse {
    pub user: User,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Async interface over the authentication endpoints.
pub trait AuthApi {
    fn login(
        &self,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;
    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl Future<Output = Result<RegisterResponse, ApiError>>;
    fn request_email_verification(
        &self,
    ) -> impl Future<Output = Result<MessageResponse, ApiError>>;
    fn confirm_email_verification(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<EmailVerificationResponse, ApiError>>;
    fn request_phone_verification(
        &self,
        phone: &str,
    ) -> impl Future<Output = Result<MessageResponse, ApiError>>;
    fn confirm_phone_verification(
        &self,
        phone: &str,
        code: &str,
    ) -> impl Future<Output = Result<MessageResponse, ApiError>>;
    fn request_password_reset(
        &self,
        phone: &str,
    ) -> impl Future<Output = Result<MessageResponse, ApiError>>;
    fn confirm_password_reset(
        &self,
        phone: &str,
        code: &str,
        new_password: &str,
    ) -> impl Future<Output = Result<MessageResponse, ApiError>>;
    fn current_user(&self) -> impl Future<Output = Result<User, ApiError>>;
}

impl AuthApi for ApiClient {
    #[tracing::instrument(skip_all)]
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post("auth/login", request).await
    }

    #[tracing::instrument(skip_all)]
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.post("auth/register", request).await
    }

    #[tracing::instrument(skip(self))]
    async fn request_email_verification(&self) -> Result<MessageResponse, ApiError> {
        self.post_empty("auth/verify-email/request").await
    }

    #[tracing::instrument(skip_all)]
    async fn confirm_email_verification(
        &self,
        code: &str,
    ) -> Result<EmailVerificationResponse, ApiError> {
        self.post("auth/verify-email/confirm", &json!({ "code": code }))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn request_phone_verification(&self, phone: &str) -> Result<MessageResponse, ApiError> {
        self.post("auth/verify-phone/request", &json!({ "phone": phone }))
            .await
    }

    #[tracing::instrument(skip(self, code))]
    async fn confirm_phone_verification(
        &self,
        phone: &str,
        code: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.post(
            "auth/verify-phone/confirm",
            &json!({ "phone": phone, "code": code }),
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn request_password_reset(&self, phone: &str) -> Result<MessageResponse, ApiError> {
        self.post("auth/password-reset/request", &json!({ "phone": phone }))
            .await
    }

    #[tracing::instrument(skip(self, code, new_password))]
    async fn confirm_password_reset(
        &self,
        phone: &str,
        code: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.post(
            "auth/password-reset/confirm",
            &json!({ "phone": phone, "code": code, "newPassword": new_password }),
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn current_user(&self) -> Result<User, ApiError> {
        self.get("users/me").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_tolerates_missing_token() {
        let body = r#"{"user":{"id":"u1","fullName":"A","username":"a","role":"CLIENT"}}"#;
        let response: AuthResponse = serde_json::from_str(body).unwrap();
        assert!(response.user.is_some());
        assert!(response.token.is_none());
    }

    #[test]
    fn test_register_request_omits_missing_phone() {
        let request = RegisterRequest {
            full_name: "Ana".into(),
            username: "ana".into(),
            email: "ana@example.com".into(),
            phone: None,
            password: "secret123".into(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["fullName"], "Ana");
        assert!(value.get("phone").is_none());
    }
}
