//! Profile, password and barbershop updates.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Barbershop, Gender, NotificationChannel, User};

/// Partial profile update. `None` fields are left untouched by the backend.
///
/// `phone` can also be cleared: `Some(None)` is sent as `null`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_channel: Option<NotificationChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_opt_in: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl UpdateProfileRequest {
    /// Set the phone from a form field; a blank field clears it.
    pub fn with_phone_input(mut self, input: &str) -> Self {
        let phone = input.trim();
        self.phone = Some((!phone.is_empty()).then(|| phone.to_string()));
        self
    }
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangePasswordResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBarbershopRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_policy: Option<String>,
}

impl ApiClient {
    /// Save profile changes and return the updated user.
    #[tracing::instrument(skip_all)]
    pub async fn update_me(&self, request: &UpdateProfileRequest) -> Result<User, ApiError> {
        self.put("users/me", request).await
    }

    #[tracing::instrument(skip_all)]
    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<ChangePasswordResponse, ApiError> {
        self.put("users/me/password", request).await
    }

    #[tracing::instrument(skip_all)]
    pub async fn update_barbershop(
        &self,
        request: &UpdateBarbershopRequest,
    ) -> Result<Barbershop, ApiError> {
        self.put("users/owner/profile", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_phone_is_sent_as_null() {
        let request = UpdateProfileRequest::default().with_phone_input("  ");
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("phone").is_some_and(|v| v.is_null()));
    }

    #[test]
    fn test_untouched_phone_is_omitted() {
        let value = serde_json::to_value(UpdateProfileRequest::default()).unwrap();
        assert!(value.get("phone").is_none());

        let request = UpdateProfileRequest::default().with_phone_input(" +51999 ");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["phone"], "+51999");
    }
}
