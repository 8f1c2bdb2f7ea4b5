//! # User model for authenticated sessions
//!
//! [`User`] is the profile the backend returns from login, registration, email
//! verification and `GET /users/me`. The web client persists it (as JSON) next to
//! the bearer token, so every field must round-trip through `serde_json`.
//!
//! Field names follow the backend's camelCase JSON. Optional profile fields default
//! to `None` so older payloads without them still decode.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of an account. Decides which area of the app a session may enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Client,
    Owner,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Client => f.write_str("CLIENT"),
            Role::Owner => f.write_str("OWNER"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationChannel {
    Whatsapp,
    Sms,
    Email,
}

impl NotificationChannel {
    pub const ALL: [NotificationChannel; 3] = [
        NotificationChannel::Whatsapp,
        NotificationChannel::Sms,
        NotificationChannel::Email,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationChannel::Whatsapp => "WHATSAPP",
            NotificationChannel::Sms => "SMS",
            NotificationChannel::Email => "EMAIL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NotificationChannel::Whatsapp => "WhatsApp",
            NotificationChannel::Sms => "SMS",
            NotificationChannel::Email => "Email",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// Barbershop settings attached to owner accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barbershop {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Opening time as `HH:MM`.
    pub open_time: String,
    /// Closing time as `HH:MM`.
    pub close_time: String,
    pub slot_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_policy: Option<String>,
    pub time_zone: String,
}

/// User profile as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub phone_verified: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// ISO date string, e.g. `1990-04-12`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_channel: Option<NotificationChannel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketing_opt_in: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barbershop: Option<Barbershop>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Get display name, falling back to the username if the full name is blank.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }

    /// Phone number on file, ignoring blank strings.
    pub fn phone_on_file(&self) -> Option<&str> {
        self.phone.as_deref().filter(|p| !p.trim().is_empty())
    }

    /// Email on file, ignoring blank strings.
    pub fn email_on_file(&self) -> Option<&str> {
        Some(self.email.as_str()).filter(|e| !e.trim().is_empty())
    }

    pub fn is_owner(&self) -> bool {
        self.role == Role::Owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_backend_user() {
        let json = r#"{
            "id": "u1",
            "fullName": "Ana Torres",
            "username": "ana",
            "email": "ana@example.com",
            "phone": null,
            "role": "OWNER",
            "emailVerified": true,
            "phoneVerified": false,
            "notificationChannel": "WHATSAPP",
            "createdAt": "2024-05-01T10:00:00.000Z",
            "updatedAt": "2024-05-01T10:00:00.000Z"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Owner);
        assert!(user.is_owner());
        assert!(user.email_verified);
        assert_eq!(user.phone_on_file(), None);
        assert_eq!(user.notification_channel, Some(NotificationChannel::Whatsapp));
        assert_eq!(user.display_name(), "Ana Torres");
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let json = r#"{"id":"u1","fullName":"","username":"x","role":"ADMIN"}"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let json = r#"{"id":"u1","fullName":" ","username":"carlos","role":"CLIENT"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.display_name(), "carlos");
        assert_eq!(user.email_on_file(), None);
        assert_eq!(user.role.to_string(), "CLIENT");
    }

    #[test]
    fn test_notification_channel_keys_match_wire_names() {
        for channel in NotificationChannel::ALL {
            let wire = serde_json::to_value(channel).unwrap();
            assert_eq!(wire, channel.as_str());
            assert_eq!(NotificationChannel::parse(channel.as_str()), Some(channel));
        }
        assert_eq!(NotificationChannel::parse("PIGEON"), None);
    }
}
