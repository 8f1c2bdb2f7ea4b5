//! Which verifications gate which actions.
//!
//! Email and phone verification are treated differently by product policy: a verified
//! email is required to create a booking, while phone verification gates nothing.
//! That asymmetry lives here as configuration instead of in individual pages.

use api::User;
use serde::{Deserialize, Serialize};

/// User actions that can be gated on a verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    CreateBooking,
    UpdateProfile,
    ManageSchedule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Email,
    Phone,
}

impl Verification {
    pub fn describe(&self) -> &'static str {
        match self {
            Verification::Email => "Verify your email address to continue",
            Verification::Phone => "Verify your phone number to continue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationPolicy {
    #[serde(default = "default_email_required_for")]
    pub email_required_for: Vec<Action>,
    #[serde(default)]
    pub phone_required_for: Vec<Action>,
}

fn default_email_required_for() -> Vec<Action> {
    vec![Action::CreateBooking]
}

impl Default for VerificationPolicy {
    fn default() -> Self {
        Self {
            email_required_for: default_email_required_for(),
            phone_required_for: Vec::new(),
        }
    }
}

impl VerificationPolicy {
    /// First verification `user` still lacks for `action`, if any.
    pub fn missing(&self, user: &User, action: Action) -> Option<Verification> {
        if self.email_required_for.contains(&action) && !user.email_verified {
            return Some(Verification::Email);
        }
        if self.phone_required_for.contains(&action) && !user.phone_verified {
            return Some(Verification::Phone);
        }
        None
    }

    pub fn allows(&self, user: &User, action: Action) -> bool {
        self.missing(user, action).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::client_user;

    #[test]
    fn test_default_policy_gates_booking_on_email_only() {
        let policy = VerificationPolicy::default();
        let mut user = client_user();
        user.phone_verified = false;

        assert_eq!(
            policy.missing(&user, Action::CreateBooking),
            Some(Verification::Email)
        );
        assert!(policy.allows(&user, Action::UpdateProfile));

        user.email_verified = true;
        // Unverified phone never blocks by default
        assert!(policy.allows(&user, Action::CreateBooking));
    }

    #[test]
    fn test_phone_gate_when_configured() {
        let policy = VerificationPolicy {
            email_required_for: Vec::new(),
            phone_required_for: vec![Action::CreateBooking],
        };
        let mut user = client_user();
        assert_eq!(
            policy.missing(&user, Action::CreateBooking),
            Some(Verification::Phone)
        );
        user.phone_verified = true;
        assert!(policy.allows(&user, Action::CreateBooking));
    }
}
