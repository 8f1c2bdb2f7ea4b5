use api::ApiError;
use store::StorageError;
use thiserror::Error;

/// Failures of session operations.
///
/// Every variant except [`SessionError::Storage`] and [`SessionError::Encode`] is
/// an expected outcome a form shows to the user. Those two mean the environment
/// itself is broken.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid login response: missing user or token")]
    InvalidResponse,

    #[error("No phone number is associated with your account")]
    MissingPhone,

    #[error("No email address is associated with your account")]
    MissingEmail,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("could not encode session: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Shown instead of the raw storage error, which means nothing to the user.
pub const STORAGE_UNAVAILABLE_MESSAGE: &str =
    "Your session could not be saved on this device. Check that site storage is enabled and try again.";

impl SessionError {
    pub fn is_environment_fault(&self) -> bool {
        matches!(self, SessionError::Storage(_) | SessionError::Encode(_))
    }

    /// Text for a form's error box.
    pub fn user_message(&self) -> String {
        if self.is_environment_fault() {
            STORAGE_UNAVAILABLE_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_failure_gets_its_own_message() {
        let err = SessionError::from(StorageError::Unavailable("quota".to_string()));
        assert!(err.is_environment_fault());
        assert_eq!(err.user_message(), STORAGE_UNAVAILABLE_MESSAGE);
    }

    #[test]
    fn test_user_errors_keep_their_message() {
        let err = SessionError::from(ApiError::Http {
            status: 401,
            message: "Invalid credentials".to_string(),
            code: None,
        });
        assert!(!err.is_environment_fault());
        assert_eq!(err.user_message(), "Invalid credentials");
        assert_eq!(
            SessionError::MissingPhone.user_message(),
            "No phone number is associated with your account"
        );
    }
}
