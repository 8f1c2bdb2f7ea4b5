mod layouts;
pub use layouts::{ClientArea, HomeRedirect, OwnerArea, SignedIn};

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod reset_password;
pub use reset_password::{ResetPassword, ResetPasswordConfirm};

mod verify_email;
pub use verify_email::{VerifyEmail, VerifyEmailSent};

mod verify_phone;
pub use verify_phone::VerifyPhone;

mod new_booking;
pub use new_booking::NewBooking;

mod my_bookings;
pub use my_bookings::MyBookings;

mod owner_home;
pub use owner_home::OwnerHome;

mod owner_bookings;
pub use owner_bookings::OwnerBookings;

mod owner_blocks;
pub use owner_blocks::OwnerBlocks;

mod owner_schedule;
pub use owner_schedule::OwnerSchedule;

mod profile;
pub use profile::{ClientProfile, OwnerProfile};

/// Message shown for a failed request, logged on the way.
pub(crate) fn report(context: &str, error: impl std::fmt::Display) -> String {
    tracing::warn!("{}: {}", context, error);
    error.to_string()
}

/// Like [`report`] for session operations: storage faults get a message of their own.
pub(crate) fn report_session(context: &str, error: session::SessionError) -> String {
    tracing::warn!("{}: {}", context, error);
    error.user_message()
}

/// Pause so a success notice is seen before the page navigates away.
pub(crate) async fn linger() {
    gloo_timers::future::sleep(std::time::Duration::from_millis(1500)).await;
}
