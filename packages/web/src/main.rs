use dioxus::prelude::*;

use ui::SessionProvider;
use views::{
    ClientArea, ClientProfile, Login, MyBookings, NewBooking, OwnerArea, OwnerBlocks,
    OwnerBookings, OwnerHome, OwnerProfile, OwnerSchedule, Register, ResetPassword,
    ResetPasswordConfirm, SignedIn, VerifyEmail, VerifyEmailSent,
    VerifyPhone,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/reset-password")]
    ResetPassword {},
    #[route("/reset-password/confirm?:phone")]
    ResetPasswordConfirm { phone: String },

    #[layout(SignedIn)]
        #[route("/verify-email")]
        VerifyEmail {},
        #[route("/verify-email/sent")]
        VerifyEmailSent {},
        #[route("/verify-phone")]
        VerifyPhone {},
    #[end_layout]

    #[layout(ClientArea)]
        #[route("/app")]
        ClientIndex {},
        #[route("/app/new-booking")]
        NewBooking {},
        #[route("/app/my-bookings")]
        MyBookings {},
        #[route("/app/profile")]
        ClientProfile {},
    #[end_layout]

    #[layout(OwnerArea)]
        #[route("/owner")]
        OwnerHome {},
        #[route("/owner/bookings")]
        OwnerBookings {},
        #[route("/owner/disabled-slots")]
        OwnerBlocks {},
        #[route("/owner/schedule")]
        OwnerSchedule {},
        #[route("/owner/profile")]
        OwnerProfile {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::APP_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// `/` goes to the session's landing route.
#[component]
fn Root() -> Element {
    rsx! { views::HomeRedirect {} }
}

/// `/app` opens the booking form.
#[component]
fn ClientIndex() -> Element {
    let nav = use_navigator();
    nav.replace(Route::NewBooking {});
    rsx! {}
}

/// Unknown paths are treated like `/`.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "Unmatched route");
    rsx! { views::HomeRedirect {} }
}
