//! Guard layouts: one per access rule, wrapping every protected subtree.

use dioxus::prelude::*;
use session::{home_redirect, RouteAccess};
use ui::{use_session, LoadingIndicator, Navbar, Protected};

use crate::Route;

/// Any signed-in session (verification pages).
#[component]
pub fn SignedIn() -> Element {
    rsx! {
        Protected {
            access: RouteAccess::Authenticated,
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn ClientArea() -> Element {
    rsx! {
        Protected {
            access: RouteAccess::CLIENT,
            Navbar {
                Link { to: Route::NewBooking {}, "Book" }
                Link { to: Route::MyBookings {}, "My bookings" }
                Link { to: Route::ClientProfile {}, "Profile" }
            }
            main { class: "page", Outlet::<Route> {} }
        }
    }
}

#[component]
pub fn OwnerArea() -> Element {
    rsx! {
        Protected {
            access: RouteAccess::OWNER,
            Navbar {
                Link { to: Route::OwnerHome {}, "Dashboard" }
                Link { to: Route::OwnerBookings {}, "Bookings" }
                Link { to: Route::OwnerBlocks {}, "Blocks" }
                Link { to: Route::OwnerSchedule {}, "Schedule" }
                Link { to: Route::OwnerProfile {}, "Profile" }
            }
            main { class: "page", Outlet::<Route> {} }
        }
    }
}

/// Replace the current entry with the landing route for the session.
#[component]
pub fn HomeRedirect() -> Element {
    let session = use_session();
    let nav = use_navigator();

    use_effect(move || {
        if let Some(path) = home_redirect(session.read().status()).redirect_path() {
            nav.replace(path);
        }
    });

    rsx! { LoadingIndicator {} }
}
