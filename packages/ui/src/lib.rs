//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const APP_CSS: Asset = asset!("/assets/app.css");

mod auth;
pub use auth::{
    use_api, use_config, use_redirect_authenticated, use_session, AppStorage, LogoutButton,
    SessionProvider, SessionSignal,
};

mod protected;
pub use protected::{LoadingIndicator, Protected};

mod navbar;
pub use navbar::Navbar;

mod notice;
pub use notice::{Notice, NoticeKind};
