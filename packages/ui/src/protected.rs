use dioxus::prelude::*;
use session::{guard, GuardDecision, RouteAccess};

use crate::auth::use_session;
use crate::icons::FaSpinner;
use crate::Icon;

/// Renders `children` only when the session satisfies `access`.
///
/// While the session is loading only the spinner is shown. Otherwise a failing
/// check replaces the current history entry with the landing route the guard
/// picks and renders nothing.
#[component]
pub fn Protected(access: RouteAccess, children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();

    use_effect(move || {
        let decision = guard(session.read().status(), access);
        if let Some(path) = decision.redirect_path() {
            tracing::debug!(path, "Route guard redirect");
            nav.replace(path);
        }
    });

    let decision = guard(session.read().status(), access);
    match decision {
        GuardDecision::Loading => rsx! { LoadingIndicator {} },
        GuardDecision::Render => rsx! { {children} },
        GuardDecision::Redirect(_) => rsx! {},
    }
}

#[component]
pub fn LoadingIndicator(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "loading",
            role: "status",
            Icon { icon: FaSpinner, width: 18, height: 18, class: "loading-spinner" }
            span { "{label}" }
        }
    }
}
