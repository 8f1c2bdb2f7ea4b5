use dioxus::prelude::*;

use crate::auth::{use_session, LogoutButton};
use crate::icons::FaScissors;
use crate::Icon;

/// Top bar of the signed-in areas. Links for the area are passed as children.
#[component]
pub fn Navbar(children: Element) -> Element {
    let session = use_session();
    let name = session
        .read()
        .user()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        nav {
            class: "navbar",
            span {
                class: "navbar-brand",
                Icon { icon: FaScissors, width: 16, height: 16 }
                "Barber Club"
            }
            div { class: "navbar-links", {children} }
            div {
                class: "navbar-user",
                span { "{name}" }
                LogoutButton { class: "btn btn--ghost" }
            }
        }
    }
}
