//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the one [`SessionStore`] of the app inside a context
//! signal. Components read it with [`use_session`] and call the API with
//! [`use_api`], which attaches the current bearer token.

use api::ApiClient;
use dioxus::prelude::*;
use session::{landing_for, AppConfig, SessionStore, LOGIN_PATH};

/// Storage backend the session persists into on this platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStorage = store::LocalStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type AppStorage = store::FileStorage;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type AppStorage = store::MemoryStorage;

pub type SessionSignal = Signal<SessionStore<AppStorage>>;

fn platform_storage() -> AppStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FileStorage::default_location()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStorage::new()
    }
}

/// Get the session signal. Updates whenever the user logs in, out, or is edited.
pub fn use_session() -> SessionSignal {
    use_context::<SessionSignal>()
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// API client for the configured backend, carrying the session's token if any.
pub fn use_api() -> ApiClient {
    let session = use_session();
    let client = use_context::<ApiClient>();
    let token = session.read().token().map(str::to_string);
    client.with_token(token.as_deref())
}

/// Send an already-authenticated session away from a guest-only page
/// (login, register) to its landing route.
///
/// Checked once on mount, so a page that signs the user in keeps control of
/// where it navigates next.
pub fn use_redirect_authenticated() {
    let session = use_session();
    let nav = use_navigator();
    use_hook(move || {
        if let Some(role) = session.peek().role() {
            nav.replace(landing_for(role).path());
        }
    });
}

/// Provider component that owns the session.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(#[props(default)] config: Option<AppConfig>, children: Element) -> Element {
    let config = use_context_provider(move || config.unwrap_or_else(AppConfig::load));
    use_context_provider(|| config.client());

    // Hydrate synchronously so the first guard pass already sees the stored session
    let session = use_signal(|| SessionStore::initialized(platform_storage()));
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let onclick = move |_| {
        // Memory is cleared even when storage refuses; the error is only logged
        if let Err(e) = session.write().logout() {
            tracing::error!("Failed to clear stored session: {}", e);
        }
        nav.replace(LOGIN_PATH);
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
