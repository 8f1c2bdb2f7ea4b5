//! Login page: one credential field (email, username or phone) plus password.

use api::{AuthApi, LoginRequest};
use dioxus::prelude::*;
use session::{landing_for, SessionError};
use ui::{use_api, use_redirect_authenticated, use_session, Notice};

use crate::Route;

#[component]
pub fn Login() -> Element {
    use_redirect_authenticated();

    let mut session = use_session();
    let api = use_api();
    let nav = use_navigator();
    let mut credential = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);

            let c = credential().trim().to_string();
            let p = password();
            if c.is_empty() || p.is_empty() {
                error.set(Some("Enter your email, username or phone and your password".to_string()));
                return;
            }

            loading.set(true);
            let result: Result<_, SessionError> = match api.login(&LoginRequest::new(c, p)).await {
                Ok(response) => session.write().complete_login(response).map(|user| user.role),
                Err(e) => Err(e.into()),
            };
            loading.set(false);

            match result {
                Ok(role) => {
                    nav.replace(landing_for(role).path());
                }
                Err(e) => error.set(Some(super::report_session("Login failed", e))),
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Barber Club" }
            p { class: "muted", "Sign in to book or manage appointments" }

            form {
                class: "form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    Notice { message: err }
                }

                input {
                    r#type: "text",
                    placeholder: "Email, username or phone",
                    autocomplete: "username",
                    value: credential(),
                    oninput: move |evt: FormEvent| credential.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    autocomplete: "current-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    class: "btn",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "muted",
                Link { to: Route::ResetPassword {}, "Forgot your password?" }
            }
            p {
                class: "muted",
                "No account yet? "
                Link { to: Route::Register {}, "Create one" }
            }
        }
    }
}
