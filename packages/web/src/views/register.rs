//! Registration page view.

use api::{AuthApi, RegisterRequest};
use dioxus::prelude::*;
use ui::{use_api, use_redirect_authenticated, use_session, Notice};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    use_redirect_authenticated();

    let mut session = use_session();
    let api = use_api();
    let nav = use_navigator();
    let mut full_name = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);

            let n = full_name().trim().to_string();
            let u = username().trim().to_string();
            let e = email().trim().to_string();
            let ph = phone().trim().to_string();
            let p = password();

            if n.is_empty() || u.is_empty() {
                error.set(Some("Name and username are required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if p != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            let request = RegisterRequest {
                full_name: n,
                username: u,
                email: e,
                phone: (!ph.is_empty()).then_some(ph),
                password: p,
            };

            loading.set(true);
            let response = api.register(&request).await;
            loading.set(false);

            match response {
                Ok(response) => match (response.user, response.token) {
                    (Some(user), Some(token)) => {
                        if let Err(e) = session.write().set_auth(user, token) {
                            error.set(Some(super::report_session("Failed to store session", e)));
                            return;
                        }
                        nav.replace(Route::VerifyEmailSent {});
                    }
                    // Account exists but no session was issued
                    _ => {
                        nav.replace(Route::Login {});
                    }
                },
                Err(e) => error.set(Some(super::report("Registration failed", e))),
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Create Account" }
            p { class: "muted", "Sign up for Barber Club" }

            form {
                class: "form",
                onsubmit: handle_register,

                if let Some(err) = error() {
                    Notice { message: err }
                }

                input {
                    r#type: "text",
                    placeholder: "Full name",
                    value: full_name(),
                    oninput: move |evt: FormEvent| full_name.set(evt.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "tel",
                    placeholder: "Phone (optional)",
                    value: phone(),
                    oninput: move |evt: FormEvent| phone.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password (min 8 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }
                button {
                    class: "btn",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "muted",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
