//! Password reset by SMS code: request a code for a phone, then confirm it
//! together with the new password.

use api::AuthApi;
use dioxus::prelude::*;
use ui::{use_api, Notice, NoticeKind};

use crate::Route;

#[component]
pub fn ResetPassword() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut phone = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_request = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);
            let ph = phone().trim().to_string();
            if ph.is_empty() {
                error.set(Some("Enter the phone number on your account".to_string()));
                return;
            }

            loading.set(true);
            let result = api.request_password_reset(&ph).await;
            loading.set(false);

            match result {
                Ok(_) => {
                    nav.push(Route::ResetPasswordConfirm { phone: ph });
                }
                Err(e) => error.set(Some(super::report("Password reset request failed", e))),
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { "Reset password" }
            p { class: "muted", "We will send a code to your phone" }

            form {
                class: "form",
                onsubmit: handle_request,

                if let Some(err) = error() {
                    Notice { message: err }
                }

                input {
                    r#type: "tel",
                    placeholder: "Phone",
                    value: phone(),
                    oninput: move |evt: FormEvent| phone.set(evt.value()),
                }
                button {
                    class: "btn",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Sending..." } else { "Send code" }
                }
            }

            p {
                class: "muted",
                Link { to: Route::Login {}, "Back to sign in" }
            }
        }
    }
}

#[component]
pub fn ResetPasswordConfirm(phone: String) -> Element {
    let api = use_api();
    let mut phone = use_signal(move || phone);
    let mut code = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut done = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_confirm = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);
            let ph = phone().trim().to_string();
            let c = code().trim().to_string();
            let p = new_password();

            if ph.is_empty() || c.is_empty() {
                error.set(Some("Phone and code are required".to_string()));
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

            loading.set(true);
            let result = api.confirm_password_reset(&ph, &c, &p).await;
            loading.set(false);

            match result {
                Ok(_) => done.set(true),
                Err(e) => error.set(Some(super::report("Password reset failed", e))),
            }
        });
    };

    if done() {
        return rsx! {
            div {
                class: "auth-page",
                Notice { kind: NoticeKind::Success, message: "Your password was changed." }
                p { Link { to: Route::Login {}, "Sign in" } }
            }
        };
    }

    rsx! {
        div {
            class: "auth-page",
            h1 { "Choose a new password" }

            form {
                class: "form",
                onsubmit: handle_confirm,

                if let Some(err) = error() {
                    Notice { message: err }
                }

                input {
                    r#type: "tel",
                    placeholder: "Phone",
                    value: phone(),
                    oninput: move |evt: FormEvent| phone.set(evt.value()),
                }
                input {
                    r#type: "text",
                    inputmode: "numeric",
                    placeholder: "Code",
                    value: code(),
                    oninput: move |evt: FormEvent| code.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "New password",
                    value: new_password(),
                    oninput: move |evt: FormEvent| new_password.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Confirm new password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }
                button {
                    class: "btn",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Saving..." } else { "Reset password" }
                }
            }

            p {
                class: "muted",
                Link { to: Route::ResetPassword {}, "Send a new code" }
            }
        }
    }
}
