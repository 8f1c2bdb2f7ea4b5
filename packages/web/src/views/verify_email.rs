use api::AuthApi;
use dioxus::prelude::*;
use session::{landing_for, SessionError};
use ui::{use_api, use_session, Notice, NoticeKind};

/// Opened from a link or a gate: sends a fresh code on arrival.
#[component]
pub fn VerifyEmail() -> Element {
    rsx! { VerifyEmailForm { code_sent: false } }
}

/// Right after registration, which already sent the first code.
#[component]
pub fn VerifyEmailSent() -> Element {
    rsx! { VerifyEmailForm { code_sent: true } }
}

#[component]
fn VerifyEmailForm(code_sent: bool) -> Element {
    let mut session = use_session();
    let api = use_api();
    let nav = use_navigator();
    let mut code = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut info = use_signal(|| Option::<String>::None);
    let mut sending = use_signal(|| false);
    let mut confirming = use_signal(|| false);

    // Registration already sent the first code
    let mount_api = api.clone();
    use_hook(move || {
        if code_sent || !session.peek().needs_email_code() {
            return;
        }
        spawn(async move {
            sending.set(true);
            if let Err(e) = mount_api.request_email_verification().await {
                tracing::warn!("Automatic email code request failed: {}", e);
            }
            sending.set(false);
        });
    });

    let (email, verified, home) = {
        let session = session.read();
        match session.user() {
            Some(user) => (
                user.email.clone(),
                user.email_verified,
                landing_for(user.role).path(),
            ),
            None => return rsx! {},
        }
    };

    let request_api = api.clone();
    let handle_request = move |_| {
        let api = request_api.clone();
        spawn(async move {
            error.set(None);
            info.set(None);
            if let Err(e) = session.read().ensure_email_on_file() {
                error.set(Some(e.to_string()));
                return;
            }

            sending.set(true);
            let result = api.request_email_verification().await;
            sending.set(false);

            match result {
                Ok(response) => info.set(Some(response.message)),
                Err(e) => error.set(Some(super::report("Email code request failed", e))),
            }
        });
    };

    let handle_confirm = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);
            info.set(None);
            let c = code().trim().to_string();
            if c.is_empty() {
                error.set(Some("Enter the code from the email".to_string()));
                return;
            }
            if let Err(e) = session.read().ensure_email_on_file() {
                error.set(Some(e.to_string()));
                return;
            }

            confirming.set(true);
            let result: Result<(), SessionError> = match api.confirm_email_verification(&c).await {
                Ok(response) => session.write().complete_email_verification(response),
                Err(e) => Err(e.into()),
            };
            confirming.set(false);

            match result {
                Ok(()) => {
                    super::linger().await;
                    nav.replace(home);
                }
                Err(e) => error.set(Some(super::report_session("Email verification failed", e))),
            }
        });
    };

    if verified {
        return rsx! {
            div {
                class: "auth-page",
                Notice { kind: NoticeKind::Success, message: "Your email {email} is verified." }
                p { Link { to: home, "Continue" } }
            }
        };
    }

    rsx! {
        div {
            class: "auth-page",
            h1 { "Verify your email" }
            p {
                class: "muted",
                if email.is_empty() {
                    "Add an email address to your profile first."
                } else {
                    "We will send a code to {email}."
                }
            }

            div {
                class: "form",

                if let Some(err) = error() {
                    Notice { message: err }
                }
                if let Some(msg) = info() {
                    Notice { kind: NoticeKind::Info, message: msg }
                }

                button {
                    class: "btn btn--ghost",
                    disabled: sending() || email.is_empty(),
                    onclick: handle_request,
                    if sending() { "Sending..." } else { "Send code" }
                }

                form {
                    class: "form",
                    onsubmit: handle_confirm,
                    input {
                        r#type: "text",
                        inputmode: "numeric",
                        placeholder: "Code",
                        value: code(),
                        oninput: move |evt: FormEvent| code.set(evt.value()),
                    }
                    button {
                        class: "btn",
                        r#type: "submit",
                        disabled: confirming(),
                        if confirming() { "Verifying..." } else { "Verify" }
                    }
                }
            }

            p { class: "muted", Link { to: home, "Skip for now" } }
        }
    }
}
