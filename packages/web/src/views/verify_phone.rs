use api::AuthApi;
use dioxus::prelude::*;
use session::{landing_for, SessionError};
use ui::{use_api, use_session, Notice, NoticeKind};

#[component]
pub fn VerifyPhone() -> Element {
    let mut session = use_session();
    let api = use_api();
    let mut code = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut info = use_signal(|| Option::<String>::None);
    let mut sending = use_signal(|| false);
    let mut confirming = use_signal(|| false);

    let (phone, verified, home) = {
        let session = session.read();
        match session.user() {
            Some(user) => (
                user.phone_on_file().map(str::to_string),
                user.phone_verified,
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
            let phone = match session.read().phone_for_verification() {
                Ok(phone) => phone,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            sending.set(true);
            let result = api.request_phone_verification(&phone).await;
            sending.set(false);

            match result {
                Ok(response) => info.set(Some(response.message)),
                Err(e) => error.set(Some(super::report("Phone code request failed", e))),
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
                error.set(Some("Enter the code from the SMS".to_string()));
                return;
            }
            let phone = match session.read().phone_for_verification() {
                Ok(phone) => phone,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            confirming.set(true);
            let result: Result<(), SessionError> =
                match api.confirm_phone_verification(&phone, &c).await {
                    Ok(_) => session.write().complete_phone_verification(),
                    Err(e) => Err(e.into()),
                };
            confirming.set(false);

            if let Err(e) = result {
                error.set(Some(super::report_session("Phone verification failed", e)));
            }
        });
    };

    if verified {
        return rsx! {
            div {
                class: "auth-page",
                Notice { kind: NoticeKind::Success, message: "Your phone number is verified." }
                p { Link { to: home, "Continue" } }
            }
        };
    }

    rsx! {
        div {
            class: "auth-page",
            h1 { "Verify your phone" }

            match &phone {
                Some(phone) => rsx! { p { class: "muted", "We will text a code to {phone}." } },
                None => rsx! { p { class: "muted", "Add a phone number to your profile first." } },
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
                    disabled: sending() || phone.is_none(),
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
                        disabled: confirming() || phone.is_none(),
                        if confirming() { "Verifying..." } else { "Verify" }
                    }
                }
            }

            p { class: "muted", Link { to: home, "Skip for now" } }
        }
    }
}
