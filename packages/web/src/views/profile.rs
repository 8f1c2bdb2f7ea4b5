//! Profile settings shared by both areas.
//!
//! Every save that returns a user goes through `update_user`, so the stored
//! session always matches what the backend last confirmed.

use api::users::{ChangePasswordRequest, UpdateBarbershopRequest, UpdateProfileRequest};
use api::{AuthApi, NotificationChannel};
use dioxus::prelude::*;
use ui::{use_api, use_session, LoadingIndicator, Notice, NoticeKind};

use crate::Route;

#[component]
pub fn ClientProfile() -> Element {
    rsx! { ProfileView {} }
}

#[component]
pub fn OwnerProfile() -> Element {
    rsx! { ProfileView { show_barbershop: true } }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Shared profile view.
///
/// Owners additionally get the barbershop section.
#[component]
fn ProfileView(#[props(default)] show_barbershop: bool) -> Element {
    let mut session = use_session();
    let api = use_api();

    // Refresh the stored profile before the forms seed themselves from it
    let refresh = use_resource(move || {
        let api = api.clone();
        async move {
            let user = api
                .current_user()
                .await
                .map_err(|e| super::report("Refreshing profile failed", e))?;
            session
                .write()
                .update_user(user)
                .map_err(|e| super::report_session("Failed to store profile", e))
        }
    });

    let refresh_error = match &*refresh.read() {
        None => return rsx! { LoadingIndicator {} },
        Some(Err(err)) => Some(err.clone()),
        Some(Ok(())) => None,
    };
    let Some(user) = session.read().user().cloned() else {
        return rsx! {};
    };

    rsx! {
        h1 { "Profile" }

        if let Some(err) = refresh_error {
            Notice { kind: NoticeKind::Info, message: "Showing saved profile. {err}" }
        }

        VerificationStatus {
            email: user.email.clone(),
            email_verified: user.email_verified,
            phone_verified: user.phone_verified,
        }
        ProfileForm {}
        PasswordForm {}
        if show_barbershop {
            BarbershopForm {}
        }
    }
}

#[component]
fn VerificationStatus(email: String, email_verified: bool, phone_verified: bool) -> Element {
    rsx! {
        ul {
            li {
                "Email {email}: "
                if email_verified {
                    "verified"
                } else {
                    Link { to: Route::VerifyEmail {}, "verify" }
                }
            }
            li {
                "Phone: "
                if phone_verified {
                    "verified"
                } else {
                    Link { to: Route::VerifyPhone {}, "verify" }
                }
            }
        }
    }
}

#[component]
fn ProfileForm() -> Element {
    let mut session = use_session();
    let api = use_api();

    // Seed the fields once from the stored profile
    let initial = session.peek().user().cloned();
    let mut full_name = use_signal(|| initial.as_ref().map(|u| u.full_name.clone()).unwrap_or_default());
    let mut phone = use_signal(|| {
        initial
            .as_ref()
            .and_then(|u| u.phone.clone())
            .unwrap_or_default()
    });
    let mut language = use_signal(|| {
        initial
            .as_ref()
            .and_then(|u| u.language.clone())
            .unwrap_or_default()
    });
    let mut channel = use_signal(|| {
        initial
            .as_ref()
            .and_then(|u| u.notification_channel)
            .map(|c| c.as_str().to_string())
            .unwrap_or_default()
    });
    let mut marketing = use_signal(|| {
        initial
            .as_ref()
            .and_then(|u| u.marketing_opt_in)
            .unwrap_or(false)
    });
    let mut status = use_signal(|| Option::<Result<String, String>>::None);
    let mut saving = use_signal(|| false);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            status.set(None);
            let Some(name) = non_empty(full_name()) else {
                status.set(Some(Err("Name is required".to_string())));
                return;
            };

            let request = UpdateProfileRequest {
                full_name: Some(name),
                language: non_empty(language()),
                notification_channel: NotificationChannel::parse(&channel()),
                marketing_opt_in: Some(marketing()),
                ..UpdateProfileRequest::default()
            }
            .with_phone_input(&phone());

            saving.set(true);
            let result = api.update_me(&request).await;
            saving.set(false);

            let outcome = match result {
                Ok(user) => session
                    .write()
                    .update_user(user)
                    .map(|()| "Profile saved.".to_string())
                    .map_err(|e| super::report_session("Failed to store profile", e)),
                Err(e) => Err(super::report("Saving profile failed", e)),
            };
            status.set(Some(outcome));
        });
    };

    rsx! {
        h2 { "Personal details" }
        form {
            class: "form",
            onsubmit: handle_save,

            StatusNotice { status: status() }

            input {
                r#type: "text",
                placeholder: "Full name",
                value: full_name(),
                oninput: move |evt: FormEvent| full_name.set(evt.value()),
            }
            input {
                r#type: "tel",
                placeholder: "Phone",
                value: phone(),
                oninput: move |evt: FormEvent| phone.set(evt.value()),
            }
            input {
                r#type: "text",
                placeholder: "Language (e.g. es, en)",
                value: language(),
                oninput: move |evt: FormEvent| language.set(evt.value()),
            }
            select {
                value: channel(),
                onchange: move |evt: FormEvent| channel.set(evt.value()),
                option { value: "", "No notifications preference" }
                for c in NotificationChannel::ALL {
                    option { key: "{c.as_str()}", value: c.as_str(), "{c.label()}" }
                }
            }
            label {
                input {
                    r#type: "checkbox",
                    checked: marketing(),
                    onchange: move |evt: FormEvent| marketing.set(evt.checked()),
                }
                " Send me offers and news"
            }
            button {
                class: "btn",
                r#type: "submit",
                disabled: saving(),
                if saving() { "Saving..." } else { "Save" }
            }
        }
    }
}

#[component]
fn PasswordForm() -> Element {
    let api = use_api();
    let mut current = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut status = use_signal(|| Option::<Result<String, String>>::None);
    let mut saving = use_signal(|| false);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            status.set(None);
            let p = new_password();
            if p.len() < 8 {
                status.set(Some(Err("Password must be at least 8 characters".to_string())));
                return;
            }
            if p != confirm() {
                status.set(Some(Err("Passwords do not match".to_string())));
                return;
            }

            let request = ChangePasswordRequest {
                current_password: current(),
                new_password: p,
            };
            saving.set(true);
            let result = api.change_password(&request).await;
            saving.set(false);

            match result {
                Ok(response) => {
                    current.set(String::new());
                    new_password.set(String::new());
                    confirm.set(String::new());
                    let message = if response.message.is_empty() {
                        "Password changed.".to_string()
                    } else {
                        response.message
                    };
                    status.set(Some(Ok(message)));
                }
                Err(e) => status.set(Some(Err(super::report("Changing password failed", e)))),
            }
        });
    };

    rsx! {
        h2 { "Password" }
        form {
            class: "form",
            onsubmit: handle_save,

            StatusNotice { status: status() }

            input {
                r#type: "password",
                placeholder: "Current password",
                autocomplete: "current-password",
                value: current(),
                oninput: move |evt: FormEvent| current.set(evt.value()),
            }
            input {
                r#type: "password",
                placeholder: "New password",
                autocomplete: "new-password",
                value: new_password(),
                oninput: move |evt: FormEvent| new_password.set(evt.value()),
            }
            input {
                r#type: "password",
                placeholder: "Confirm new password",
                autocomplete: "new-password",
                value: confirm(),
                oninput: move |evt: FormEvent| confirm.set(evt.value()),
            }
            button {
                class: "btn",
                r#type: "submit",
                disabled: saving(),
                if saving() { "Saving..." } else { "Change password" }
            }
        }
    }
}

#[component]
fn BarbershopForm() -> Element {
    let mut session = use_session();
    let api = use_api();

    let shop = session.peek().user().and_then(|u| u.barbershop.clone());
    let field = |get: fn(&api::Barbershop) -> Option<String>| {
        shop.as_ref().and_then(get).unwrap_or_default()
    };
    let mut name = use_signal(|| field(|s| Some(s.name.clone())));
    let mut phone = use_signal(|| field(|s| s.phone.clone()));
    let mut address = use_signal(|| field(|s| s.address.clone()));
    let mut city = use_signal(|| field(|s| s.city.clone()));
    let mut description = use_signal(|| field(|s| s.description.clone()));
    let mut open_time = use_signal(|| field(|s| Some(s.open_time.clone())));
    let mut close_time = use_signal(|| field(|s| Some(s.close_time.clone())));
    let mut slot_minutes = use_signal(|| field(|s| Some(s.slot_minutes.to_string())));
    let mut booking_policy = use_signal(|| field(|s| s.booking_policy.clone()));
    let mut status = use_signal(|| Option::<Result<String, String>>::None);
    let mut saving = use_signal(|| false);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            status.set(None);
            let slot = slot_minutes().trim().to_string();
            let slot_minutes = if slot.is_empty() {
                None
            } else {
                match slot.parse::<u32>() {
                    Ok(minutes) if minutes > 0 => Some(minutes),
                    _ => {
                        status.set(Some(Err("Slot length must be a positive number of minutes".to_string())));
                        return;
                    }
                }
            };

            let request = UpdateBarbershopRequest {
                name: non_empty(name()),
                phone: non_empty(phone()),
                address: non_empty(address()),
                city: non_empty(city()),
                description: non_empty(description()),
                open_time: non_empty(open_time()),
                close_time: non_empty(close_time()),
                slot_minutes,
                booking_policy: non_empty(booking_policy()),
                ..UpdateBarbershopRequest::default()
            };

            saving.set(true);
            let result = api.update_barbershop(&request).await;
            saving.set(false);

            let outcome = match result {
                Ok(shop) => {
                    let user = session.peek().user().cloned();
                    match user {
                        Some(mut user) => {
                            user.barbershop = Some(shop);
                            session
                                .write()
                                .update_user(user)
                                .map(|()| "Barbershop saved.".to_string())
                                .map_err(|e| super::report_session("Failed to store profile", e))
                        }
                        None => Ok("Barbershop saved.".to_string()),
                    }
                }
                Err(e) => Err(super::report("Saving barbershop failed", e)),
            };
            status.set(Some(outcome));
        });
    };

    rsx! {
        h2 { "Barbershop" }
        form {
            class: "form",
            onsubmit: handle_save,

            StatusNotice { status: status() }

            input {
                r#type: "text",
                placeholder: "Name",
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            input {
                r#type: "tel",
                placeholder: "Phone",
                value: phone(),
                oninput: move |evt: FormEvent| phone.set(evt.value()),
            }
            input {
                r#type: "text",
                placeholder: "Address",
                value: address(),
                oninput: move |evt: FormEvent| address.set(evt.value()),
            }
            input {
                r#type: "text",
                placeholder: "City",
                value: city(),
                oninput: move |evt: FormEvent| city.set(evt.value()),
            }
            textarea {
                placeholder: "Description",
                value: description(),
                oninput: move |evt: FormEvent| description.set(evt.value()),
            }
            input {
                r#type: "time",
                value: open_time(),
                oninput: move |evt: FormEvent| open_time.set(evt.value()),
            }
            input {
                r#type: "time",
                value: close_time(),
                oninput: move |evt: FormEvent| close_time.set(evt.value()),
            }
            input {
                r#type: "number",
                min: "5",
                placeholder: "Slot length (minutes)",
                value: slot_minutes(),
                oninput: move |evt: FormEvent| slot_minutes.set(evt.value()),
            }
            textarea {
                placeholder: "Booking policy",
                value: booking_policy(),
                oninput: move |evt: FormEvent| booking_policy.set(evt.value()),
            }
            button {
                class: "btn",
                r#type: "submit",
                disabled: saving(),
                if saving() { "Saving..." } else { "Save barbershop" }
            }
        }
    }
}

#[component]
fn StatusNotice(status: Option<Result<String, String>>) -> Element {
    match status {
        Some(Ok(message)) => rsx! { Notice { kind: NoticeKind::Success, message } },
        Some(Err(message)) => rsx! { Notice { message } },
        None => rsx! {},
    }
}
