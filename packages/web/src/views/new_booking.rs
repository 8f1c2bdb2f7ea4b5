//! Booking flow for clients: service, date, free slot, optional notes.
//!
//! Slot availability comes from the backend as-is. Submitting is gated by the
//! configured [`VerificationPolicy`](session::VerificationPolicy) for
//! [`Action::CreateBooking`].

use api::bookings::CreateBookingRequest;
use api::format::{format_long_date, format_money, format_time, local_today, parse_date};
use api::AvailableSlot;
use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use session::{Action, Verification};
use ui::{use_api, use_config, use_session, LoadingIndicator, Notice, NoticeKind};

use crate::Route;

#[component]
pub fn NewBooking() -> Element {
    let session = use_session();
    let config = use_config();
    let api = use_api();
    let nav = use_navigator();

    let mut service_id = use_signal(String::new);
    let mut date = use_signal(|| local_today().to_string());
    let mut slot = use_signal(|| Option::<DateTime<Utc>>::None);
    let mut notes = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut needs_email = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let services_api = api.clone();
    let services = use_resource(move || {
        let api = services_api.clone();
        async move { api.services().await }
    });

    let slots_api = api.clone();
    let slots = use_resource(move || {
        let api = slots_api.clone();
        let day = parse_date(&date());
        async move {
            match day {
                Some(day) => api.available_slots(day).await.map_err(|e| e.to_string()),
                None => Ok(Vec::new()),
            }
        }
    });

    // Default to the first service once the list arrives
    use_effect(move || {
        if let Some(list) = services.read().as_ref() {
            if service_id.peek().is_empty() {
                if let Some(first) = list.first() {
                    service_id.set(first.id.clone());
                }
            }
        }
    });

    let missing = session
        .read()
        .user()
        .and_then(|user| config.policy.missing(user, Action::CreateBooking));
    let currency = session
        .read()
        .user()
        .and_then(|u| u.barbershop.as_ref())
        .map(|b| b.currency.clone())
        .unwrap_or_default();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);
            needs_email.set(false);

            let Some(start) = slot() else {
                error.set(Some("Pick a time slot".to_string()));
                return;
            };
            let service = service_id();
            if service.is_empty() {
                error.set(Some("Pick a service".to_string()));
                return;
            }

            submitting.set(true);
            let request = CreateBookingRequest::new(service, start, &notes());
            let result = api.create_booking(&request).await;
            submitting.set(false);

            match result {
                Ok(booking) => {
                    tracing::info!(booking_id = %booking.id, "Booking created");
                    nav.push(Route::MyBookings {});
                }
                Err(e) => {
                    needs_email.set(e.is_email_not_verified());
                    error.set(Some(super::report("Booking failed", e)));
                }
            }
        });
    };

    let blocked = missing.is_some();
    let day_label = parse_date(&date()).map(format_long_date).unwrap_or_default();

    rsx! {
        h1 { "New booking" }

        if let Some(verification) = missing {
            VerificationNeeded { verification }
        }

        form {
            class: "form",
            onsubmit: handle_submit,

            if let Some(err) = error() {
                Notice { message: err }
            }
            if needs_email() {
                Link { to: Route::VerifyEmail {}, "Verify your email" }
            }

            label { "Service" }
            match &*services.read() {
                Some(list) => rsx! {
                    select {
                        value: service_id(),
                        onchange: move |evt: FormEvent| service_id.set(evt.value()),
                        for service in list.iter() {
                            option {
                                key: "{service.id}",
                                value: "{service.id}",
                                "{service.name} · {service.duration_min} min · {format_money(service.price, &currency)}"
                            }
                        }
                    }
                },
                None => rsx! { LoadingIndicator { label: "Loading services..." } },
            }

            label { "Date" }
            input {
                r#type: "date",
                value: date(),
                min: local_today().to_string(),
                oninput: move |evt: FormEvent| {
                    date.set(evt.value());
                    slot.set(None);
                },
            }
            p { class: "muted", "{day_label}" }

            label { "Time" }
            match &*slots.read() {
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "muted", "No free slots on this day." }
                },
                Some(Ok(list)) => rsx! {
                    SlotPicker { slots: list.clone(), selected: slot(), on_select: move |start| slot.set(Some(start)) }
                },
                Some(Err(err)) => rsx! { Notice { message: err.clone() } },
                None => rsx! { LoadingIndicator { label: "Loading slots..." } },
            }

            label { "Notes" }
            textarea {
                placeholder: "Anything the barber should know (optional)",
                value: notes(),
                oninput: move |evt: FormEvent| notes.set(evt.value()),
            }

            button {
                class: "btn",
                r#type: "submit",
                disabled: submitting() || blocked || slot().is_none(),
                if submitting() { "Booking..." } else { "Book" }
            }
        }
    }
}

#[component]
fn SlotPicker(
    slots: Vec<AvailableSlot>,
    selected: Option<DateTime<Utc>>,
    on_select: EventHandler<DateTime<Utc>>,
) -> Element {
    rsx! {
        div {
            class: "slots",
            for s in slots {
                button {
                    key: "{s.start_time}",
                    r#type: "button",
                    class: if selected == Some(s.start_time) { "btn slot--selected" } else { "btn" },
                    onclick: move |_| on_select.call(s.start_time),
                    "{format_time(&s.start_time)}"
                }
            }
        }
    }
}

#[component]
fn VerificationNeeded(verification: Verification) -> Element {
    let target = match verification {
        Verification::Email => Route::VerifyEmail {},
        Verification::Phone => Route::VerifyPhone {},
    };
    rsx! {
        Notice { kind: NoticeKind::Info, message: verification.describe() }
        Link { to: target, "Verify now" }
    }
}
