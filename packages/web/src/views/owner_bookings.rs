use api::bookings::OwnerBookingsFilter;
use api::format::{format_date, format_time_range, parse_date};
use api::BookingStatus;
use dioxus::prelude::*;
use ui::{use_api, LoadingIndicator, Notice};

/// Owner booking list with date/status filters and status transitions.
#[component]
pub fn OwnerBookings() -> Element {
    let api = use_api();
    let mut date = use_signal(String::new);
    let mut status = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut updating = use_signal(|| Option::<String>::None);

    let list_api = api.clone();
    let mut bookings = use_resource(move || {
        let api = list_api.clone();
        let filter = OwnerBookingsFilter {
            date: parse_date(&date()),
            status: BookingStatus::parse(&status()),
        };
        async move {
            api.owner_bookings(&filter)
                .await
                .map_err(|e| super::report("Loading bookings failed", e))
        }
    });

    let apply = use_callback(move |(booking_id, next): (String, BookingStatus)| {
        let api = api.clone();
        spawn(async move {
            error.set(None);
            updating.set(Some(booking_id.clone()));
            let result = api.update_booking_status(&booking_id, next).await;
            updating.set(None);

            match result {
                Ok(booking) => {
                    tracing::info!(booking_id = %booking.id, status = booking.status.as_str(), "Booking updated");
                    bookings.restart();
                }
                Err(e) => error.set(Some(super::report("Updating booking failed", e))),
            }
        });
    });

    rsx! {
        h1 { "Bookings" }

        div {
            class: "form",
            input {
                r#type: "date",
                value: date(),
                oninput: move |evt: FormEvent| date.set(evt.value()),
            }
            select {
                value: status(),
                onchange: move |evt: FormEvent| status.set(evt.value()),
                option { value: "", "All statuses" }
                for s in BookingStatus::ALL {
                    option { key: "{s.as_str()}", value: s.as_str(), "{s.label()}" }
                }
            }
        }

        if let Some(err) = error() {
            Notice { message: err }
        }

        match &*bookings.read() {
            None => rsx! { LoadingIndicator {} },
            Some(Err(err)) => rsx! { Notice { message: err.clone() } },
            Some(Ok(list)) if list.is_empty() => rsx! { p { class: "muted", "No bookings match." } },
            Some(Ok(list)) => rsx! {
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Time" }
                            th { "Client" }
                            th { "Service" }
                            th { "Status" }
                            th {}
                        }
                    }
                    tbody {
                        for booking in list.iter().cloned() {
                            tr {
                                key: "{booking.id}",
                                td { "{format_date(&booking.start_time)}" }
                                td { "{format_time_range(&booking.start_time, &booking.end_time)}" }
                                td { {booking.client.as_ref().map(|c| c.display_name().to_string()).unwrap_or_default()} }
                                td { {booking.service.as_ref().map(|s| s.name.clone()).unwrap_or_default()} }
                                td { "{booking.status.label()}" }
                                td {
                                    for next in booking.status.next_actions().iter().copied() {
                                        button {
                                            key: "{next.as_str()}",
                                            class: if next == BookingStatus::Cancelled { "btn btn--danger" } else { "btn" },
                                            disabled: updating().as_deref() == Some(booking.id.as_str()),
                                            onclick: {
                                                let id = booking.id.clone();
                                                move |_| apply.call((id.clone(), next))
                                            },
                                            "{action_label(next)}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }
    }
}

fn action_label(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Confirmed => "Confirm",
        BookingStatus::Completed => "Complete",
        BookingStatus::Cancelled => "Cancel",
        BookingStatus::Pending => "Reopen",
    }
}
