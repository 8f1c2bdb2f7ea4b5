use api::format::{format_date, format_time_range};
use dioxus::prelude::*;
use ui::{use_api, LoadingIndicator, Notice};

use crate::Route;

#[component]
pub fn MyBookings() -> Element {
    let api = use_api();
    let bookings = use_resource(move || {
        let api = api.clone();
        async move { api.my_bookings().await.map_err(|e| super::report("Loading bookings failed", e)) }
    });

    rsx! {
        h1 { "My bookings" }

        match &*bookings.read() {
            None => rsx! { LoadingIndicator {} },
            Some(Err(err)) => rsx! { Notice { message: err.clone() } },
            Some(Ok(list)) if list.is_empty() => rsx! {
                p {
                    class: "muted",
                    "You have no bookings yet. "
                    Link { to: Route::NewBooking {}, "Book a slot" }
                }
            },
            Some(Ok(list)) => rsx! {
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Time" }
                            th { "Service" }
                            th { "Status" }
                            th { "Notes" }
                        }
                    }
                    tbody {
                        for booking in list.iter() {
                            tr {
                                key: "{booking.id}",
                                td { "{format_date(&booking.start_time)}" }
                                td { "{format_time_range(&booking.start_time, &booking.end_time)}" }
                                td { {booking.service.as_ref().map(|s| s.name.clone()).unwrap_or_default()} }
                                td { "{booking.status.label()}" }
                                td { {booking.notes.clone().unwrap_or_default()} }
                            }
                        }
                    }
                }
            },
        }
    }
}
