//! Owner dashboard: revenue and usage for a date range.

use api::format::{format_money, format_time, local_today, parse_date};
use api::stats::StatsRange;
use dioxus::prelude::*;
use ui::{use_api, use_session, LoadingIndicator, Notice};

#[component]
pub fn OwnerHome() -> Element {
    let session = use_session();
    let api = use_api();
    let mut preset = use_signal(|| "today".to_string());
    let mut custom_from = use_signal(|| local_today().to_string());
    let mut custom_to = use_signal(|| local_today().to_string());

    let currency = session
        .read()
        .user()
        .and_then(|u| u.barbershop.as_ref())
        .map(|b| b.currency.clone())
        .unwrap_or_default();

    let stats = use_resource(move || {
        let api = api.clone();
        let range = StatsRange::from_key(&preset()).or_else(|| {
            Some(StatsRange::Custom {
                from: parse_date(&custom_from())?,
                to: parse_date(&custom_to())?,
            })
        });
        async move {
            let Some(range) = range else {
                return Err("Pick a valid date range".to_string());
            };
            let (from, to) = range.resolve(local_today());
            api.owner_stats(Some(from), Some(to))
                .await
                .map_err(|e| super::report("Loading stats failed", e))
        }
    });

    let money = move |amount: f64| format_money(amount, &currency);

    rsx! {
        h1 { "Dashboard" }

        div {
            class: "form",
            select {
                value: preset(),
                onchange: move |evt: FormEvent| preset.set(evt.value()),
                for (key, label) in StatsRange::PRESETS {
                    option { key: "{key}", value: key, "{label}" }
                }
                option { value: "custom", "Custom range" }
            }
            if preset() == "custom" {
                input {
                    r#type: "date",
                    value: custom_from(),
                    oninput: move |evt: FormEvent| custom_from.set(evt.value()),
                }
                input {
                    r#type: "date",
                    value: custom_to(),
                    oninput: move |evt: FormEvent| custom_to.set(evt.value()),
                }
            }
        }

        match &*stats.read() {
            None => rsx! { LoadingIndicator {} },
            Some(Err(err)) => rsx! { Notice { message: err.clone() } },
            Some(Ok(stats)) => rsx! {
                h2 { "Summary" }
                table {
                    class: "table",
                    tbody {
                        tr { th { "Bookings" } td { "{stats.summary.total_bookings}" } }
                        tr { th { "Completed" } td { "{stats.summary.completed_bookings}" } }
                        tr { th { "Pending" } td { "{stats.summary.pending_bookings}" } }
                        tr { th { "Revenue" } td { "{money(stats.summary.revenue)}" } }
                        tr { th { "Average per day" } td { "{money(stats.average_daily_revenue())}" } }
                    }
                }

                h2 { "Today" }
                p {
                    class: "muted",
                    "{stats.today.bookings} bookings, {stats.today.completed} completed, {money(stats.today.revenue)}"
                }
                if stats.today.next_bookings.is_empty() {
                    p { class: "muted", "Nothing else scheduled today." }
                }
                ul {
                    for booking in stats.today.next_bookings.iter() {
                        li {
                            key: "{booking.id}",
                            "{format_time(&booking.start_time)} · "
                            {booking.client.as_ref().map(|c| c.display_name().to_string()).unwrap_or_default()}
                        }
                    }
                }

                h2 { "Revenue by day" }
                table {
                    class: "table",
                    tbody {
                        for day in stats.revenue_by_day.iter() {
                            tr {
                                key: "{day.date}",
                                td { "{day.date}" }
                                td { "{money(day.revenue)}" }
                            }
                        }
                    }
                }

                h2 { "By service" }
                table {
                    class: "table",
                    thead { tr { th { "Service" } th { "Bookings" } th { "Revenue" } } }
                    tbody {
                        for row in stats.bookings_by_service.iter() {
                            tr {
                                key: "{row.service_name}",
                                td { "{row.service_name}" }
                                td { "{row.count}" }
                                td { "{money(row.revenue)}" }
                            }
                        }
                    }
                }
            },
        }
    }
}
