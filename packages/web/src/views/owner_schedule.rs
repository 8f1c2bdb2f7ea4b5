//! Weekly opening hours and one-off disabled slots.

use api::format::{format_date, format_time_range, local_datetime, local_today, parse_date};
use api::schedule::{CreateDisabledSlotRequest, ScheduleDay, UpdateScheduleRequest};
use api::OwnerSchedule as ScheduleRow;
use dioxus::prelude::*;
use ui::{use_api, LoadingIndicator, Notice, NoticeKind};

#[component]
pub fn OwnerSchedule() -> Element {
    rsx! {
        h1 { "Schedule" }
        WeeklySchedule {}
        DisabledSlots {}
    }
}

#[component]
fn WeeklySchedule() -> Element {
    let api = use_api();
    let mut rows = use_signal(Vec::<ScheduleRow>::new);
    let mut loaded = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saved = use_signal(|| false);
    let mut saving = use_signal(|| false);

    // Load into an editable copy
    let load_api = api.clone();
    let _loader = use_resource(move || {
        let api = load_api.clone();
        async move {
            match api.owner_schedule().await {
                Ok(mut schedule) => {
                    schedule.sort_by_key(|row| row.weekday);
                    rows.set(schedule);
                }
                Err(e) => error.set(Some(super::report("Loading schedule failed", e))),
            }
            loaded.set(true);
        }
    });

    let handle_save = move |_| {
        let api = api.clone();
        spawn(async move {
            error.set(None);
            saved.set(false);

            if let Some(row) = rows().iter().find(|r| r.active && r.start_time >= r.end_time) {
                error.set(Some(format!("{}: opening must be before closing", row.weekday_name())));
                return;
            }

            let request = UpdateScheduleRequest {
                schedule: rows().iter().map(ScheduleDay::from).collect(),
            };
            saving.set(true);
            let result = api.update_owner_schedule(&request).await;
            saving.set(false);

            match result {
                Ok(mut schedule) => {
                    schedule.sort_by_key(|row| row.weekday);
                    rows.set(schedule);
                    saved.set(true);
                }
                Err(e) => error.set(Some(super::report("Saving schedule failed", e))),
            }
        });
    };

    if !loaded() {
        return rsx! { LoadingIndicator {} };
    }

    rsx! {
        h2 { "Weekly hours" }

        if let Some(err) = error() {
            Notice { message: err }
        }
        if saved() {
            Notice { kind: NoticeKind::Success, message: "Schedule saved." }
        }

        table {
            class: "table",
            thead { tr { th { "Day" } th { "Open" } th { "From" } th { "To" } } }
            tbody {
                for (i, row) in rows().into_iter().enumerate() {
                    tr {
                        key: "{row.weekday}",
                        td { "{row.weekday_name()}" }
                        td {
                            input {
                                r#type: "checkbox",
                                checked: row.active,
                                onchange: move |evt: FormEvent| {
                                    rows.write()[i].active = evt.checked();
                                    saved.set(false);
                                },
                            }
                        }
                        td {
                            input {
                                r#type: "time",
                                value: "{row.start_time}",
                                disabled: !row.active,
                                oninput: move |evt: FormEvent| {
                                    rows.write()[i].start_time = evt.value();
                                    saved.set(false);
                                },
                            }
                        }
                        td {
                            input {
                                r#type: "time",
                                value: "{row.end_time}",
                                disabled: !row.active,
                                oninput: move |evt: FormEvent| {
                                    rows.write()[i].end_time = evt.value();
                                    saved.set(false);
                                },
                            }
                        }
                    }
                }
            }
        }

        button {
            class: "btn",
            disabled: saving(),
            onclick: handle_save,
            if saving() { "Saving..." } else { "Save hours" }
        }
    }
}

#[component]
fn DisabledSlots() -> Element {
    let api = use_api();
    let mut date = use_signal(|| local_today().to_string());
    let mut start = use_signal(|| "13:00".to_string());
    let mut end = use_signal(|| "14:00".to_string());
    let mut reason = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let list_api = api.clone();
    let mut slots = use_resource(move || {
        let api = list_api.clone();
        async move {
            api.disabled_slots()
                .await
                .map_err(|e| super::report("Loading disabled slots failed", e))
        }
    });

    let create_api = api.clone();
    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        let api = create_api.clone();
        spawn(async move {
            error.set(None);
            let day = parse_date(&date());
            let range = day.and_then(|d| Some((local_datetime(d, &start())?, local_datetime(d, &end())?)));
            let Some((start_time, end_time)) = range else {
                error.set(Some("Pick a date and a valid time range".to_string()));
                return;
            };
            if start_time >= end_time {
                error.set(Some("Start must be before end".to_string()));
                return;
            }

            let reason = reason().trim().to_string();
            let request = CreateDisabledSlotRequest {
                start_time,
                end_time,
                reason: (!reason.is_empty()).then_some(reason),
            };
            match api.create_disabled_slot(&request).await {
                Ok(_) => slots.restart(),
                Err(e) => error.set(Some(super::report("Disabling slot failed", e))),
            }
        });
    };

    let delete = use_callback(move |slot_id: String| {
        let api = api.clone();
        spawn(async move {
            error.set(None);
            match api.delete_disabled_slot(&slot_id).await {
                Ok(()) => slots.restart(),
                Err(e) => error.set(Some(super::report("Removing disabled slot failed", e))),
            }
        });
    });

    rsx! {
        h2 { "Disabled slots" }

        form {
            class: "form",
            onsubmit: handle_create,

            if let Some(err) = error() {
                Notice { message: err }
            }

            input {
                r#type: "date",
                value: date(),
                oninput: move |evt: FormEvent| date.set(evt.value()),
            }
            input {
                r#type: "time",
                value: start(),
                oninput: move |evt: FormEvent| start.set(evt.value()),
            }
            input {
                r#type: "time",
                value: end(),
                oninput: move |evt: FormEvent| end.set(evt.value()),
            }
            input {
                r#type: "text",
                placeholder: "Reason (optional)",
                value: reason(),
                oninput: move |evt: FormEvent| reason.set(evt.value()),
            }
            button { class: "btn", r#type: "submit", "Disable" }
        }

        match &*slots.read() {
            None => rsx! { LoadingIndicator {} },
            Some(Err(err)) => rsx! { Notice { message: err.clone() } },
            Some(Ok(list)) if list.is_empty() => rsx! { p { class: "muted", "No disabled slots." } },
            Some(Ok(list)) => rsx! {
                ul {
                    for slot in list.iter().cloned() {
                        li {
                            key: "{slot.id}",
                            "{format_date(&slot.start_time)} {format_time_range(&slot.start_time, &slot.end_time)} "
                            {slot.reason.clone().unwrap_or_default()}
                            button {
                                class: "btn btn--ghost",
                                onclick: {
                                    let id = slot.id.clone();
                                    move |_| delete.call(id.clone())
                                },
                                "Remove"
                            }
                        }
                    }
                }
            },
        }
    }
}
