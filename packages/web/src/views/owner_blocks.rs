//! Time the owner is unavailable on a given day: whole-day or `HH:MM` ranges.

use api::bookings::CreateBlockRequest;
use api::format::{format_long_date, format_time_range, local_today, parse_date};
use dioxus::prelude::*;
use ui::{use_api, LoadingIndicator, Notice};

#[component]
pub fn OwnerBlocks() -> Element {
    let api = use_api();
    let mut date = use_signal(|| local_today().to_string());
    let mut full_day = use_signal(|| false);
    let mut start = use_signal(|| "09:00".to_string());
    let mut end = use_signal(|| "10:00".to_string());
    let mut reason = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let list_api = api.clone();
    let mut blocks = use_resource(move || {
        let api = list_api.clone();
        let day = parse_date(&date());
        async move {
            match day {
                Some(day) => api
                    .owner_blocks(day)
                    .await
                    .map_err(|e| super::report("Loading blocks failed", e)),
                None => Ok(Vec::new()),
            }
        }
    });

    let create_api = api.clone();
    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        let api = create_api.clone();
        spawn(async move {
            error.set(None);
            let Some(day) = parse_date(&date()) else {
                error.set(Some("Pick a date".to_string()));
                return;
            };
            let request = if full_day() {
                CreateBlockRequest::full_day(day, &reason())
            } else {
                match CreateBlockRequest::between(day, &start(), &end(), &reason()) {
                    Ok(request) => request,
                    Err(message) => {
                        error.set(Some(message));
                        return;
                    }
                }
            };

            saving.set(true);
            let result = api.create_owner_block(&request).await;
            saving.set(false);

            match result {
                Ok(()) => {
                    reason.set(String::new());
                    blocks.restart();
                }
                Err(e) => error.set(Some(super::report("Creating block failed", e))),
            }
        });
    };

    let delete = use_callback(move |block_id: String| {
        let api = api.clone();
        spawn(async move {
            error.set(None);
            match api.delete_owner_block(&block_id).await {
                Ok(()) => blocks.restart(),
                Err(e) => error.set(Some(super::report("Deleting block failed", e))),
            }
        });
    });

    let day_label = parse_date(&date()).map(format_long_date).unwrap_or_default();

    rsx! {
        h1 { "Blocked time" }

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
            label {
                input {
                    r#type: "checkbox",
                    checked: full_day(),
                    onchange: move |evt: FormEvent| full_day.set(evt.checked()),
                }
                " Whole day"
            }
            if !full_day() {
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
            }
            input {
                r#type: "text",
                placeholder: "Reason (optional)",
                value: reason(),
                oninput: move |evt: FormEvent| reason.set(evt.value()),
            }
            button {
                class: "btn",
                r#type: "submit",
                disabled: saving(),
                if saving() { "Saving..." } else { "Block" }
            }
        }

        h2 { "{day_label}" }

        match &*blocks.read() {
            None => rsx! { LoadingIndicator {} },
            Some(Err(err)) => rsx! { Notice { message: err.clone() } },
            Some(Ok(list)) if list.is_empty() => rsx! { p { class: "muted", "Nothing blocked on this day." } },
            Some(Ok(list)) => rsx! {
                ul {
                    for block in list.iter().cloned() {
                        li {
                            key: "{block.id}",
                            if block.full_day {
                                "Whole day"
                            } else {
                                "{format_time_range(&block.start_time, &block.end_time)}"
                            }
                            " {block.reason.clone().unwrap_or_default()} "
                            button {
                                class: "btn btn--ghost",
                                onclick: {
                                    let id = block.id.clone();
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
