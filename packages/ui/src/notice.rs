use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeKind {
    #[default]
    Error,
    Success,
    Info,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Error => "notice notice--error",
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Info => "notice notice--info",
        }
    }
}

/// Inline message box used by forms for API errors and confirmations.
#[component]
pub fn Notice(#[props(default)] kind: NoticeKind, message: String) -> Element {
    rsx! {
        div {
            class: kind.class(),
            role: if kind == NoticeKind::Error { "alert" } else { "status" },
            "{message}"
        }
    }
}
