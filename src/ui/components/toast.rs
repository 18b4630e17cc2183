use std::time::Duration;

use dioxus::prelude::*;
use tracing::{info, warn};

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

/// Queues a notification, dropping the oldest once [`MAX_TOASTS`] are shown.
pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let text = message.into();
    match kind {
        ToastKind::Success => info!(toast = %text),
        ToastKind::Error => warn!(toast = %text),
    }
    toasts.with_mut(|entries| push_bounded(entries, ToastMessage::new(kind, text)));
}

fn push_bounded(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    if entries.len() >= MAX_TOASTS {
        entries.remove(0);
    }
    entries.push(message);
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let entries = toasts();

    if entries.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div { class: "pointer-events-none fixed bottom-8 right-8 z-[100] flex flex-col items-end",
            ul { class: "space-y-3",
                for message in entries {
                    ToastCard { key: "{message.id}", message: message.clone(), toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, mut toasts: Signal<Vec<ToastMessage>>) -> Element {
    let toast_id = message.id.clone();
    let _auto_dismiss = use_future(move || {
        let id = toast_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let (theme, icon) = match message.kind {
        ToastKind::Success => ("bg-gray-900 border-gray-800", "✓"),
        ToastKind::Error => ("bg-red-600 border-red-500", "!"),
    };
    let dismiss_id = message.id.clone();

    rsx! {
        li { class: "pointer-events-auto flex items-center gap-4 rounded-2xl border px-6 py-4 text-white shadow-2xl slide-in {theme}",
            span { class: "w-8 h-8 rounded-full bg-white/20 flex items-center justify-center font-black", "{icon}" }
            p { class: "text-sm font-black", "{message.text}" }
            button {
                class: "ml-3 text-[10px] font-black uppercase tracking-widest text-white/60 hover:text-white",
                onclick: move |_| {
                    let target = dismiss_id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Dismiss"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_keeps_the_newest_five() {
        let mut entries = Vec::new();
        for n in 0..7 {
            push_bounded(&mut entries, ToastMessage::new(ToastKind::Success, format!("n{n}")));
        }
        let texts: Vec<_> = entries.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["n2", "n3", "n4", "n5", "n6"]);
    }

    #[test]
    fn toast_ids_are_unique() {
        let a = ToastMessage::new(ToastKind::Error, "a");
        let b = ToastMessage::new(ToastKind::Error, "b");
        assert_ne!(a.id, b.id);
    }
}
