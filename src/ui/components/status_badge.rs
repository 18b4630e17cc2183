use dioxus::prelude::*;

use crate::domain::RequestStatus;

fn status_classes(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Completed => "bg-green-100 text-green-700",
        RequestStatus::Pending => "bg-yellow-100 text-yellow-700",
        RequestStatus::Scheduled => "bg-blue-100 text-blue-700",
        RequestStatus::InReview => "bg-purple-100 text-purple-700",
    }
}

#[component]
pub fn StatusBadge(status: RequestStatus) -> Element {
    rsx! {
        span {
            class: "px-3 py-1 rounded-full text-[10px] font-black uppercase tracking-widest {status_classes(status)}",
            "{status.label()}"
        }
    }
}
