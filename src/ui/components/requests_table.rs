use dioxus::prelude::*;

use crate::domain::SellRequestRecord;
use crate::ui::components::status_badge::StatusBadge;
use crate::util::format::format_inr;

#[component]
pub fn RequestsTable(requests: Vec<SellRequestRecord>) -> Element {
    rsx! {
        div { class: "bg-white rounded-3xl border border-gray-100 shadow-sm overflow-hidden",
            div { class: "px-8 py-6 border-b border-gray-50 flex justify-between items-center",
                h3 { class: "text-xl font-black text-gray-900 tracking-tight", "Recent Sell Requests" }
                span { class: "text-xs font-black text-gray-400 uppercase tracking-widest", "{requests.len()} requests" }
            }
            div { class: "overflow-x-auto",
                table { class: "w-full text-left",
                    thead { class: "bg-gray-50 text-[10px] font-black text-gray-400 uppercase tracking-[0.2em]",
                        tr {
                            th { class: "px-8 py-4", "Order ID" }
                            th { class: "px-8 py-4", "Device" }
                            th { class: "px-8 py-4", "Customer" }
                            th { class: "px-8 py-4", "Status" }
                            th { class: "px-8 py-4 text-right", "Price" }
                            th { class: "px-8 py-4 text-right", "Date" }
                        }
                    }
                    tbody { class: "divide-y divide-gray-50",
                        for record in requests {
                            tr { key: "{record.id}", class: "hover:bg-gray-50/50 transition",
                                td { class: "px-8 py-5 font-black text-indigo-600 text-sm", "{record.id}" }
                                td { class: "px-8 py-5 font-bold text-gray-900 text-sm", "{record.device}" }
                                td { class: "px-8 py-5 font-medium text-gray-500 text-sm", "{record.customer}" }
                                td { class: "px-8 py-5", StatusBadge { status: record.status } }
                                td { class: "px-8 py-5 text-right font-black text-gray-900", "{format_inr(record.price)}" }
                                td { class: "px-8 py-5 text-right text-xs font-bold text-gray-400", "{record.date}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
