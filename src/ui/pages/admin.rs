use dioxus::prelude::*;

use crate::domain::{AppState, ADMIN_STATS, RECENT_REQUESTS};
use crate::ui::components::kpi_card::KpiCard;
use crate::ui::components::requests_table::RequestsTable;
use crate::ui::theme;
use crate::util::format::format_inr;

#[component]
pub fn AdminPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let (bookings, payout) = state.with(|s| (s.bookings.clone(), s.booked_payout()));

    rsx! {
        div { class: "max-w-7xl mx-auto px-4 py-12 space-y-12",
            div { class: "flex flex-col md:flex-row md:items-end justify-between gap-6",
                div {
                    p { class: "text-xs font-black text-indigo-600 uppercase tracking-[0.3em] mb-2", "Operations" }
                    h1 { class: "text-4xl font-black text-gray-900 tracking-tight", "Admin Overview" }
                }
                p { class: "text-sm font-bold text-gray-400", "Figures for the current month" }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6",
                for stat in ADMIN_STATS {
                    KpiCard { key: "{stat.label}", stat }
                }
            }

            div { class: "{theme::panel()} space-y-4",
                div { class: "flex items-center justify-between",
                    h2 { class: "{theme::section_title()}", "Pickups Booked This Session" }
                    span { class: "text-sm font-black text-indigo-600", "{bookings.len()} • {format_inr(payout)}" }
                }
                if bookings.is_empty() {
                    p { class: "text-sm font-bold text-gray-400", "No pickups scheduled yet." }
                }
                for booking in bookings {
                    div { key: "{booking.reference}", class: "flex justify-between items-center text-sm border-t border-gray-50 pt-3",
                        span { class: "font-black text-gray-900", "{booking.device}" }
                        span { class: "font-bold text-gray-400", "{booking.details.city.name()}" }
                        span { class: "font-black text-gray-900", "{format_inr(booking.payout)}" }
                    }
                }
            }

            RequestsTable { requests: RECENT_REQUESTS.to_vec() }
        }
    }
}
