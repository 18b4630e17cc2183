use dioxus::prelude::*;

use crate::domain::{AdminStat, StatAccent, StatValue, Trend};
use crate::util::format::format_inr;

#[component]
pub fn KpiCard(stat: AdminStat) -> Element {
    let value = match stat.value {
        StatValue::Currency(amount) => format_inr(amount),
        StatValue::Count(count) => count.to_string(),
    };
    let (accent, icon) = match stat.accent {
        StatAccent::Green => ("bg-green-50 text-green-600", "₹"),
        StatAccent::Blue => ("bg-blue-50 text-blue-600", "📱"),
        StatAccent::Orange => ("bg-orange-50 text-orange-600", "🚚"),
        StatAccent::Indigo => ("bg-indigo-50 text-indigo-600", "📈"),
    };
    let trend_class = match stat.trend() {
        Trend::Up => "text-green-600 bg-green-50",
        Trend::Down => "text-red-600 bg-red-50",
    };

    rsx! {
        div { class: "bg-white p-8 rounded-3xl border border-gray-100 shadow-sm",
            div { class: "flex justify-between items-start mb-6",
                div { class: "w-14 h-14 rounded-2xl flex items-center justify-center text-2xl {accent}", "{icon}" }
                span { class: "text-xs font-black px-3 py-1 rounded-full {trend_class}", "{stat.change_label()}" }
            }
            p { class: "text-xs font-black text-gray-400 uppercase tracking-widest mb-2", "{stat.label}" }
            p { class: "text-3xl font-black text-gray-900 tracking-tight", "{value}" }
        }
    }
}
