use dioxus::prelude::*;

use crate::domain::{Grade, InventoryItem};
use crate::util::format::format_inr;

fn grade_classes(grade: Grade) -> &'static str {
    match grade {
        Grade::A => "bg-green-600",
        Grade::B => "bg-blue-600",
        Grade::C => "bg-orange-500",
    }
}

#[component]
pub fn ProductCard(item: InventoryItem, on_add: EventHandler<InventoryItem>) -> Element {
    rsx! {
        div { class: "group bg-white rounded-[2.5rem] border border-gray-100 overflow-hidden hover:shadow-2xl transition-all duration-500 flex flex-col",
            div { class: "relative h-72 bg-gray-50 p-10 flex items-center justify-center",
                img {
                    class: "max-h-full object-contain group-hover:scale-110 transition duration-700",
                    src: "{item.image}",
                    alt: "{item.name}",
                }
                div { class: "absolute top-6 left-6 text-white text-[10px] font-black px-3 py-1.5 rounded-xl uppercase tracking-widest {grade_classes(item.grade)}",
                    "Grade {item.grade.letter()} · {item.grade.label()}"
                }
                div { class: "absolute top-6 right-6 bg-white text-red-600 text-[10px] font-black px-3 py-1.5 rounded-xl uppercase tracking-widest shadow-sm",
                    "{item.discount_pct()}% off"
                }
            }
            div { class: "p-8 flex-grow flex flex-col",
                p { class: "text-[10px] font-black text-indigo-600 uppercase tracking-[0.2em] mb-2", "{item.brand}" }
                h3 { class: "text-xl font-black text-gray-900 mb-1 tracking-tight", "{item.name}" }
                p { class: "text-xs font-bold text-gray-400 mb-6", "{item.storage}" }
                div { class: "mt-auto flex items-end justify-between",
                    div {
                        p { class: "text-2xl font-black text-gray-900 tracking-tight", "{format_inr(item.price)}" }
                        p { class: "text-xs font-bold text-gray-400 line-through", "{format_inr(item.original_price)}" }
                    }
                    button {
                        class: "px-6 py-4 bg-gray-900 text-white rounded-2xl font-black text-xs uppercase tracking-widest hover:bg-indigo-600 transition shadow-xl",
                        onclick: move |_| on_add.call(item),
                        "Add to Cart"
                    }
                }
            }
        }
    }
}
