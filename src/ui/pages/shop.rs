use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{inventory_for, AppState, Brand, InventoryItem, BRANDS};
use crate::ui::components::product_card::ProductCard;
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::ui::theme;
use crate::util::format::format_inr;

#[component]
pub fn ShopPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();
    let mut brand_filter = use_signal(|| None::<Brand>);

    let listings = inventory_for(brand_filter());
    let (cart_len, cart_total) = state.with(|s| (s.cart.len(), s.cart.subtotal()));

    let on_add = move |item: InventoryItem| {
        state.with_mut(|s| s.cart.add(item));
        push_toast(toasts, ToastKind::Success, format!("{} added to cart", item.name));
    };

    rsx! {
        div { class: "max-w-7xl mx-auto px-4 py-12 relative",
            div { class: "flex flex-col md:flex-row md:items-end justify-between mb-16 gap-8",
                div { class: "space-y-3",
                    h1 { class: "text-5xl font-black text-gray-900 tracking-tighter",
                        "Upgrade "
                        span { class: "text-indigo-600", "Smart." }
                    }
                    p { class: "text-lg text-gray-500 font-medium", "Verified refurbished flagships. 12-Month warranty." }
                }
                div { class: "flex space-x-2 overflow-x-auto pb-4",
                    button {
                        class: "{theme::filter_pill(brand_filter().is_none())}",
                        onclick: move |_| brand_filter.set(None),
                        "All"
                    }
                    for brand in BRANDS {
                        button {
                            key: "{brand}",
                            class: "{theme::filter_pill(brand_filter() == Some(brand))}",
                            onclick: move |_| brand_filter.set(Some(brand)),
                            "{brand}"
                        }
                    }
                }
            }

            if listings.is_empty() {
                div { class: "text-center py-24 text-gray-400 font-black uppercase tracking-widest text-sm",
                    "No refurbished devices for this brand right now."
                }
            } else {
                div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-10",
                    for item in listings {
                        ProductCard { key: "{item.id}", item, on_add }
                    }
                }
            }

            if cart_len > 0 {
                button {
                    class: "fixed bottom-10 left-10 bg-gray-900 text-white px-8 py-6 rounded-[2.5rem] shadow-2xl flex items-center space-x-4 z-40 hover:scale-105 transition",
                    onclick: move |_| {
                        nav.push(Route::Cart {});
                    },
                    span { class: "text-2xl", "🛍️" }
                    div { class: "text-left leading-none",
                        p { class: "text-[10px] font-black text-gray-400 uppercase tracking-widest mb-1", "{cart_len} Items" }
                        p { class: "text-xl font-black tracking-tighter", "{format_inr(cart_total)}" }
                    }
                }
            }
        }
    }
}
