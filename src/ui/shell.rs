use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME, SUPPORT_HOTLINE};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let cart_count = state.with(|s| s.cart_count());
    let current_route = use_route::<Route>();

    rsx! {
        div { class: "min-h-screen flex flex-col bg-[#fcfcfd]",
            nav { class: "bg-white border-b border-gray-100 sticky top-0 z-50",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                    div { class: "flex justify-between h-20 items-center",
                        Link { to: Route::Home {}, class: "flex items-center space-x-2",
                            div { class: "w-12 h-12 bg-indigo-600 rounded-xl flex items-center justify-center shadow-lg shadow-indigo-200",
                                span { class: "text-white font-black text-2xl tracking-tighter", "R" }
                            }
                            span { class: "text-2xl font-black tracking-tighter brand-wordmark", "{APP_NAME}" }
                        }

                        div { class: "hidden md:flex items-center space-x-10",
                            NavLink { to: Route::Sell {}, active: matches!(current_route, Route::Sell {}), label: "Sell Phone" }
                            NavLink { to: Route::Shop {}, active: matches!(current_route, Route::Shop {}), label: "Buy Refurbished" }
                            NavLink { to: Route::Admin {}, active: matches!(current_route, Route::Admin {}), label: "Admin" }
                        }

                        div { class: "flex items-center space-x-6",
                            Link { to: Route::Cart {}, class: "relative p-2 text-2xl",
                                "🛍️"
                                if cart_count > 0 {
                                    span { class: "absolute -top-1 -right-1 bg-red-600 text-white text-[10px] font-black w-5 h-5 rounded-full flex items-center justify-center border-2 border-white shadow-sm",
                                        "{cart_count}"
                                    }
                                }
                            }
                            Link {
                                to: Route::Sell {},
                                class: "bg-indigo-600 text-white px-6 py-3 rounded-2xl font-black text-sm uppercase tracking-widest hover:bg-indigo-700 transition shadow-xl shadow-indigo-100",
                                "Get Quote"
                            }
                        }
                    }
                }
            }
            main { class: "flex-grow",
                {children}
            }
            Footer {}
        }
    }
}

#[component]
fn NavLink(to: Route, active: bool, label: &'static str) -> Element {
    rsx! {
        Link { to, class: "{theme::nav_link(active)}", "{label}" }
    }
}

#[component]
fn Footer() -> Element {
    let sell_links = ["iPhone", "Samsung", "OnePlus", "Google Pixel", "Tablets", "Laptops"];
    let shop_links = [
        "Refurbished iPhones",
        "Premium Samsung",
        "Google Pixel deals",
        "Open Box Devices",
        "Warranty Info",
        "Shipping Policy",
    ];
    let version = version_label();

    rsx! {
        footer { class: "bg-gray-900 text-white pt-24 pb-12",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-16 mb-20",
                    div { class: "space-y-6",
                        span { class: "text-2xl font-black tracking-tighter", "{APP_NAME}" }
                        p { class: "text-gray-400 font-medium leading-relaxed",
                            "India's most trusted platform for buying and selling pre-owned gadgets. Get the best value for your old devices instantly."
                        }
                    }
                    FooterColumn { title: "Sell Devices", items: sell_links.to_vec() }
                    FooterColumn { title: "Shop Refurbished", items: shop_links.to_vec() }
                    div { class: "bg-gray-800/50 p-6 rounded-2xl border border-gray-700/50 h-fit",
                        p { class: "text-xs font-bold text-gray-400 uppercase tracking-widest mb-1", "Support Hotline" }
                        p { class: "text-xl font-black text-white", "{SUPPORT_HOTLINE}" }
                    }
                }
                div { class: "pt-12 border-t border-gray-800 flex flex-col md:flex-row justify-between items-center text-[10px] font-black uppercase tracking-[0.3em] text-gray-600",
                    p { "© ReCell Tech Solutions. Made with ♥ in India." }
                    p { "{version}" }
                }
            }
        }
    }
}

#[component]
fn FooterColumn(title: &'static str, items: Vec<&'static str>) -> Element {
    rsx! {
        div {
            h4 { class: "text-sm font-black uppercase tracking-[0.2em] mb-8 text-indigo-400", "{title}" }
            ul { class: "space-y-4 text-gray-400 font-bold text-sm",
                for item in items {
                    li { class: "hover:text-white transition cursor-pointer", "{item}" }
                }
            }
        }
    }
}
