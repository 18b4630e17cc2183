use dioxus::prelude::*;

use crate::app::Route;
use crate::util::version::APP_TAGLINE;

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1695048133142-1a20484d2569?auto=format&fit=crop&q=80&w=800";

struct HowItWorksStep {
    step: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const HOW_IT_WORKS: [HowItWorksStep; 3] = [
    HowItWorksStep {
        step: "01",
        title: "Get Quote",
        description: "Answer a few health questions and get an instant quote.",
        icon: "⚡",
    },
    HowItWorksStep {
        step: "02",
        title: "Pickup",
        description: "Book a free slot. Our agent arrives at your door for a quick inspection.",
        icon: "🏡",
    },
    HowItWorksStep {
        step: "03",
        title: "Instant Cash",
        description: "Hand over the phone and get paid via UPI or Bank Transfer instantly.",
        icon: "💰",
    },
];

#[component]
pub fn HomePage() -> Element {
    rsx! {
        div { class: "space-y-32 pb-32",
            section { class: "relative overflow-hidden pt-20 sm:pt-28 lg:pt-36",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                    div { class: "lg:grid lg:grid-cols-12 lg:gap-16 items-center",
                        div { class: "lg:col-span-7 fade-in",
                            div { class: "inline-flex items-center px-4 py-2 rounded-full bg-indigo-50 border border-indigo-100 text-indigo-700 text-xs font-black uppercase tracking-widest mb-8",
                                span { class: "w-2 h-2 rounded-full bg-indigo-600 mr-2" }
                                "India's #1 Resale Platform"
                            }
                            h1 { class: "text-5xl tracking-tight font-black text-gray-900 sm:text-6xl md:text-7xl leading-[1.05]",
                                "Get Paid Cash "
                                br {}
                                span { class: "text-indigo-600", "Instantly." }
                            }
                            p { class: "mt-8 text-lg text-gray-500 font-medium leading-relaxed max-w-2xl",
                                "{APP_TAGLINE} Guaranteed highest value, free doorstep pickup, and instant bank transfer."
                            }
                            div { class: "mt-12 flex flex-col sm:flex-row gap-4",
                                Link {
                                    to: Route::Sell {},
                                    class: "inline-flex items-center justify-center px-10 py-5 text-lg font-black rounded-[2rem] text-white bg-indigo-600 hover:bg-indigo-700 shadow-2xl shadow-indigo-200 transition",
                                    "Check Payout Value"
                                }
                                Link {
                                    to: Route::Shop {},
                                    class: "inline-flex items-center justify-center px-10 py-5 border-2 border-gray-100 text-lg font-black rounded-[2rem] text-gray-900 bg-white hover:border-indigo-100 transition",
                                    "Buy Refurbished"
                                }
                            }
                            div { class: "mt-12 flex flex-wrap gap-8 text-[11px] font-black text-gray-400 uppercase tracking-[0.2em]",
                                Perk { text: "No Hidden Costs" }
                                Perk { text: "Safe Data Wipe" }
                            }
                        }
                        div { class: "mt-20 lg:mt-0 lg:col-span-5 flex justify-center lg:justify-end zoom-in",
                            div { class: "relative w-full max-w-md bg-white rounded-[3.5rem] p-5 shadow-2xl border border-gray-50 overflow-hidden",
                                img { class: "w-full h-full object-cover rounded-[2.8rem]", src: HERO_IMAGE, alt: "Modern smartphone" }
                                div { class: "absolute bottom-10 left-0 right-0 px-8 text-center bg-gradient-to-t from-white/95 to-transparent pt-24 pb-4",
                                    p { class: "text-[10px] font-black text-indigo-600 uppercase tracking-widest", "Next-Gen Appraisal" }
                                    p { class: "text-xl font-black text-gray-900", "Highest Resale Guaranteed" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "text-center mb-24 space-y-4",
                    p { class: "text-xs font-black text-indigo-600 uppercase tracking-[0.3em]", "Our Method" }
                    h2 { class: "text-4xl font-black text-gray-900 tracking-tight sm:text-5xl",
                        "How ReCell "
                        span { class: "text-indigo-600", "Works" }
                    }
                }
                div { class: "grid md:grid-cols-3 gap-10",
                    for item in HOW_IT_WORKS.iter() {
                        div { key: "{item.step}", class: "group relative bg-white p-12 rounded-[3rem] border-2 border-gray-50 hover:border-indigo-100 transition-all duration-500 hover:shadow-2xl",
                            span { class: "text-8xl absolute -top-4 -right-2 opacity-5 font-black text-indigo-900", "{item.step}" }
                            div { class: "text-6xl mb-10", "{item.icon}" }
                            h3 { class: "text-2xl font-black text-gray-900 mb-4", "{item.title}" }
                            p { class: "text-gray-500 font-medium leading-relaxed", "{item.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Perk(text: &'static str) -> Element {
    rsx! {
        div { class: "flex items-center",
            span { class: "w-6 h-6 bg-green-100 text-green-600 rounded-lg flex items-center justify-center mr-3 font-bold text-base", "✓" }
            "{text}"
        }
    }
}
