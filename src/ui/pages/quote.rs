//! Quote reveal and pickup scheduling, the last two stages of the sell wizard.

use dioxus::prelude::*;
use time::{macros::format_description, Date};

use crate::app::Route;
use crate::domain::{
    price_adjustments, AppState, City, PickupBooking, PickupForm, SellRequest,
};
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::ui::theme;
use crate::util::clock::today;
use crate::util::format::format_inr;

fn iso_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

#[component]
pub fn QuoteResult(request: SellRequest) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let adjustments = price_adjustments(&request);
    let (model_name, model_image, base_price) = request
        .model
        .map(|m| (m.name, m.image, m.base_price))
        .unwrap_or_default();
    let storage = request.storage.unwrap_or_default();
    let age = request.age.unwrap_or_default();

    rsx! {
        div { class: "max-w-xl mx-auto px-4 py-12 zoom-in",
            div { class: "bg-white rounded-[3rem] shadow-2xl overflow-hidden border border-gray-50",
                div { class: "bg-gradient-to-br from-indigo-600 to-indigo-900 p-12 text-center text-white relative",
                    div { class: "absolute top-6 right-6 bg-white/20 px-4 py-1.5 rounded-full text-[10px] font-black uppercase tracking-widest", "Locked Offer" }
                    p { class: "text-indigo-100/70 text-[10px] font-black uppercase tracking-[0.3em] mb-3", "Total Payout" }
                    h2 { class: "text-6xl font-black tracking-tighter", "{format_inr(request.estimated_price)}" }
                    p { class: "mt-6 text-indigo-100/60 text-[10px] font-black uppercase tracking-widest", "No Hidden Deductions • Free Shipping" }
                }

                div { class: "p-10 space-y-10",
                    div { class: "flex items-center space-x-6 p-6 bg-gray-50 rounded-3xl border border-gray-100",
                        img { class: "w-20 h-20 object-contain", src: model_image, alt: model_name }
                        div {
                            p { class: "font-black text-gray-900 text-xl leading-tight", "{model_name}" }
                            p { class: "text-[10px] font-black text-gray-400 mt-2 uppercase tracking-[0.2em]", "{storage} • {age}" }
                        }
                    }

                    div { class: "space-y-4",
                        h4 { class: "text-[10px] font-black text-gray-300 uppercase tracking-[0.3em] border-b border-gray-50 pb-3", "Valuation Insights" }
                        div { class: "flex justify-between items-center text-sm",
                            span { class: "text-gray-500 font-bold uppercase tracking-widest text-[10px]", "Market Base" }
                            span { class: "text-gray-900 font-black", "{format_inr(base_price)}" }
                        }
                        if adjustments.is_empty() {
                            div { class: "flex justify-between items-center text-sm",
                                span { class: "text-gray-500 font-bold uppercase tracking-widest text-[10px]", "Diagnostics" }
                                span { class: "text-green-600 font-black uppercase text-[10px] tracking-widest", "Verified" }
                            }
                        }
                        for adjustment in adjustments {
                            div { key: "{adjustment.label}", class: "flex justify-between items-center text-sm",
                                span { class: "text-gray-500 font-bold uppercase tracking-widest text-[10px]", "{adjustment.label}" }
                                span { class: "text-red-500 font-black text-[10px] tracking-widest", "-{adjustment.deduction_pct()}%" }
                            }
                        }
                    }

                    div { class: "bg-indigo-50/50 p-6 rounded-3xl flex items-start space-x-4 border border-indigo-100/30",
                        span { class: "text-2xl mt-1", "⚡" }
                        p { class: "text-[11px] text-indigo-900 leading-relaxed font-bold uppercase tracking-tight",
                            "Instant payout via UPI, IMPS, or Amazon Pay upon doorstep inspection. Takes less than 5 minutes."
                        }
                    }

                    button {
                        class: "{theme::btn_primary()} uppercase tracking-widest",
                        onclick: move |_| {
                            state.with_mut(|s| s.sell.schedule());
                        },
                        "Sell Instantly"
                    }
                    button {
                        class: "w-full text-center {theme::btn_link()} justify-center",
                        onclick: move |_| {
                            state.with_mut(|s| s.sell.reset());
                        },
                        "Start a new quote"
                    }
                }
            }
        }
    }
}

#[component]
pub fn PickupPanel(request: SellRequest) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();
    let mut form = use_signal(PickupForm::default);
    let mut booking = use_signal(|| None::<PickupBooking>);
    let min_date = iso_date(today());

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = form
            .with(|f| f.validate(today()))
            .and_then(|details| PickupBooking::new(&request, details));
        match result {
            Ok(confirmed) => {
                state.with_mut(|s| s.record_booking(confirmed.clone()));
                booking.set(Some(confirmed));
                push_toast(toasts, ToastKind::Success, "Pickup scheduled");
            }
            Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
        }
    };

    let on_done = move |_| {
        state.with_mut(|s| s.sell.reset());
        nav.push(Route::Home {});
    };

    if let Some(confirmed) = booking() {
        return rsx! {
            div { class: "max-w-xl mx-auto px-4 py-24 text-center fade-in",
                div { class: "w-28 h-28 bg-green-100 text-green-600 rounded-[2rem] flex items-center justify-center text-6xl mx-auto mb-10 shadow-2xl shadow-green-50 border-4 border-white", "✓" }
                h2 { class: "text-5xl font-black text-gray-900 mb-6 tracking-tight leading-tight",
                    "Your Slot is "
                    br {}
                    span { class: "text-indigo-600", "Confirmed!" }
                }
                p { class: "text-gray-500 font-bold uppercase text-[10px] tracking-[0.2em] mb-12", "Pickup details sent to your registered mobile" }
                div { class: "bg-white p-10 rounded-[3rem] text-left mb-12 border-2 border-gray-50 shadow-sm space-y-4",
                    p { class: "text-[10px] font-black text-indigo-600 uppercase tracking-[0.3em] mb-6", "Booking Details" }
                    BookingRow { label: "Device", value: confirmed.device.clone() }
                    BookingRow { label: "City", value: confirmed.details.city.name().to_string() }
                    BookingRow { label: "Pickup Date", value: iso_date(confirmed.details.date) }
                    div { class: "flex justify-between items-center pt-6 border-t border-gray-50",
                        span { class: "text-gray-400 font-black uppercase text-[10px] tracking-widest", "Net Payout" }
                        span { class: "text-3xl font-black text-indigo-600 tracking-tighter", "{format_inr(confirmed.payout)}" }
                    }
                }
                button { class: "{theme::btn_dark()}", onclick: on_done, "Done" }
            }
        };
    }

    rsx! {
        div { class: "max-w-2xl mx-auto px-4 py-12 slide-in",
            div { class: "mb-12 space-y-4",
                h2 { class: "text-4xl font-black text-gray-900 tracking-tight leading-tight",
                    "Confirm "
                    br {}
                    span { class: "text-indigo-600", "Pickup Details" }
                }
                p { class: "text-gray-400 font-black uppercase text-[10px] tracking-[0.3em]", "Home Evaluation Specialist Slot" }
            }

            form { class: "space-y-8", onsubmit: on_submit,
                div { class: "grid grid-cols-1 sm:grid-cols-2 gap-8",
                    div { class: "space-y-3",
                        label { class: "{theme::label_class()} ml-2", "Full Name" }
                        input {
                            r#type: "text",
                            class: "{theme::input_class()}",
                            placeholder: "e.g. Rahul Sharma",
                            value: "{form.read().full_name}",
                            oninput: move |evt| form.with_mut(|f| f.full_name = evt.value()),
                        }
                    }
                    div { class: "space-y-3",
                        label { class: "{theme::label_class()} ml-2", "WhatsApp Number" }
                        input {
                            r#type: "tel",
                            class: "{theme::input_class()}",
                            placeholder: "10 Digit Mobile",
                            value: "{form.read().whatsapp}",
                            oninput: move |evt| form.with_mut(|f| f.whatsapp = evt.value()),
                        }
                    }
                }

                div { class: "space-y-3",
                    label { class: "{theme::label_class()} ml-2", "Evaluation Address" }
                    textarea {
                        class: "{theme::input_class()} h-36",
                        placeholder: "Complete address with landmark & pincode",
                        value: "{form.read().address}",
                        oninput: move |evt| form.with_mut(|f| f.address = evt.value()),
                    }
                }

                div { class: "grid grid-cols-1 sm:grid-cols-2 gap-8",
                    div { class: "space-y-3",
                        label { class: "{theme::label_class()} ml-2", "City" }
                        select {
                            class: "{theme::input_class()} appearance-none",
                            onchange: move |evt| {
                                if let Some(city) = City::from_name(&evt.value()) {
                                    form.with_mut(|f| f.city = city);
                                }
                            },
                            for city in City::ALL {
                                option {
                                    key: "{city.name()}",
                                    value: city.name(),
                                    selected: form.read().city == city,
                                    "{city.name()}"
                                }
                            }
                        }
                    }
                    div { class: "space-y-3",
                        label { class: "{theme::label_class()} ml-2", "Pickup Date" }
                        input {
                            r#type: "date",
                            class: "{theme::input_class()}",
                            min: "{min_date}",
                            value: "{form.read().date}",
                            oninput: move |evt| form.with_mut(|f| f.date = evt.value()),
                        }
                    }
                }

                div { class: "pt-10",
                    button { r#type: "submit", class: "{theme::btn_primary()} uppercase tracking-[0.2em]", "Schedule Visit" }
                }
            }
        }
    }
}

#[component]
fn BookingRow(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "flex justify-between items-center",
            span { class: "text-gray-400 font-black uppercase text-[10px] tracking-widest", "{label}" }
            span { class: "text-gray-900 font-black tracking-tight", "{value}" }
        }
    }
}
