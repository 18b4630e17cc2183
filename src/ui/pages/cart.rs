use dioxus::prelude::*;
use tracing::info;

use crate::app::{Route, ORDER_REDIRECT_DELAY};
use crate::domain::{AppState, CheckoutStage, InventoryItem, Order, PaymentMethod};
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::ui::theme;
use crate::util::format::format_inr;

/// Clears the cart and resets checkout once an order has been shown.
fn close_order(mut state: Signal<AppState>, reference: &str) -> bool {
    state.with_mut(|s| {
        let current = s.checkout.order().map(|order| order.reference == reference);
        if current != Some(true) {
            return false;
        }
        s.cart.clear();
        s.checkout.finish();
        info!(reference, "order closed, cart cleared");
        true
    })
}

#[component]
pub fn CartPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    // A confirmation left behind by navigating away mid-redirect is closed on return.
    use_hook(move || {
        let stale = state.peek().checkout.order().map(|order| order.reference.clone());
        if let Some(reference) = stale {
            close_order(state, &reference);
        }
    });

    let (items, checkout) = state.with(|s| (s.cart.items().to_vec(), s.checkout.clone()));
    let (subtotal, gst, total) = state.with(|s| (s.cart.subtotal(), s.cart.gst(), s.cart.total()));

    if let CheckoutStage::Success(order) = checkout.stage {
        return rsx! { OrderSuccess { order } };
    }

    if items.is_empty() {
        return rsx! { EmptyCart {} };
    }

    let in_review = checkout.stage == CheckoutStage::Review;
    let payment = checkout.payment;

    let on_proceed = move |_| {
        state.with_mut(|s| {
            let AppState { cart, checkout, .. } = s;
            checkout.proceed(cart);
        });
    };

    let on_place_order = move |_| {
        let placed = state.with_mut(|s| {
            let AppState { cart, checkout, .. } = s;
            checkout.place_order(cart)
        });
        let Some(order) = placed else {
            push_toast(toasts, ToastKind::Error, "Your cart is empty.");
            return;
        };
        push_toast(toasts, ToastKind::Success, format!("Order {} placed", order.reference));
        spawn(async move {
            tokio::time::sleep(ORDER_REDIRECT_DELAY).await;
            if close_order(state, &order.reference) {
                nav.push(Route::Home {});
            }
        });
    };

    rsx! {
        div { class: "max-w-7xl mx-auto px-4 py-12",
            div { class: "mb-16",
                h1 { class: "text-5xl font-black text-gray-900 tracking-tighter",
                    "My "
                    span { class: "text-indigo-600", "Cart." }
                }
                p { class: "text-gray-400 font-black uppercase text-[10px] tracking-[0.3em] mt-2",
                    if in_review { "Step 1 of 2: Review Items" } else { "Step 2 of 2: Secure Checkout" }
                }
            }

            div { class: "grid lg:grid-cols-12 gap-16",
                div { class: "lg:col-span-8 space-y-8",
                    if in_review {
                        div { class: "space-y-6",
                            for (index, item) in items.into_iter().enumerate() {
                                CartLine {
                                    key: "{item.id}-{index}",
                                    item,
                                    on_remove: move |id: &'static str| {
                                        let removed = state.with_mut(|s| s.cart.remove(id));
                                        info!(id, removed, "removed from cart");
                                    },
                                }
                            }
                        }
                    } else {
                        CheckoutForm {
                            payment,
                            on_select: move |method: PaymentMethod| state.with_mut(|s| s.checkout.select_payment(method)),
                        }
                    }
                }

                div { class: "lg:col-span-4",
                    div { class: "bg-gray-900 rounded-[3rem] p-12 text-white sticky top-28 shadow-2xl space-y-12",
                        h3 { class: "text-[10px] font-black text-gray-500 uppercase tracking-[0.3em]", "Total Value" }
                        div { class: "space-y-6",
                            SummaryRow { label: "Subtotal", value: format_inr(subtotal) }
                            SummaryRow { label: "GST (18%)", value: format_inr(gst) }
                            div { class: "flex justify-between items-center text-sm",
                                span { class: "text-gray-400 font-bold uppercase tracking-widest text-[10px]", "Shipping" }
                                span { class: "text-green-500 font-black uppercase text-[10px]", "Free" }
                            }
                        }
                        div { class: "pt-10 border-t border-gray-800 space-y-10",
                            div { class: "flex justify-between items-end",
                                span { class: "text-xs font-black text-gray-500 uppercase tracking-widest", "Grand Total" }
                                span { class: "text-4xl font-black tracking-tighter", "{format_inr(total)}" }
                            }
                            if in_review {
                                button {
                                    class: "w-full py-7 bg-indigo-600 rounded-[2rem] font-black text-lg hover:bg-indigo-700 transition shadow-2xl uppercase tracking-widest",
                                    onclick: on_proceed,
                                    "Checkout Items"
                                }
                            } else {
                                button {
                                    class: "w-full py-7 bg-green-600 rounded-[2rem] font-black text-lg hover:bg-green-700 transition shadow-2xl uppercase tracking-widest",
                                    onclick: on_place_order,
                                    "{payment.pay_label()}"
                                }
                            }
                            div { class: "flex items-center justify-center space-x-3 opacity-50",
                                span { class: "text-[9px] font-black uppercase tracking-widest", "🔒 Secure Payment" }
                                span { class: "text-[9px] font-black uppercase tracking-widest", "• Verified Seller" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CartLine(item: InventoryItem, on_remove: EventHandler<&'static str>) -> Element {
    rsx! {
        div { class: "group bg-white p-8 rounded-[2.5rem] border-2 border-gray-50 flex flex-col sm:flex-row items-center gap-8 hover:border-indigo-100 transition duration-500 shadow-sm",
            div { class: "w-24 h-24 bg-gray-50 rounded-2xl flex items-center justify-center p-4",
                img { class: "max-h-full max-w-full object-contain", src: "{item.image}", alt: "{item.name}" }
            }
            div { class: "flex-grow text-center sm:text-left",
                p { class: "text-[10px] font-black text-indigo-600 uppercase tracking-widest mb-1", "{item.brand}" }
                h3 { class: "text-xl font-black text-gray-900 leading-tight", "{item.name}" }
                p { class: "text-xs font-bold text-gray-400 mt-2 uppercase tracking-widest",
                    "{item.storage} • Grade {item.grade.letter()}"
                }
            }
            div { class: "text-center sm:text-right space-y-3",
                p { class: "text-2xl font-black text-gray-900 tracking-tighter", "{format_inr(item.price)}" }
                button {
                    class: "text-red-500 font-black uppercase text-[10px] tracking-[0.2em] hover:text-red-600 transition",
                    onclick: move |_| on_remove.call(item.id),
                    "Remove Item"
                }
            }
        }
    }
}

#[component]
fn CheckoutForm(payment: PaymentMethod, on_select: EventHandler<PaymentMethod>) -> Element {
    let field = "w-full p-6 bg-gray-50 text-gray-900 border-none rounded-2xl font-bold focus:ring-2 focus:ring-indigo-600 outline-none transition";

    rsx! {
        div { class: "space-y-10 slide-in",
            div { class: "bg-white p-12 rounded-[3rem] border-2 border-gray-50 space-y-10",
                h3 { class: "text-sm font-black text-gray-400 uppercase tracking-[0.3em]", "Delivery Information" }
                div { class: "grid sm:grid-cols-2 gap-8",
                    div { class: "space-y-2",
                        label { class: "text-[10px] font-black text-gray-400 uppercase tracking-widest ml-2", "Full Name" }
                        input { r#type: "text", placeholder: "John Doe", class: field }
                    }
                    div { class: "space-y-2",
                        label { class: "text-[10px] font-black text-gray-400 uppercase tracking-widest ml-2", "Contact Number" }
                        input { r#type: "tel", placeholder: "+91 98765 43210", class: field }
                    }
                    div { class: "sm:col-span-2 space-y-2",
                        label { class: "text-[10px] font-black text-gray-400 uppercase tracking-widest ml-2", "Shipping Address" }
                        textarea { placeholder: "Street, Landmark, City, State", class: "{field} h-32" }
                    }
                }
            }
            div { class: "bg-white p-12 rounded-[3rem] border-2 border-gray-50 space-y-10",
                h3 { class: "text-sm font-black text-gray-400 uppercase tracking-[0.3em]", "Payment Method (Mock)" }
                div { class: "grid grid-cols-1 sm:grid-cols-3 gap-4",
                    for method in PaymentMethod::ALL {
                        button {
                            key: "{method.name()}",
                            class: "{theme::chip(method == payment)} uppercase tracking-widest text-xs",
                            onclick: move |_| on_select.call(method),
                            "{method.name()}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SummaryRow(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "flex justify-between items-center text-sm",
            span { class: "text-gray-400 font-bold uppercase tracking-widest text-[10px]", "{label}" }
            span { class: "font-black", "{value}" }
        }
    }
}

#[component]
fn EmptyCart() -> Element {
    rsx! {
        div { class: "max-w-7xl mx-auto px-4 py-24 text-center fade-in",
            div { class: "w-24 h-24 bg-gray-50 text-gray-200 rounded-full flex items-center justify-center text-5xl mx-auto mb-8", "🛒" }
            h2 { class: "text-4xl font-black text-gray-900 mb-4 tracking-tighter", "Your cart is empty" }
            p { class: "text-gray-500 font-bold uppercase text-[10px] tracking-widest mb-10", "Upgrade your tech game today" }
            Link { to: Route::Shop {}, class: "{theme::btn_dark()}", "Browse Store" }
        }
    }
}

#[component]
fn OrderSuccess(order: Order) -> Element {
    let seconds = ORDER_REDIRECT_DELAY.as_secs();

    rsx! {
        div { class: "max-w-2xl mx-auto px-4 py-24 text-center zoom-in",
            div { class: "w-28 h-28 bg-indigo-600 text-white rounded-[2.5rem] flex items-center justify-center text-6xl mx-auto mb-12 shadow-2xl shadow-indigo-100 rotate-12", "🎁" }
            h2 { class: "text-5xl font-black text-gray-900 mb-6 tracking-tighter leading-tight",
                "Order Placed "
                br {}
                span { class: "text-indigo-600", "Successfully!" }
            }
            p { class: "text-gray-400 font-bold uppercase text-[10px] tracking-[0.3em] mb-12",
                "Redirecting to home in {seconds} seconds..."
            }
            div { class: "bg-white p-12 rounded-[3.5rem] text-left border-2 border-indigo-50 shadow-2xl space-y-8",
                div { class: "flex justify-between items-center border-b border-gray-50 pb-8",
                    span { class: "text-[10px] font-black text-gray-400 uppercase tracking-widest", "Order Reference" }
                    span { class: "font-mono text-xl font-black text-indigo-600", "{order.reference}" }
                }
                div { class: "space-y-4",
                    for (index, item) in order.items.iter().enumerate() {
                        div { key: "{item.id}-{index}", class: "flex justify-between items-center text-sm",
                            span { class: "text-gray-600 font-bold", "{item.name}" }
                            span { class: "text-gray-900 font-black", "{format_inr(item.price)}" }
                        }
                    }
                }
                div { class: "flex justify-between items-center text-xs font-bold text-gray-400 uppercase tracking-widest",
                    span { "Paid with" }
                    span { "{order.payment.name()}" }
                }
                div { class: "pt-8 border-t-4 border-indigo-50 flex justify-between items-center",
                    span { class: "text-xs font-black text-gray-400 uppercase tracking-widest", "Total Paid" }
                    span { class: "text-4xl font-black text-gray-900 tracking-tighter", "{format_inr(order.total)}" }
                }
            }
        }
    }
}
