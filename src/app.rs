use std::time::Duration;

use dioxus::prelude::*;

use crate::{
    domain::AppState,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{AdminPage, CartPage, HomePage, SellPage, ShopPage},
        shell::Shell,
    },
    util::assets,
};

/// How long the "Calculating..." phase lasts before the quote is revealed.
pub const QUOTE_CALCULATION_DELAY: Duration = Duration::from_millis(1800);

/// How long the order confirmation stays up before the cart is cleared and
/// the shopper is sent home.
pub const ORDER_REDIRECT_DELAY: Duration = Duration::from_secs(6);

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/sell")]
    Sell {},
    #[route("/shop")]
    Shop {},
    #[route("/cart")]
    Cart {},
    #[route("/admin")]
    Admin {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::tailwind_css()}" }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn Sell() -> Element {
    rsx! { Shell { SellPage {} } }
}

#[component]
pub fn Shop() -> Element {
    rsx! { Shell { ShopPage {} } }
}

#[component]
pub fn Cart() -> Element {
    rsx! { Shell { CartPage {} } }
}

#[component]
pub fn Admin() -> Element {
    rsx! { Shell { AdminPage {} } }
}
