//! Domain logic for trade-in quotes and the storefront lives here.

pub mod admin;
pub mod app_state;
pub mod cart;
pub mod catalog;
pub mod entities;
pub mod evaluation;
pub mod pickup;
pub mod sell_flow;

#[allow(unused_imports)]
pub use admin::{
    AdminStat, RequestStatus, SellRequestRecord, StatAccent, StatValue, Trend, ADMIN_STATS,
    RECENT_REQUESTS,
};
pub use app_state::AppState;
#[allow(unused_imports)]
pub use cart::{Cart, Checkout, CheckoutStage, Order, PaymentMethod, GST_RATE};
#[allow(unused_imports)]
pub use catalog::{
    inventory_for, models_for_brand, AGE_OPTIONS, BRANDS, INVENTORY, MODELS, STORAGE_OPTIONS,
};
#[allow(unused_imports)]
pub use entities::{
    BodyCondition, Brand, DeviceModel, FunctionalCheck, FunctionalChecks, Grade, InventoryItem,
    ScreenCondition, SellRequest,
};
#[allow(unused_imports)]
pub use evaluation::{estimate_price, price_adjustments, PriceAdjustment};
#[allow(unused_imports)]
pub use pickup::{City, PickupBooking, PickupDetails, PickupError, PickupForm};
#[allow(unused_imports)]
pub use sell_flow::{BlockReason, PendingQuote, SellFlow, SellStage, Transition};
