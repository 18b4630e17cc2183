//! Storefront cart and the mock checkout that follows it.

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use super::entities::InventoryItem;

/// GST charged on the cart subtotal.
pub const GST_RATE: f64 = 0.18;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    items: Vec<InventoryItem>,
}

impl Cart {
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a listing; the same listing may be added more than once.
    pub fn add(&mut self, item: InventoryItem) {
        self.items.push(item);
    }

    /// Removes every line for the listing. Returns how many were dropped.
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before - self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn subtotal(&self) -> i64 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn gst(&self) -> i64 {
        (self.subtotal() as f64 * GST_RATE).round() as i64
    }

    pub fn total(&self) -> i64 {
        self.subtotal() + self.gst()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum PaymentMethod {
    #[default]
    Upi,
    CreditCard,
    CashOnDelivery,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Upi,
        PaymentMethod::CreditCard,
        PaymentMethod::CashOnDelivery,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }

    pub fn pay_label(&self) -> String {
        match self {
            PaymentMethod::CashOnDelivery => "Confirm COD Order".to_string(),
            other => format!("Pay via {}", other.name()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Order {
    pub reference: String,
    pub items: Vec<InventoryItem>,
    pub subtotal: i64,
    pub gst: i64,
    pub total: i64,
    pub payment: PaymentMethod,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum CheckoutStage {
    #[default]
    Review,
    Checkout,
    Success(Order),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Checkout {
    pub stage: CheckoutStage,
    pub payment: PaymentMethod,
}

impl Checkout {
    /// Review → Checkout. Refused for an empty cart.
    pub fn proceed(&mut self, cart: &Cart) -> bool {
        if cart.is_empty() || self.stage != CheckoutStage::Review {
            return false;
        }
        self.stage = CheckoutStage::Checkout;
        true
    }

    pub fn select_payment(&mut self, method: PaymentMethod) {
        self.payment = method;
    }

    /// Checkout → Success, snapshotting the cart into an [`Order`].
    pub fn place_order(&mut self, cart: &Cart) -> Option<Order> {
        if cart.is_empty() || self.stage != CheckoutStage::Checkout {
            return None;
        }
        let order = Order {
            reference: order_reference(),
            items: cart.items().to_vec(),
            subtotal: cart.subtotal(),
            gst: cart.gst(),
            total: cart.total(),
            payment: self.payment,
        };
        info!(
            reference = %order.reference,
            items = order.items.len(),
            total = order.total,
            payment = order.payment.name(),
            "order placed"
        );
        if let Ok(record) = serde_json::to_string(&order) {
            debug!(%record, "order record");
        }
        self.stage = CheckoutStage::Success(order.clone());
        Some(order)
    }

    pub fn order(&self) -> Option<&Order> {
        match &self.stage {
            CheckoutStage::Success(order) => Some(order),
            _ => None,
        }
    }

    /// Back to a fresh review, keeping the chosen payment method.
    pub fn finish(&mut self) {
        self.stage = CheckoutStage::Review;
    }
}

/// `RC-` followed by five digits.
fn order_reference() -> String {
    let number = 10_000 + (Uuid::new_v4().as_u128() % 90_000) as u32;
    format!("RC-{number}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::find_inventory_item;

    fn item(id: &str) -> InventoryItem {
        find_inventory_item(id).expect("inventory listing exists")
    }

    #[test]
    fn totals_include_gst() {
        let mut cart = Cart::default();
        cart.add(item("i1"));
        cart.add(item("i3"));
        assert_eq!(cart.subtotal(), 84_900 + 34_900);
        assert_eq!(cart.gst(), 21_564);
        assert_eq!(cart.total(), 119_800 + 21_564);
    }

    #[test]
    fn remove_drops_every_line_of_a_listing() {
        let mut cart = Cart::default();
        cart.add(item("i2"));
        cart.add(item("i2"));
        cart.add(item("i4"));
        assert_eq!(cart.remove("i2"), 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.remove("missing"), 0);
    }

    #[test]
    fn empty_cart_cannot_check_out() {
        let cart = Cart::default();
        let mut checkout = Checkout::default();
        assert!(!checkout.proceed(&cart));
        assert_eq!(checkout.stage, CheckoutStage::Review);
    }

    #[test]
    fn order_snapshots_the_cart() {
        let mut cart = Cart::default();
        cart.add(item("i1"));
        let mut checkout = Checkout::default();

        assert!(checkout.place_order(&cart).is_none());
        assert!(checkout.proceed(&cart));
        checkout.select_payment(PaymentMethod::CashOnDelivery);
        let order = checkout.place_order(&cart).expect("order placed");

        assert_eq!(order.total, cart.total());
        assert_eq!(order.payment, PaymentMethod::CashOnDelivery);
        assert_eq!(checkout.order(), Some(&order));

        cart.clear();
        assert_eq!(checkout.order().map(|o| o.items.len()), Some(1));

        checkout.finish();
        assert_eq!(checkout.stage, CheckoutStage::Review);
    }

    #[test]
    fn order_reference_format() {
        for _ in 0..50 {
            let reference = order_reference();
            let digits = reference.strip_prefix("RC-").expect("prefixed");
            let number: u32 = digits.parse().expect("numeric");
            assert!((10_000..=99_999).contains(&number));
        }
    }

    #[test]
    fn payment_labels() {
        assert_eq!(PaymentMethod::Upi.pay_label(), "Pay via UPI");
        assert_eq!(PaymentMethod::CreditCard.pay_label(), "Pay via Credit Card");
        assert_eq!(PaymentMethod::CashOnDelivery.pay_label(), "Confirm COD Order");
    }
}
