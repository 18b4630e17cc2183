use super::cart::{Cart, Checkout};
use super::pickup::PickupBooking;
use super::sell_flow::SellFlow;

/// Session state shared by every page. Lives only as long as the app runs.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// The trade-in wizard and the seller's answers so far.
    pub sell: SellFlow,
    pub cart: Cart,
    pub checkout: Checkout,
    /// Pickups confirmed during this session, oldest first.
    pub bookings: Vec<PickupBooking>,
}

impl AppState {
    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }

    pub fn record_booking(&mut self, booking: PickupBooking) {
        self.bookings.push(booking);
    }

    /// Sum of payouts promised to sellers this session.
    pub fn booked_payout(&self) -> i64 {
        self.bookings.iter().map(|booking| booking.payout).sum()
    }
}
