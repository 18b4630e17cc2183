//! Doorstep pickup booking for an accepted quote.

use serde::Serialize;
use thiserror::Error;
use time::{macros::format_description, Date};
use tracing::{debug, info};
use uuid::Uuid;

use super::entities::SellRequest;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum City {
    #[default]
    Mumbai,
    DelhiNcr,
    Bangalore,
    Hyderabad,
    Pune,
}

impl City {
    pub const ALL: [City; 5] = [
        City::Mumbai,
        City::DelhiNcr,
        City::Bangalore,
        City::Hyderabad,
        City::Pune,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            City::Mumbai => "Mumbai",
            City::DelhiNcr => "Delhi NCR",
            City::Bangalore => "Bangalore",
            City::Hyderabad => "Hyderabad",
            City::Pune => "Pune",
        }
    }

    pub fn from_name(name: &str) -> Option<City> {
        City::ALL.into_iter().find(|city| city.name() == name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickupError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("pickup date must look like YYYY-MM-DD")]
    InvalidDate,
    #[error("pickup date {0} is in the past")]
    DateInPast(Date),
    #[error("no quote to book a pickup for")]
    NoQuote,
}

/// Raw form input, as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PickupForm {
    pub full_name: String,
    pub whatsapp: String,
    pub address: String,
    pub city: City,
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PickupDetails {
    pub full_name: String,
    pub whatsapp: String,
    pub address: String,
    pub city: City,
    pub date: Date,
}

impl PickupForm {
    /// Checks required fields and that the date is today or later.
    pub fn validate(&self, today: Date) -> Result<PickupDetails, PickupError> {
        let full_name = required(&self.full_name, "Full name")?;
        let whatsapp = required(&self.whatsapp, "WhatsApp number")?;
        let address = required(&self.address, "Evaluation address")?;
        let raw_date = required(&self.date, "Pickup date")?;

        let date = Date::parse(&raw_date, format_description!("[year]-[month]-[day]"))
            .map_err(|_| PickupError::InvalidDate)?;
        if date < today {
            return Err(PickupError::DateInPast(date));
        }

        Ok(PickupDetails {
            full_name,
            whatsapp,
            address,
            city: self.city,
            date,
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, PickupError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(PickupError::Missing(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// A confirmed pickup slot.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PickupBooking {
    pub reference: Uuid,
    pub device: String,
    pub payout: i64,
    pub details: PickupDetails,
}

impl PickupBooking {
    pub fn new(request: &SellRequest, details: PickupDetails) -> Result<Self, PickupError> {
        let model = request.model.ok_or(PickupError::NoQuote)?;
        let booking = Self {
            reference: Uuid::new_v4(),
            device: model.name.to_string(),
            payout: request.estimated_price,
            details,
        };
        info!(
            reference = %booking.reference,
            device = %booking.device,
            payout = booking.payout,
            city = booking.details.city.name(),
            date = %booking.details.date,
            "pickup booked"
        );
        if let Ok(record) = serde_json::to_string(&booking) {
            debug!(%record, "pickup booking record");
        }
        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::domain::catalog::find_model;
    use crate::domain::entities::Brand;

    fn filled() -> PickupForm {
        PickupForm {
            full_name: "  Rahul Sharma ".to_string(),
            whatsapp: "9876543210".to_string(),
            address: "12 Marine Drive, Mumbai 400002".to_string(),
            city: City::Mumbai,
            date: "2026-10-20".to_string(),
        }
    }

    #[test]
    fn valid_form_is_trimmed() {
        let details = filled().validate(date!(2026 - 10 - 18)).expect("valid form");
        assert_eq!(details.full_name, "Rahul Sharma");
        assert_eq!(details.date, date!(2026 - 10 - 20));
    }

    #[test]
    fn today_is_allowed_but_yesterday_is_not() {
        let form = filled();
        assert!(form.validate(date!(2026 - 10 - 20)).is_ok());
        assert_eq!(
            form.validate(date!(2026 - 10 - 21)),
            Err(PickupError::DateInPast(date!(2026 - 10 - 20)))
        );
    }

    #[test]
    fn missing_fields_are_reported_in_form_order() {
        let mut form = filled();
        form.address = "   ".to_string();
        form.date.clear();
        assert_eq!(
            form.validate(date!(2026 - 10 - 18)),
            Err(PickupError::Missing("Evaluation address"))
        );
    }

    #[test]
    fn malformed_date() {
        let mut form = filled();
        form.date = "20/10/2026".to_string();
        assert_eq!(
            form.validate(date!(2026 - 10 - 18)),
            Err(PickupError::InvalidDate)
        );
    }

    #[test]
    fn booking_needs_a_quoted_device() {
        let details = filled().validate(date!(2026 - 10 - 18)).expect("valid form");
        assert_eq!(
            PickupBooking::new(&SellRequest::default(), details.clone()),
            Err(PickupError::NoQuote)
        );

        let mut request = SellRequest::default();
        request.set_brand(Brand::Nothing);
        request.set_model(find_model("8").expect("catalog has Phone (2)"));
        request.estimated_price = 39_600;
        let booking = PickupBooking::new(&request, details).expect("booking");
        assert_eq!(booking.device, "Phone (2)");
        assert_eq!(booking.payout, 39_600);
    }

    #[test]
    fn city_names_round_trip() {
        for city in City::ALL {
            assert_eq!(City::from_name(city.name()), Some(city));
        }
        assert_eq!(City::from_name("Chennai"), None);
    }
}
