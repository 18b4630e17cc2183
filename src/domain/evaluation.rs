use serde::Serialize;

use super::entities::{BodyCondition, ScreenCondition, SellRequest};

pub const SCREEN_MINOR_FACTOR: f64 = 0.85;
pub const SCREEN_CRACKED_FACTOR: f64 = 0.5;
pub const BODY_MINOR_FACTOR: f64 = 0.92;
pub const BODY_HEAVY_FACTOR: f64 = 0.7;
/// Applied once per failing functional check, so faults compound.
pub const FUNCTIONAL_FAILURE_FACTOR: f64 = 0.88;
pub const POWERED_OFF_FACTOR: f64 = 0.4;
pub const NETWORK_ISSUES_FACTOR: f64 = 0.8;
pub const WATER_DAMAGE_FACTOR: f64 = 0.3;
pub const WEAK_BATTERY_FACTOR: f64 = 0.9;
/// Battery health strictly below this takes [`WEAK_BATTERY_FACTOR`].
pub const BATTERY_HEALTH_THRESHOLD: u8 = 80;

/// One deduction applied to the base price.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PriceAdjustment {
    pub label: String,
    pub factor: f64,
}

impl PriceAdjustment {
    fn new(label: impl Into<String>, factor: f64) -> Self {
        Self {
            label: label.into(),
            factor,
        }
    }

    /// Share of the value removed by this deduction, in whole percent.
    pub fn deduction_pct(&self) -> i64 {
        round_half_up((1.0 - self.factor) * 100.0)
    }
}

/// Every multiplier that applies to the request's condition profile.
///
/// Multipliers of exactly 1.0 (pristine screen, working checks, ...) are
/// left out, so an untouched request yields an empty list.
pub fn price_adjustments(request: &SellRequest) -> Vec<PriceAdjustment> {
    let mut adjustments = Vec::new();

    match request.screen_condition {
        ScreenCondition::Excellent => {}
        ScreenCondition::Minor => {
            adjustments.push(PriceAdjustment::new("Screen wear", SCREEN_MINOR_FACTOR))
        }
        ScreenCondition::Cracked => {
            adjustments.push(PriceAdjustment::new("Damaged screen", SCREEN_CRACKED_FACTOR))
        }
    }

    match request.body_condition {
        BodyCondition::Excellent => {}
        BodyCondition::Minor => {
            adjustments.push(PriceAdjustment::new("Body scuffs", BODY_MINOR_FACTOR))
        }
        BodyCondition::Heavy => {
            adjustments.push(PriceAdjustment::new("Body damage", BODY_HEAVY_FACTOR))
        }
    }

    let failures = request.functional_checks.failures();
    if failures > 0 {
        adjustments.push(PriceAdjustment::new(
            format!("{failures} failed hardware check(s)"),
            FUNCTIONAL_FAILURE_FACTOR.powi(failures as i32),
        ));
    }

    if !request.is_powered_on {
        adjustments.push(PriceAdjustment::new("Does not power on", POWERED_OFF_FACTOR));
    }
    if request.network_issues {
        adjustments.push(PriceAdjustment::new("Network issues", NETWORK_ISSUES_FACTOR));
    }
    if request.water_damage {
        adjustments.push(PriceAdjustment::new("Water damage", WATER_DAMAGE_FACTOR));
    }
    if request.battery_health < BATTERY_HEALTH_THRESHOLD {
        adjustments.push(PriceAdjustment::new(
            format!("Battery health below {BATTERY_HEALTH_THRESHOLD}%"),
            WEAK_BATTERY_FACTOR,
        ));
    }

    adjustments
}

/// Quote for the request in whole rupees.
///
/// Returns 0 when no model has been picked. Otherwise the base price is
/// multiplied by every applicable factor and rounded once, half up.
pub fn estimate_price(request: &SellRequest) -> i64 {
    let Some(model) = request.model else {
        return 0;
    };

    let adjustments = price_adjustments(request);
    apply_adjustments(model.base_price, &adjustments)
}

pub fn apply_adjustments(base_price: i64, adjustments: &[PriceAdjustment]) -> i64 {
    let price = adjustments
        .iter()
        .fold(base_price as f64, |price, adjustment| price * adjustment.factor);
    round_half_up(price)
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::domain::catalog::MODELS;
    use crate::domain::entities::{Brand, DeviceModel, FunctionalCheck};

    fn device(base_price: i64) -> DeviceModel {
        DeviceModel {
            id: "test",
            brand: Brand::Apple,
            name: "Test Phone",
            base_price,
            image: "",
        }
    }

    fn pristine(base_price: i64) -> SellRequest {
        SellRequest {
            brand: Some(Brand::Apple),
            model: Some(device(base_price)),
            ..SellRequest::default()
        }
    }

    fn fail_checks(request: &mut SellRequest, count: usize) {
        for check in FunctionalCheck::ALL.iter().take(count) {
            request.functional_checks.set(*check, false);
        }
    }

    #[test]
    fn no_model_quotes_zero() {
        let mut request = SellRequest::default();
        request.screen_condition = ScreenCondition::Cracked;
        request.water_damage = true;
        assert_eq!(estimate_price(&request), 0);
    }

    #[test]
    fn pristine_device_gets_base_price() {
        for model in MODELS {
            let request = SellRequest {
                brand: Some(model.brand),
                model: Some(*model),
                ..SellRequest::default()
            };
            assert_eq!(estimate_price(&request), model.base_price);
            assert!(price_adjustments(&request).is_empty());
        }
    }

    #[test]
    fn cracked_screen_halves_the_quote() {
        let mut request = pristine(100_000);
        request.screen_condition = ScreenCondition::Cracked;
        assert_eq!(estimate_price(&request), 50_000);
    }

    #[test]
    fn stacked_penalties_round_once() {
        let mut request = pristine(65_000);
        request.screen_condition = ScreenCondition::Minor;
        request.body_condition = BodyCondition::Minor;
        fail_checks(&mut request, 1);
        request.set_battery_health(70);
        request.water_damage = true;

        // 65000 × 0.85 × 0.92 × 0.88 × 0.9 × 0.3 = 12077.208
        assert_eq!(estimate_price(&request), 12_077);
    }

    #[test]
    fn two_failures_compound() {
        let mut request = pristine(100_000);
        fail_checks(&mut request, 2);
        let expected = (100_000.0 * 0.88 * 0.88_f64 + 0.5).floor() as i64;
        assert_eq!(estimate_price(&request), expected);
        assert_eq!(expected, 77_440);
    }

    #[test]
    fn worst_case_stays_positive() {
        let mut request = pristine(135_000);
        request.screen_condition = ScreenCondition::Cracked;
        request.body_condition = BodyCondition::Heavy;
        fail_checks(&mut request, 6);
        request.is_powered_on = false;
        request.network_issues = true;
        request.water_damage = true;
        request.set_battery_health(0);

        let quote = estimate_price(&request);
        assert!(quote > 0);
        assert!(quote < 2_000);
    }

    #[test]
    fn non_positive_base_price_propagates() {
        assert_eq!(estimate_price(&pristine(0)), 0);
        let mut request = pristine(-1_000);
        request.screen_condition = ScreenCondition::Cracked;
        assert_eq!(estimate_price(&request), -500);
    }

    #[test]
    fn quote_is_stable_once_written() {
        let mut request = pristine(95_000);
        request.body_condition = BodyCondition::Heavy;
        request.network_issues = true;
        request.estimated_price = estimate_price(&request);
        assert_eq!(estimate_price(&request), request.estimated_price);
    }

    #[test]
    fn deduction_percentages() {
        let mut request = pristine(10_000);
        request.screen_condition = ScreenCondition::Minor;
        request.water_damage = true;
        let pct: Vec<_> = price_adjustments(&request)
            .iter()
            .map(PriceAdjustment::deduction_pct)
            .collect();
        assert_eq!(pct, vec![15, 70]);
    }

    const DEGRADATIONS: [&str; 9] = [
        "screen minor",
        "screen cracked",
        "body minor",
        "body heavy",
        "check failed",
        "powered off",
        "network",
        "water",
        "battery",
    ];

    /// Worsens one field of the condition profile. Grades only move down:
    /// a cracked screen or heavy body stays where it is on "minor".
    fn degrade(request: &mut SellRequest, which: &str) {
        match which {
            "screen minor" => {
                if request.screen_condition == ScreenCondition::Excellent {
                    request.screen_condition = ScreenCondition::Minor;
                }
            }
            "screen cracked" => request.screen_condition = ScreenCondition::Cracked,
            "body minor" => {
                if request.body_condition == BodyCondition::Excellent {
                    request.body_condition = BodyCondition::Minor;
                }
            }
            "body heavy" => request.body_condition = BodyCondition::Heavy,
            "check failed" => request.functional_checks.set(FunctionalCheck::Camera, false),
            "powered off" => request.is_powered_on = false,
            "network" => request.network_issues = true,
            "water" => request.water_damage = true,
            "battery" => request.set_battery_health(50),
            other => panic!("unknown degradation {other}"),
        }
    }

    #[test]
    fn minor_wear_never_upgrades_worse_damage() {
        let mut request = pristine(1000);
        request.screen_condition = ScreenCondition::Cracked;
        request.body_condition = BodyCondition::Heavy;
        request.is_powered_on = false;
        request.battery_health = 0;
        let before = estimate_price(&request);

        for name in ["screen minor", "body minor"] {
            let mut worse = request.clone();
            degrade(&mut worse, name);
            assert_eq!(worse.screen_condition, ScreenCondition::Cracked);
            assert_eq!(worse.body_condition, BodyCondition::Heavy);
            assert_eq!(estimate_price(&worse), before, "{name}");
        }
    }

    fn arb_request() -> impl Strategy<Value = SellRequest> {
        (
            1_000i64..=200_000,
            prop::sample::select(ScreenCondition::ALL.to_vec()),
            prop::sample::select(BodyCondition::ALL.to_vec()),
            prop::collection::vec(any::<bool>(), 6),
            any::<bool>(),
            0u8..=100,
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(
                |(base, screen, body, checks, powered, battery, network, water)| {
                    let mut request = pristine(base);
                    request.screen_condition = screen;
                    request.body_condition = body;
                    for (check, passing) in FunctionalCheck::ALL.iter().zip(checks) {
                        request.functional_checks.set(*check, passing);
                    }
                    request.is_powered_on = powered;
                    request.battery_health = battery;
                    request.network_issues = network;
                    request.water_damage = water;
                    request
                },
            )
    }

    proptest! {
        #[test]
        fn quote_never_exceeds_base_or_goes_negative(request in arb_request()) {
            let quote = estimate_price(&request);
            let base = request.model.map(|m| m.base_price).unwrap_or_default();
            prop_assert!(quote >= 0);
            prop_assert!(quote <= base);
        }

        #[test]
        fn missing_model_always_quotes_zero(request in arb_request()) {
            let mut request = request;
            request.model = None;
            prop_assert_eq!(estimate_price(&request), 0);
        }

        #[test]
        fn degrading_one_field_never_raises_the_quote(request in arb_request()) {
            let before = estimate_price(&request);
            for name in DEGRADATIONS {
                let mut worse = request.clone();
                degrade(&mut worse, name);
                prop_assert!(estimate_price(&worse) <= before, "{} raised the quote", name);
            }
        }

        #[test]
        fn degrading_a_pristine_device_strictly_lowers_the_quote(base in 1_000i64..=200_000) {
            let request = pristine(base);
            let before = estimate_price(&request);
            for name in DEGRADATIONS {
                let mut worse = request.clone();
                degrade(&mut worse, name);
                prop_assert!(estimate_price(&worse) < before, "{} did not lower the quote", name);
            }
        }

        #[test]
        fn order_of_adjustments_does_not_matter(
            (request, order) in arb_request().prop_flat_map(|request| {
                let len = price_adjustments(&request).len();
                let order = Just((0..len).collect::<Vec<_>>()).prop_shuffle();
                (Just(request), order)
            })
        ) {
            let adjustments = price_adjustments(&request);
            let shuffled: Vec<_> = order.iter().map(|idx| adjustments[*idx].clone()).collect();
            let base = request.model.map(|m| m.base_price).unwrap_or_default();
            prop_assert_eq!(apply_adjustments(base, &shuffled), estimate_price(&request));
        }

        #[test]
        fn battery_penalty_is_a_step(request in arb_request()) {
            let quote_at = |health: i64| {
                let mut r = request.clone();
                r.set_battery_health(health);
                estimate_price(&r)
            };
            prop_assert_eq!(quote_at(79), quote_at(0));
            prop_assert_eq!(quote_at(80), quote_at(100));
        }

        #[test]
        fn failures_compound_exponentially(base in 1_000i64..=200_000, failures in 0usize..=6) {
            let mut request = pristine(base);
            fail_checks(&mut request, failures);
            let expected = (base as f64 * FUNCTIONAL_FAILURE_FACTOR.powi(failures as i32) + 0.5).floor() as i64;
            prop_assert_eq!(estimate_price(&request), expected);
        }
    }
}
