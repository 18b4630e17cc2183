//! The five-stage "sell your phone" wizard.
//!
//! `SellFlow` owns the seller's [`SellRequest`] and the current stage. Every
//! operation reports whether it was applied; a transition whose guard fails
//! is refused and leaves the flow untouched.

use tracing::{debug, info};

use super::entities::{
    BodyCondition, Brand, DeviceModel, FunctionalCheck, ScreenCondition, SellRequest,
};
use super::evaluation::estimate_price;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SellStage {
    #[default]
    DeviceSelect,
    Specs,
    Diagnostics,
    /// Quote computed, waiting out the calculation delay. Nothing is editable.
    Calculating,
    Quote,
    Schedule,
}

impl SellStage {
    /// 1-based position in the wizard; the calculating phase still counts as step 3.
    pub fn step_number(&self) -> u8 {
        match self {
            SellStage::DeviceSelect => 1,
            SellStage::Specs => 2,
            SellStage::Diagnostics | SellStage::Calculating => 3,
            SellStage::Quote => 4,
            SellStage::Schedule => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SellStage::DeviceSelect => "Device",
            SellStage::Specs => "Specs",
            SellStage::Diagnostics | SellStage::Calculating => "Condition",
            SellStage::Quote => "Quote",
            SellStage::Schedule => "Pickup",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockReason {
    /// The operation does not belong to the current stage.
    WrongStage(SellStage),
    NoModelSelected,
    SpecsIncomplete,
    /// The model is not one of the selected brand's models.
    ModelBrandMismatch,
    /// Storage or age label outside the fixed option lists.
    UnknownOption,
    /// A quote calculation is already in flight.
    CalculationPending,
    /// The continuation belongs to a calculation that was cancelled.
    StaleTicket,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Blocked(BlockReason),
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}

/// Handle for one in-flight quote calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingQuote {
    ticket: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SellFlow {
    request: SellRequest,
    stage: SellStage,
    pending: Option<u64>,
    next_ticket: u64,
}

impl SellFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) -> &SellRequest {
        &self.request
    }

    pub fn stage(&self) -> SellStage {
        self.stage
    }

    pub fn is_calculating(&self) -> bool {
        self.stage == SellStage::Calculating
    }

    pub fn can_advance(&self) -> bool {
        self.advance_guard().is_none()
    }

    /// Starts a fresh session. Refused while a quote is being computed;
    /// [`SellFlow::cancel_assessment`] is the way out of that stage.
    pub fn reset(&mut self) -> Transition {
        if self.stage == SellStage::Calculating {
            return self.blocked("reset", BlockReason::CalculationPending);
        }
        info!("sell flow reset");
        *self = Self {
            next_ticket: self.next_ticket,
            ..Self::default()
        };
        Transition::Applied
    }

    pub fn select_brand(&mut self, brand: Brand) -> Transition {
        self.edit(SellStage::DeviceSelect, |request| {
            request.set_brand(brand);
            Transition::Applied
        })
    }

    pub fn select_model(&mut self, model: DeviceModel) -> Transition {
        self.edit(SellStage::DeviceSelect, |request| {
            if request.set_model(model) {
                Transition::Applied
            } else {
                Transition::Blocked(BlockReason::ModelBrandMismatch)
            }
        })
    }

    pub fn select_storage(&mut self, storage: &str) -> Transition {
        self.edit(SellStage::Specs, |request| {
            if request.set_storage(storage) {
                Transition::Applied
            } else {
                Transition::Blocked(BlockReason::UnknownOption)
            }
        })
    }

    pub fn select_age(&mut self, age: &str) -> Transition {
        self.edit(SellStage::Specs, |request| {
            if request.set_age(age) {
                Transition::Applied
            } else {
                Transition::Blocked(BlockReason::UnknownOption)
            }
        })
    }

    pub fn set_screen_condition(&mut self, condition: ScreenCondition) -> Transition {
        self.edit(SellStage::Diagnostics, |request| {
            request.screen_condition = condition;
            Transition::Applied
        })
    }

    pub fn set_body_condition(&mut self, condition: BodyCondition) -> Transition {
        self.edit(SellStage::Diagnostics, |request| {
            request.body_condition = condition;
            Transition::Applied
        })
    }

    pub fn toggle_check(&mut self, check: FunctionalCheck) -> Transition {
        self.edit(SellStage::Diagnostics, |request| {
            request.functional_checks.toggle(check);
            Transition::Applied
        })
    }

    pub fn set_powered_on(&mut self, powered_on: bool) -> Transition {
        self.edit(SellStage::Diagnostics, |request| {
            request.is_powered_on = powered_on;
            Transition::Applied
        })
    }

    pub fn set_battery_health(&mut self, percent: i64) -> Transition {
        self.edit(SellStage::Diagnostics, |request| {
            request.set_battery_health(percent);
            Transition::Applied
        })
    }

    pub fn set_network_issues(&mut self, network_issues: bool) -> Transition {
        self.edit(SellStage::Diagnostics, |request| {
            request.network_issues = network_issues;
            Transition::Applied
        })
    }

    pub fn set_water_damage(&mut self, water_damage: bool) -> Transition {
        self.edit(SellStage::Diagnostics, |request| {
            request.water_damage = water_damage;
            Transition::Applied
        })
    }

    /// Device → Specs → Diagnostics, guarded on the current stage's inputs.
    pub fn advance(&mut self) -> Transition {
        if let Some(reason) = self.advance_guard() {
            return self.blocked("advance", reason);
        }
        let next = match self.stage {
            SellStage::DeviceSelect => SellStage::Specs,
            _ => SellStage::Diagnostics,
        };
        self.move_to(next)
    }

    /// One step back from Specs or Diagnostics.
    pub fn back(&mut self) -> Transition {
        let previous = match self.stage {
            SellStage::Specs => SellStage::DeviceSelect,
            SellStage::Diagnostics => SellStage::Specs,
            other => return self.blocked("back", BlockReason::WrongStage(other)),
        };
        self.move_to(previous)
    }

    /// Computes the quote and enters the calculating phase.
    ///
    /// The returned ticket must be handed to [`SellFlow::complete_assessment`]
    /// once the calculation delay has passed.
    pub fn begin_assessment(&mut self) -> Result<PendingQuote, BlockReason> {
        match self.stage {
            SellStage::Diagnostics => {}
            SellStage::Calculating => {
                self.blocked("begin_assessment", BlockReason::CalculationPending);
                return Err(BlockReason::CalculationPending);
            }
            other => {
                self.blocked("begin_assessment", BlockReason::WrongStage(other));
                return Err(BlockReason::WrongStage(other));
            }
        }

        let price = estimate_price(&self.request);
        self.request.estimated_price = price;
        info!(
            model = self.request.model.map(|m| m.id).unwrap_or("none"),
            price, "quote computed"
        );

        self.next_ticket += 1;
        self.pending = Some(self.next_ticket);
        self.move_to(SellStage::Calculating);
        Ok(PendingQuote {
            ticket: self.next_ticket,
        })
    }

    /// Finishes a calculation started by [`SellFlow::begin_assessment`].
    pub fn complete_assessment(&mut self, pending: PendingQuote) -> Transition {
        if self.stage != SellStage::Calculating {
            return self.blocked("complete_assessment", BlockReason::WrongStage(self.stage));
        }
        if self.pending != Some(pending.ticket) {
            return self.blocked("complete_assessment", BlockReason::StaleTicket);
        }
        self.pending = None;
        self.move_to(SellStage::Quote)
    }

    /// Abandons an in-flight calculation, e.g. when the seller navigates away.
    pub fn cancel_assessment(&mut self) -> Transition {
        if self.stage != SellStage::Calculating {
            return self.blocked("cancel_assessment", BlockReason::WrongStage(self.stage));
        }
        self.pending = None;
        self.request.estimated_price = 0;
        self.move_to(SellStage::Diagnostics)
    }

    /// Accepts the quote and moves on to pickup scheduling.
    pub fn schedule(&mut self) -> Transition {
        if self.stage != SellStage::Quote {
            return self.blocked("schedule", BlockReason::WrongStage(self.stage));
        }
        self.move_to(SellStage::Schedule)
    }

    fn advance_guard(&self) -> Option<BlockReason> {
        match self.stage {
            SellStage::DeviceSelect if self.request.model.is_none() => {
                Some(BlockReason::NoModelSelected)
            }
            SellStage::DeviceSelect => None,
            SellStage::Specs if !self.request.specs_complete() => {
                Some(BlockReason::SpecsIncomplete)
            }
            SellStage::Specs => None,
            other => Some(BlockReason::WrongStage(other)),
        }
    }

    fn edit(
        &mut self,
        owner: SellStage,
        apply: impl FnOnce(&mut SellRequest) -> Transition,
    ) -> Transition {
        if self.stage != owner {
            return self.blocked("edit", BlockReason::WrongStage(self.stage));
        }
        apply(&mut self.request)
    }

    fn move_to(&mut self, stage: SellStage) -> Transition {
        debug!(from = ?self.stage, to = ?stage, "sell stage change");
        self.stage = stage;
        Transition::Applied
    }

    fn blocked(&self, operation: &'static str, reason: BlockReason) -> Transition {
        debug!(operation, stage = ?self.stage, ?reason, "sell transition blocked");
        Transition::Blocked(reason)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::domain::catalog::{find_model, AGE_OPTIONS, STORAGE_OPTIONS};

    fn iphone_14() -> DeviceModel {
        find_model("2").expect("catalog has iPhone 14")
    }

    fn at_diagnostics() -> SellFlow {
        let mut flow = SellFlow::new();
        assert!(flow.select_brand(Brand::Apple).is_applied());
        assert!(flow.select_model(iphone_14()).is_applied());
        assert!(flow.advance().is_applied());
        assert!(flow.select_storage("128GB").is_applied());
        assert!(flow.select_age("1-2 years").is_applied());
        assert!(flow.advance().is_applied());
        assert_eq!(flow.stage(), SellStage::Diagnostics);
        flow
    }

    #[test]
    fn cannot_leave_device_select_without_model() {
        let mut flow = SellFlow::new();
        assert_eq!(
            flow.advance(),
            Transition::Blocked(BlockReason::NoModelSelected)
        );
        flow.select_brand(Brand::Samsung);
        assert_eq!(
            flow.advance(),
            Transition::Blocked(BlockReason::NoModelSelected)
        );
        assert_eq!(flow.stage(), SellStage::DeviceSelect);
    }

    #[test]
    fn model_from_other_brand_is_refused() {
        let mut flow = SellFlow::new();
        flow.select_brand(Brand::Google);
        assert_eq!(
            flow.select_model(iphone_14()),
            Transition::Blocked(BlockReason::ModelBrandMismatch)
        );
        assert!(flow.request().model.is_none());
    }

    #[test]
    fn specs_need_storage_and_age() {
        let mut flow = SellFlow::new();
        flow.select_brand(Brand::Apple);
        flow.select_model(iphone_14());
        flow.advance();

        assert_eq!(flow.advance(), Transition::Blocked(BlockReason::SpecsIncomplete));
        flow.select_storage("512GB");
        assert_eq!(flow.advance(), Transition::Blocked(BlockReason::SpecsIncomplete));
        assert_eq!(flow.stage(), SellStage::Specs);

        assert_eq!(
            flow.select_age("decades"),
            Transition::Blocked(BlockReason::UnknownOption)
        );
        flow.select_age("6-11 months");
        assert!(flow.advance().is_applied());
        assert_eq!(flow.stage(), SellStage::Diagnostics);
    }

    #[test]
    fn back_only_from_specs_and_diagnostics() {
        let mut flow = SellFlow::new();
        assert!(!flow.back().is_applied());

        let mut flow = at_diagnostics();
        assert!(flow.back().is_applied());
        assert_eq!(flow.stage(), SellStage::Specs);
        assert!(flow.back().is_applied());
        assert_eq!(flow.stage(), SellStage::DeviceSelect);
        assert_eq!(flow.request().storage, Some("128GB"));
    }

    #[test]
    fn diagnostics_edits_do_not_touch_the_quote() {
        let mut flow = at_diagnostics();
        flow.set_screen_condition(ScreenCondition::Cracked);
        flow.toggle_check(FunctionalCheck::Speaker);
        flow.set_water_damage(true);
        flow.set_battery_health(150);
        assert_eq!(flow.request().estimated_price, 0);
        assert_eq!(flow.request().battery_health, 100);
    }

    #[test]
    fn fields_are_only_editable_in_their_stage() {
        let mut flow = at_diagnostics();
        assert_eq!(
            flow.select_brand(Brand::Samsung),
            Transition::Blocked(BlockReason::WrongStage(SellStage::Diagnostics))
        );
        assert_eq!(flow.request().brand, Some(Brand::Apple));

        let mut flow = SellFlow::new();
        assert!(!flow.set_water_damage(true).is_applied());
        assert!(!flow.request().water_damage);
    }

    #[test]
    fn assessment_writes_quote_then_reaches_quote_stage() {
        let mut flow = at_diagnostics();
        flow.set_screen_condition(ScreenCondition::Cracked);

        let pending = flow.begin_assessment().expect("diagnostics can be assessed");
        assert_eq!(flow.stage(), SellStage::Calculating);
        assert_eq!(flow.request().estimated_price, 32_500);

        assert!(flow.complete_assessment(pending).is_applied());
        assert_eq!(flow.stage(), SellStage::Quote);
        assert_eq!(flow.request().estimated_price, estimate_price(flow.request()));
    }

    #[test]
    fn assessment_is_not_reentrant() {
        let mut flow = at_diagnostics();
        let first = flow.begin_assessment().expect("first assessment starts");
        assert_eq!(flow.begin_assessment(), Err(BlockReason::CalculationPending));
        assert!(!flow.set_water_damage(true).is_applied());
        assert!(!flow.back().is_applied());
        assert!(flow.complete_assessment(first).is_applied());
    }

    #[test]
    fn reset_is_refused_while_calculating() {
        let mut flow = at_diagnostics();
        let pending = flow.begin_assessment().expect("assessment starts");
        let price = flow.request().estimated_price;

        assert_eq!(
            flow.reset(),
            Transition::Blocked(BlockReason::CalculationPending)
        );
        assert_eq!(flow.stage(), SellStage::Calculating);
        assert_eq!(flow.request().estimated_price, price);
        assert!(flow.request().model.is_some());

        assert!(flow.complete_assessment(pending).is_applied());
        assert_eq!(flow.stage(), SellStage::Quote);
        assert!(flow.reset().is_applied());
        assert_eq!(flow.stage(), SellStage::DeviceSelect);
    }

    #[test]
    fn cancelled_calculation_ignores_late_continuation() {
        let mut flow = at_diagnostics();
        let stale = flow.begin_assessment().expect("assessment starts");
        assert!(flow.cancel_assessment().is_applied());
        assert_eq!(flow.stage(), SellStage::Diagnostics);
        assert_eq!(flow.request().estimated_price, 0);

        let fresh = flow.begin_assessment().expect("assessment restarts");
        assert_eq!(
            flow.complete_assessment(stale),
            Transition::Blocked(BlockReason::StaleTicket)
        );
        assert_eq!(flow.stage(), SellStage::Calculating);
        assert!(flow.complete_assessment(fresh).is_applied());
    }

    #[test]
    fn quote_can_only_be_reached_through_assessment() {
        let mut flow = at_diagnostics();
        assert!(!flow.advance().is_applied());
        assert!(!flow.schedule().is_applied());
        assert_eq!(flow.stage(), SellStage::Diagnostics);
    }

    #[test]
    fn schedule_follows_quote_and_is_terminal() {
        let mut flow = at_diagnostics();
        let pending = flow.begin_assessment().expect("assessment starts");
        flow.complete_assessment(pending);
        assert!(flow.schedule().is_applied());
        assert_eq!(flow.stage(), SellStage::Schedule);
        assert!(!flow.back().is_applied());
        assert!(!flow.advance().is_applied());
        assert!(!flow.schedule().is_applied());
        assert_eq!(flow.stage().step_number(), 5);
    }

    #[test]
    fn reset_starts_over_and_invalidates_old_tickets() {
        let mut flow = at_diagnostics();
        let stale = flow.begin_assessment().expect("assessment starts");
        assert!(flow.cancel_assessment().is_applied());
        assert!(flow.reset().is_applied());
        assert_eq!(flow.stage(), SellStage::DeviceSelect);
        assert_eq!(flow.request(), &SellRequest::default());

        let mut restarted = flow.clone();
        restarted.select_brand(Brand::Apple);
        restarted.select_model(iphone_14());
        restarted.advance();
        restarted.select_storage("64GB");
        restarted.select_age("Above 2 years");
        restarted.advance();
        let fresh = restarted.begin_assessment().expect("assessment starts");
        assert_ne!(fresh, stale);
    }

    proptest! {
        #[test]
        fn guards_hold_for_any_spec_selection(
            storage in prop::option::of(prop::sample::select(STORAGE_OPTIONS.to_vec())),
            age in prop::option::of(prop::sample::select(AGE_OPTIONS.to_vec())),
        ) {
            let mut flow = SellFlow::new();
            flow.select_brand(Brand::Apple);
            flow.select_model(iphone_14());
            flow.advance();
            if let Some(storage) = storage {
                flow.select_storage(storage);
            }
            if let Some(age) = age {
                flow.select_age(age);
            }
            let applied = flow.advance().is_applied();
            prop_assert_eq!(applied, storage.is_some() && age.is_some());
            let expected = if applied { SellStage::Diagnostics } else { SellStage::Specs };
            prop_assert_eq!(flow.stage(), expected);
        }
    }
}
