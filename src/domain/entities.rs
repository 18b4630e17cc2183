use std::fmt;

use serde::Serialize;

use super::catalog::{AGE_OPTIONS, STORAGE_OPTIONS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Brand {
    Apple,
    Samsung,
    Google,
    OnePlus,
    Xiaomi,
    Nothing,
}

impl Brand {
    pub fn name(&self) -> &'static str {
        match self {
            Brand::Apple => "Apple",
            Brand::Samsung => "Samsung",
            Brand::Google => "Google",
            Brand::OnePlus => "OnePlus",
            Brand::Xiaomi => "Xiaomi",
            Brand::Nothing => "Nothing",
        }
    }

    pub fn logo_url(&self) -> &'static str {
        match self {
            Brand::Apple => "https://upload.wikimedia.org/wikipedia/commons/f/fa/Apple_logo_black.svg",
            Brand::Samsung => "https://upload.wikimedia.org/wikipedia/commons/2/24/Samsung_Logo.svg",
            Brand::Google => "https://upload.wikimedia.org/wikipedia/commons/c/c1/Google_Logo.svg",
            Brand::OnePlus => "https://upload.wikimedia.org/wikipedia/commons/2/2e/OnePlus_logo.svg",
            Brand::Xiaomi => "https://upload.wikimedia.org/wikipedia/commons/a/ae/Xiaomi_logo_%282021-%29.svg",
            Brand::Nothing => "https://upload.wikimedia.org/wikipedia/commons/3/30/Nothing_logo.svg",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A phone model we quote trade-ins for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DeviceModel {
    pub id: &'static str,
    pub brand: Brand,
    pub name: &'static str,
    /// Payout for a flawless unit, in whole rupees.
    pub base_price: i64,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum ScreenCondition {
    #[default]
    Excellent,
    Minor,
    Cracked,
}

impl ScreenCondition {
    pub const ALL: [ScreenCondition; 3] = [
        ScreenCondition::Excellent,
        ScreenCondition::Minor,
        ScreenCondition::Cracked,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScreenCondition::Excellent => "Flawless",
            ScreenCondition::Minor => "Normal Wear",
            ScreenCondition::Cracked => "Damaged",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScreenCondition::Excellent => "No scratches or screen burn-in",
            ScreenCondition::Minor => "Hairline scratches only",
            ScreenCondition::Cracked => "Cracks, dead pixels or spots",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ScreenCondition::Excellent => "✨",
            ScreenCondition::Minor => "📱",
            ScreenCondition::Cracked => "⚡",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum BodyCondition {
    #[default]
    Excellent,
    Minor,
    Heavy,
}

impl BodyCondition {
    pub const ALL: [BodyCondition; 3] = [
        BodyCondition::Excellent,
        BodyCondition::Minor,
        BodyCondition::Heavy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BodyCondition::Excellent => "Pristine",
            BodyCondition::Minor => "Minor Scuffs",
            BodyCondition::Heavy => "Rough Shape",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BodyCondition::Excellent => "Zero dents or paint chips",
            BodyCondition::Minor => "Light scuffs on sides/corners",
            BodyCondition::Heavy => "Deep dents or broken glass back",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BodyCondition::Excellent => "💎",
            BodyCondition::Minor => "🛠️",
            BodyCondition::Heavy => "💥",
        }
    }
}

/// One of the six hardware self-tests in the diagnostics step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum FunctionalCheck {
    Touch,
    Speaker,
    Camera,
    Buttons,
    Biometrics,
    Charging,
}

impl FunctionalCheck {
    pub const ALL: [FunctionalCheck; 6] = [
        FunctionalCheck::Touch,
        FunctionalCheck::Speaker,
        FunctionalCheck::Camera,
        FunctionalCheck::Buttons,
        FunctionalCheck::Biometrics,
        FunctionalCheck::Charging,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FunctionalCheck::Touch => "Touch Screen",
            FunctionalCheck::Speaker => "Audio Hardware",
            FunctionalCheck::Camera => "All Cameras",
            FunctionalCheck::Buttons => "Side Buttons",
            FunctionalCheck::Biometrics => "FaceID / TouchID",
            FunctionalCheck::Charging => "Charging Input",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FunctionalCheck::Touch => "👆",
            FunctionalCheck::Speaker => "🔊",
            FunctionalCheck::Camera => "📸",
            FunctionalCheck::Buttons => "🔘",
            FunctionalCheck::Biometrics => "🔒",
            FunctionalCheck::Charging => "🔌",
        }
    }
}

/// Pass/fail flags for every [`FunctionalCheck`]; `true` means the check passed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FunctionalChecks {
    pub touch: bool,
    pub speaker: bool,
    pub camera: bool,
    pub buttons: bool,
    pub biometrics: bool,
    pub charging: bool,
}

impl Default for FunctionalChecks {
    fn default() -> Self {
        Self {
            touch: true,
            speaker: true,
            camera: true,
            buttons: true,
            biometrics: true,
            charging: true,
        }
    }
}

impl FunctionalChecks {
    pub fn get(&self, check: FunctionalCheck) -> bool {
        match check {
            FunctionalCheck::Touch => self.touch,
            FunctionalCheck::Speaker => self.speaker,
            FunctionalCheck::Camera => self.camera,
            FunctionalCheck::Buttons => self.buttons,
            FunctionalCheck::Biometrics => self.biometrics,
            FunctionalCheck::Charging => self.charging,
        }
    }

    pub fn set(&mut self, check: FunctionalCheck, passing: bool) {
        let slot = match check {
            FunctionalCheck::Touch => &mut self.touch,
            FunctionalCheck::Speaker => &mut self.speaker,
            FunctionalCheck::Camera => &mut self.camera,
            FunctionalCheck::Buttons => &mut self.buttons,
            FunctionalCheck::Biometrics => &mut self.biometrics,
            FunctionalCheck::Charging => &mut self.charging,
        };
        *slot = passing;
    }

    pub fn toggle(&mut self, check: FunctionalCheck) {
        let current = self.get(check);
        self.set(check, !current);
    }

    /// Number of checks currently failing.
    pub fn failures(&self) -> u32 {
        FunctionalCheck::ALL
            .iter()
            .filter(|check| !self.get(**check))
            .count() as u32
    }
}

/// Everything the seller has told us about their device.
///
/// Fields are public for reading; writes go through the setters so the
/// brand/model pairing, option lists and battery range stay valid.
/// `estimated_price` is only written by the sell flow when a quote is
/// computed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SellRequest {
    pub brand: Option<Brand>,
    pub model: Option<DeviceModel>,
    pub storage: Option<&'static str>,
    pub age: Option<&'static str>,
    pub screen_condition: ScreenCondition,
    pub body_condition: BodyCondition,
    pub functional_checks: FunctionalChecks,
    pub is_powered_on: bool,
    pub battery_health: u8,
    pub network_issues: bool,
    pub water_damage: bool,
    pub estimated_price: i64,
}

impl Default for SellRequest {
    fn default() -> Self {
        Self {
            brand: None,
            model: None,
            storage: None,
            age: None,
            screen_condition: ScreenCondition::default(),
            body_condition: BodyCondition::default(),
            functional_checks: FunctionalChecks::default(),
            is_powered_on: true,
            battery_health: 100,
            network_issues: false,
            water_damage: false,
            estimated_price: 0,
        }
    }
}

impl SellRequest {
    /// Picks a brand. A model from a different brand is dropped.
    pub fn set_brand(&mut self, brand: Brand) {
        if self.model.map(|model| model.brand) != Some(brand) {
            self.model = None;
        }
        self.brand = Some(brand);
    }

    /// Picks a model; refused unless it belongs to the selected brand.
    pub fn set_model(&mut self, model: DeviceModel) -> bool {
        if self.brand != Some(model.brand) {
            return false;
        }
        self.model = Some(model);
        true
    }

    /// Picks a storage label; refused unless it is one of [`STORAGE_OPTIONS`].
    pub fn set_storage(&mut self, storage: &str) -> bool {
        match STORAGE_OPTIONS.iter().copied().find(|option| *option == storage) {
            Some(option) => {
                self.storage = Some(option);
                true
            }
            None => false,
        }
    }

    /// Picks a device age label; refused unless it is one of [`AGE_OPTIONS`].
    pub fn set_age(&mut self, age: &str) -> bool {
        match AGE_OPTIONS.iter().copied().find(|option| *option == age) {
            Some(option) => {
                self.age = Some(option);
                true
            }
            None => false,
        }
    }

    pub fn set_battery_health(&mut self, percent: i64) {
        self.battery_health = percent.clamp(0, 100) as u8;
    }

    pub fn specs_complete(&self) -> bool {
        self.storage.is_some() && self.age.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Grade {
    A,
    B,
    C,
}

impl Grade {
    pub fn letter(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Grade::A => "Like New",
            Grade::B => "Good",
            Grade::C => "Fair",
        }
    }
}

/// A refurbished phone listed in the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct InventoryItem {
    pub id: &'static str,
    pub brand: Brand,
    pub name: &'static str,
    pub storage: &'static str,
    pub price: i64,
    pub original_price: i64,
    pub grade: Grade,
    pub image: &'static str,
}

impl InventoryItem {
    /// Discount against the launch price, in whole percent.
    pub fn discount_pct(&self) -> i64 {
        if self.original_price <= 0 {
            return 0;
        }
        (self.original_price - self.price) * 100 / self.original_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::find_model;

    #[test]
    fn defaults_describe_a_pristine_device() {
        let request = SellRequest::default();
        assert_eq!(request.screen_condition, ScreenCondition::Excellent);
        assert_eq!(request.body_condition, BodyCondition::Excellent);
        assert_eq!(request.functional_checks.failures(), 0);
        assert!(request.is_powered_on);
        assert_eq!(request.battery_health, 100);
        assert!(!request.network_issues);
        assert!(!request.water_damage);
        assert_eq!(request.estimated_price, 0);
    }

    #[test]
    fn switching_brand_drops_foreign_model() {
        let iphone = find_model("2").expect("catalog has iPhone 14");
        let mut request = SellRequest::default();
        request.set_brand(Brand::Apple);
        assert!(request.set_model(iphone));

        request.set_brand(Brand::Apple);
        assert_eq!(request.model, Some(iphone));

        request.set_brand(Brand::Samsung);
        assert_eq!(request.model, None);
        assert_eq!(request.brand, Some(Brand::Samsung));
    }

    #[test]
    fn model_must_match_brand() {
        let pixel = find_model("5").expect("catalog has Pixel 8 Pro");
        let mut request = SellRequest::default();
        assert!(!request.set_model(pixel));

        request.set_brand(Brand::Apple);
        assert!(!request.set_model(pixel));
        assert_eq!(request.model, None);
    }

    #[test]
    fn battery_health_is_clamped() {
        let mut request = SellRequest::default();
        request.set_battery_health(140);
        assert_eq!(request.battery_health, 100);
        request.set_battery_health(-3);
        assert_eq!(request.battery_health, 0);
        request.set_battery_health(79);
        assert_eq!(request.battery_health, 79);
    }

    #[test]
    fn storage_and_age_come_from_option_lists() {
        let mut request = SellRequest::default();
        assert!(!request.set_storage("2TB"));
        assert!(request.set_storage("256GB"));
        assert!(!request.specs_complete());
        assert!(!request.set_age("ancient"));
        assert!(request.set_age("1-2 years"));
        assert!(request.specs_complete());
    }

    #[test]
    fn failures_count_each_failing_check() {
        let mut checks = FunctionalChecks::default();
        checks.toggle(FunctionalCheck::Camera);
        checks.toggle(FunctionalCheck::Charging);
        assert_eq!(checks.failures(), 2);
        checks.toggle(FunctionalCheck::Camera);
        assert_eq!(checks.failures(), 1);
        assert!(!checks.get(FunctionalCheck::Charging));
    }

    #[test]
    fn discount_is_relative_to_launch_price() {
        let item = InventoryItem {
            id: "x",
            brand: Brand::Google,
            name: "Pixel",
            storage: "128GB",
            price: 50,
            original_price: 200,
            grade: Grade::B,
            image: "",
        };
        assert_eq!(item.discount_pct(), 75);
    }
}
