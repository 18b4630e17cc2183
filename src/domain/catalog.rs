//! Static reference data: supported brands, tradeable models, option lists
//! and the refurbished inventory.

use super::entities::{Brand, DeviceModel, Grade, InventoryItem};

pub const BRANDS: [Brand; 6] = [
    Brand::Apple,
    Brand::Samsung,
    Brand::Google,
    Brand::OnePlus,
    Brand::Xiaomi,
    Brand::Nothing,
];

pub const MODELS: &[DeviceModel] = &[
    DeviceModel {
        id: "1",
        brand: Brand::Apple,
        name: "iPhone 15 Pro Max",
        base_price: 125_000,
        image: "https://images.unsplash.com/photo-1696446701796-da61225697cc?auto=format&fit=crop&q=80&w=400",
    },
    DeviceModel {
        id: "2",
        brand: Brand::Apple,
        name: "iPhone 14",
        base_price: 65_000,
        image: "https://images.unsplash.com/photo-1663499482523-1c0c1bae4ce1?auto=format&fit=crop&q=80&w=400",
    },
    DeviceModel {
        id: "3",
        brand: Brand::Samsung,
        name: "Galaxy S24 Ultra",
        base_price: 115_000,
        image: "https://images.unsplash.com/photo-1706114131602-536966838a6a?auto=format&fit=crop&q=80&w=400",
    },
    DeviceModel {
        id: "4",
        brand: Brand::Samsung,
        name: "Galaxy Z Fold 5",
        base_price: 135_000,
        image: "https://images.unsplash.com/photo-1610945265064-0e34e5519bbf?auto=format&fit=crop&q=80&w=400",
    },
    DeviceModel {
        id: "5",
        brand: Brand::Google,
        name: "Pixel 8 Pro",
        base_price: 95_000,
        image: "https://images.unsplash.com/photo-1697528389657-3604f3d1b333?auto=format&fit=crop&q=80&w=400",
    },
    DeviceModel {
        id: "6",
        brand: Brand::OnePlus,
        name: "OnePlus 12",
        base_price: 65_000,
        image: "https://images.unsplash.com/photo-1707212000000-d8f99e32a630?auto=format&fit=crop&q=80&w=400",
    },
    DeviceModel {
        id: "7",
        brand: Brand::Apple,
        name: "iPhone 13 Mini",
        base_price: 42_000,
        image: "https://images.unsplash.com/photo-1634305881475-4d74261448b1?auto=format&fit=crop&q=80&w=400",
    },
    DeviceModel {
        id: "8",
        brand: Brand::Nothing,
        name: "Phone (2)",
        base_price: 45_000,
        image: "https://images.unsplash.com/photo-1689088659102-14cc4500e57c?auto=format&fit=crop&q=80&w=400",
    },
];

pub const STORAGE_OPTIONS: [&str; 5] = ["64GB", "128GB", "256GB", "512GB", "1TB"];

pub const AGE_OPTIONS: [&str; 4] = [
    "Less than 6 months",
    "6-11 months",
    "1-2 years",
    "Above 2 years",
];

pub const INVENTORY: &[InventoryItem] = &[
    InventoryItem {
        id: "i1",
        brand: Brand::Apple,
        name: "iPhone 14 Pro",
        storage: "256GB",
        price: 84_900,
        original_price: 119_900,
        grade: Grade::A,
        image: "https://images.unsplash.com/photo-1663499482523-1c0c1bae4ce1?auto=format&fit=crop&q=80&w=400",
    },
    InventoryItem {
        id: "i2",
        brand: Brand::Samsung,
        name: "Galaxy S23",
        storage: "128GB",
        price: 49_900,
        original_price: 79_900,
        grade: Grade::B,
        image: "https://images.unsplash.com/photo-1678911820864-e2c567c655d7?auto=format&fit=crop&q=80&w=400",
    },
    InventoryItem {
        id: "i3",
        brand: Brand::Google,
        name: "Pixel 7",
        storage: "128GB",
        price: 34_900,
        original_price: 59_900,
        grade: Grade::C,
        image: "https://images.unsplash.com/photo-1616348436168-de43ad0db179?auto=format&fit=crop&q=80&w=400",
    },
    InventoryItem {
        id: "i4",
        brand: Brand::Apple,
        name: "iPhone 12",
        storage: "64GB",
        price: 32_900,
        original_price: 79_900,
        grade: Grade::A,
        image: "https://images.unsplash.com/photo-1616348436168-de43ad0db179?auto=format&fit=crop&q=80&w=400",
    },
];

pub fn models_for_brand(brand: Brand) -> impl Iterator<Item = &'static DeviceModel> {
    MODELS.iter().filter(move |model| model.brand == brand)
}

#[cfg(test)]
pub fn find_model(id: &str) -> Option<DeviceModel> {
    MODELS.iter().find(|model| model.id == id).copied()
}

#[cfg(test)]
pub fn find_inventory_item(id: &str) -> Option<InventoryItem> {
    INVENTORY.iter().find(|item| item.id == id).copied()
}

/// Store listings for the brand filter; `None` means "All".
pub fn inventory_for(filter: Option<Brand>) -> Vec<InventoryItem> {
    INVENTORY
        .iter()
        .filter(|item| filter.map_or(true, |brand| item.brand == brand))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_model_belongs_to_a_listed_brand() {
        for model in MODELS {
            assert!(BRANDS.contains(&model.brand), "{} has unknown brand", model.name);
            assert!(model.base_price > 0);
        }
    }

    #[test]
    fn brand_filter_only_returns_that_brand() {
        let apple: Vec<_> = models_for_brand(Brand::Apple).map(|m| m.name).collect();
        assert_eq!(apple, vec!["iPhone 15 Pro Max", "iPhone 14", "iPhone 13 Mini"]);
        assert_eq!(models_for_brand(Brand::Xiaomi).count(), 0);
    }

    #[test]
    fn inventory_filter() {
        assert_eq!(inventory_for(None).len(), INVENTORY.len());
        let apple = inventory_for(Some(Brand::Apple));
        assert_eq!(apple.len(), 2);
        assert!(apple.iter().all(|item| item.brand == Brand::Apple));
    }

    #[test]
    fn lookups_by_id() {
        assert_eq!(find_model("3").map(|m| m.name), Some("Galaxy S24 Ultra"));
        assert!(find_model("99").is_none());
        assert_eq!(find_inventory_item("i2").map(|i| i.grade), Some(Grade::B));
    }
}
