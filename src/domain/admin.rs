//! Figures for the admin overview. These are fixed showcase numbers, not
//! aggregated from the running session.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatValue {
    Currency(i64),
    Count(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatAccent {
    Green,
    Blue,
    Orange,
    Indigo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdminStat {
    pub label: &'static str,
    pub value: StatValue,
    /// Month-over-month change in whole percent.
    pub change_pct: i32,
    pub accent: StatAccent,
}

impl AdminStat {
    pub fn trend(&self) -> Trend {
        if self.change_pct < 0 {
            Trend::Down
        } else {
            Trend::Up
        }
    }

    pub fn change_label(&self) -> String {
        format!("{:+}%", self.change_pct)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Scheduled,
    InReview,
    Completed,
}

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Scheduled => "Scheduled",
            RequestStatus::InReview => "In Review",
            RequestStatus::Completed => "Completed",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SellRequestRecord {
    pub id: &'static str,
    pub device: &'static str,
    pub customer: &'static str,
    pub status: RequestStatus,
    pub price: i64,
    pub date: &'static str,
}

pub const ADMIN_STATS: [AdminStat; 4] = [
    AdminStat {
        label: "Monthly Revenue",
        value: StatValue::Currency(452_800),
        change_pct: 12,
        accent: StatAccent::Green,
    },
    AdminStat {
        label: "Devices Sourced",
        value: StatValue::Count(124),
        change_pct: 8,
        accent: StatAccent::Blue,
    },
    AdminStat {
        label: "Scheduled Pickups",
        value: StatValue::Count(18),
        change_pct: -2,
        accent: StatAccent::Orange,
    },
    AdminStat {
        label: "Avg Payout",
        value: StatValue::Currency(41_200),
        change_pct: 4,
        accent: StatAccent::Indigo,
    },
];

pub const RECENT_REQUESTS: [SellRequestRecord; 4] = [
    SellRequestRecord {
        id: "ORD-7721",
        device: "iPhone 15 Pro Max",
        customer: "Alice Smith",
        status: RequestStatus::Pending,
        price: 94_000,
        date: "2024-05-20",
    },
    SellRequestRecord {
        id: "ORD-7722",
        device: "Galaxy S24 Ultra",
        customer: "Bob Jones",
        status: RequestStatus::Completed,
        price: 82_000,
        date: "2024-05-19",
    },
    SellRequestRecord {
        id: "ORD-7723",
        device: "Pixel 8 Pro",
        customer: "Charlie Brown",
        status: RequestStatus::Scheduled,
        price: 65_000,
        date: "2024-05-21",
    },
    SellRequestRecord {
        id: "ORD-7724",
        device: "Nothing Phone (2)",
        customer: "David Wilson",
        status: RequestStatus::InReview,
        price: 38_000,
        date: "2024-05-18",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_labels_carry_sign() {
        assert_eq!(ADMIN_STATS[0].change_label(), "+12%");
        assert_eq!(ADMIN_STATS[2].change_label(), "-2%");
        assert_eq!(ADMIN_STATS[2].trend(), Trend::Down);
        assert_eq!(ADMIN_STATS[3].trend(), Trend::Up);
    }
}
