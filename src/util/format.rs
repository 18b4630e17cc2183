/// Formats whole rupees the en-IN way: `₹1,25,000`.
///
/// The last three digits form one group, everything above is grouped in
/// pairs (lakh, crore).
pub fn format_inr(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let grouped = group_indian(&digits);
    if amount < 0 {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_amounts_are_not_grouped() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
    }

    #[test]
    fn lakh_and_crore_grouping() {
        assert_eq!(format_inr(1_000), "₹1,000");
        assert_eq!(format_inr(41_200), "₹41,200");
        assert_eq!(format_inr(125_000), "₹1,25,000");
        assert_eq!(format_inr(4_528_000), "₹45,28,000");
        assert_eq!(format_inr(12_345_678), "₹1,23,45,678");
    }

    #[test]
    fn negative_amounts() {
        assert_eq!(format_inr(-32_500), "-₹32,500");
    }
}
