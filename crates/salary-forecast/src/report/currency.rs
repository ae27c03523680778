/// Format whole rupees with Indian digit grouping: the last three digits,
/// then groups of two (`₹12,34,567`).
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("₹{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::format_inr;

    #[test]
    fn small_amounts_are_ungrouped() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
    }

    #[test]
    fn groups_lakhs_and_crores() {
        assert_eq!(format_inr(1_000), "₹1,000");
        assert_eq!(format_inr(100_000), "₹1,00,000");
        assert_eq!(format_inr(897_000), "₹8,97,000");
        assert_eq!(format_inr(1_196_000), "₹11,96,000");
        assert_eq!(format_inr(12_345_678), "₹1,23,45,678");
    }
}
