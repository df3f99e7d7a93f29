use chrono::{DateTime, Utc};

use crate::api::ListingType;

/// Whole rupees with Indian digit grouping: `₹45,00,000`.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return "₹0".to_string();
    }
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}₹{}", group_indian(&digits))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// Rentals and leases are quoted per month.
pub fn format_price(amount: f64, kind: ListingType) -> String {
    match kind {
        ListingType::Sale => format_inr(amount),
        ListingType::Rent | ListingType::Lease => format!("{}/month", format_inr(amount)),
    }
}

pub fn format_area(sqft: u32) -> Option<String> {
    (sqft > 0).then(|| format!("{} sq ft", group_indian(&sqft.to_string())))
}

pub fn format_date(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%d %b %Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn rupees_use_lakh_and_crore_grouping() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(1000.0), "₹1,000");
        assert_eq!(format_inr(100000.0), "₹1,00,000");
        assert_eq!(format_inr(4_500_000.4), "₹45,00,000");
        assert_eq!(format_inr(123_456_789.0), "₹12,34,56,789");
        assert_eq!(format_inr(-25000.0), "-₹25,000");
        assert_eq!(format_inr(f64::NAN), "₹0");
    }

    #[test]
    fn rentals_are_quoted_per_month() {
        assert_eq!(format_price(25000.0, ListingType::Rent), "₹25,000/month");
        assert_eq!(format_price(25000.0, ListingType::Sale), "₹25,000");
    }

    #[test]
    fn area_and_dates_render_for_cards() {
        assert_eq!(format_area(0), None);
        assert_eq!(format_area(1250).as_deref(), Some("1,250 sq ft"));
        let dt = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
        assert_eq!(format_date(Some(&dt)), "01 Mar 2025");
        assert_eq!(format_date(None), "");
    }
}
