//! Display Formatting
//!
//! Small pure helpers shared by the cards.

use chrono::{DateTime, Utc};

/// `1234567` -> `1,234,567`
pub fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Whole-unit money amount with thousands separators
pub fn format_amount(symbol: &str, amount: f64) -> String {
    let whole = amount.max(0.0).round().min(u32::MAX as f64) as u32;
    format!("{}{}", symbol, format_count(whole))
}

/// Coarse relative time: "just now", "5m", "3h", "2d", then "Mar 4"
pub fn time_ago(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - at).num_seconds();
    match secs {
        s if s < 60 => "just now".to_string(),
        s if s < 3_600 => format!("{}m", s / 60),
        s if s < 86_400 => format!("{}h", s / 3_600),
        s if s < 7 * 86_400 => format!("{}d", s / 86_400),
        _ => at.format("%b %-d").to_string(),
    }
}

/// "1 like" / "2 likes"
pub fn plural(n: u32, singular: &str, plural: &str) -> String {
    format!("{} {}", format_count(n), if n == 1 { singular } else { plural })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_amount_rounds() {
        assert_eq!(format_amount("$", 3_250.4), "$3,250");
        assert_eq!(format_amount("₹", 80_000.0), "₹80,000");
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        assert_eq!(time_ago(now - Duration::seconds(10), now), "just now");
        assert_eq!(time_ago(now - Duration::minutes(5), now), "5m");
        assert_eq!(time_ago(now - Duration::hours(3), now), "3h");
        assert_eq!(time_ago(now - Duration::days(2), now), "2d");
        assert_eq!(time_ago(now - Duration::days(16), now), "Mar 4");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "like", "likes"), "1 like");
        assert_eq!(plural(1_200, "like", "likes"), "1,200 likes");
    }
}
