//! Time arithmetic: HH:MM pairs to elapsed hours, and signed hour display.

use chrono::NaiveTime;

/// Elapsed time between two HH:MM times on the same nominal day,
/// in fractional hours.
///
/// Returns 0 when either side is missing or when `end <= start` —
/// overnight spans are deliberately unsupported, every entry falls
/// within a single calendar day. No rounding happens here; rounding is
/// a display concern only.
pub fn elapsed_hours(start: Option<NaiveTime>, end: Option<NaiveTime>) -> f64 {
    let (Some(start), Some(end)) = (start, end) else {
        return 0.0;
    };
    if end <= start {
        return 0.0;
    }
    (end - start).num_minutes() as f64 / 60.0
}

/// Format an hour value as a signed, two-decimal string.
///
/// Rounds half-away-from-zero at two decimals before the sign is chosen,
/// so exactly 0 renders as "+0.00".
pub fn format_hours(h: f64) -> String {
    // f64::round ties away from zero, which is exactly the rule here
    let rounded = (h * 100.0).round() / 100.0;
    let sign = if rounded < 0.0 { '-' } else { '+' };
    format!("{}{:.2}", sign, rounded.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> Option<NaiveTime> {
        Some(NaiveTime::parse_from_str(s, "%H:%M").unwrap())
    }

    #[test]
    fn elapsed_regular_span() {
        assert_eq!(elapsed_hours(t("09:00"), t("17:30")), 8.5);
        assert_eq!(elapsed_hours(t("22:00"), t("23:00")), 1.0);
        assert_eq!(elapsed_hours(t("08:00"), t("08:15")), 0.25);
    }

    #[test]
    fn elapsed_zero_for_missing_side() {
        assert_eq!(elapsed_hours(None, t("17:00")), 0.0);
        assert_eq!(elapsed_hours(t("09:00"), None), 0.0);
        assert_eq!(elapsed_hours(None, None), 0.0);
    }

    #[test]
    fn elapsed_zero_for_non_positive_span() {
        assert_eq!(elapsed_hours(t("17:00"), t("17:00")), 0.0);
        // same-day arithmetic: an "overnight" pair is just end <= start
        assert_eq!(elapsed_hours(t("22:00"), t("02:00")), 0.0);
    }

    #[test]
    fn format_zero_is_positive() {
        assert_eq!(format_hours(0.0), "+0.00");
        assert_eq!(format_hours(-0.0), "+0.00");
    }

    #[test]
    fn format_signed_two_decimals() {
        assert_eq!(format_hours(0.5), "+0.50");
        assert_eq!(format_hours(-1.5), "-1.50");
        assert_eq!(format_hours(8.0), "+8.00");
    }

    #[test]
    fn format_rounds_half_away_from_zero() {
        assert_eq!(format_hours(0.005), "+0.01");
        assert_eq!(format_hours(-0.005), "-0.01");
        // rounds to zero -> positive by convention
        assert_eq!(format_hours(-0.001), "+0.00");
    }
}
