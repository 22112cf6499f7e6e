//! Calendar helpers for the fixed-width date key.

use chrono::NaiveDate;

/// Strict YYYYMMDD to date. Wrong length, stray characters or an
/// impossible calendar day all degrade to None; the caller treats the
/// game as undated.
pub fn parse_date_sort(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = raw[0..4].parse().ok()?;
    let month: u32 = raw[4..6].parse().ok()?;
    let day: u32 = raw[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Whole days from `earlier` to `later`, negative when reversed.
pub fn day_gap(earlier: NaiveDate, later: NaiveDate) -> i64 {
    later.signed_duration_since(earlier).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parses_strict_eight_digit_keys() {
        assert_eq!(parse_date_sort("20250104"), Some(d(2025, 1, 4)));
        assert_eq!(parse_date_sort("20240229"), Some(d(2024, 2, 29)));
    }

    #[test]
    fn rejects_malformed_keys() {
        assert_eq!(parse_date_sort(""), None);
        assert_eq!(parse_date_sort("2025010"), None);
        assert_eq!(parse_date_sort("202501041"), None);
        assert_eq!(parse_date_sort("2025-1-4"), None);
        assert_eq!(parse_date_sort("20251301"), None);
        assert_eq!(parse_date_sort("20250132"), None);
        assert_eq!(parse_date_sort("20230229"), None);
    }

    #[test]
    fn gaps_cross_month_and_year_boundaries() {
        assert_eq!(day_gap(d(2025, 1, 31), d(2025, 2, 1)), 1);
        assert_eq!(day_gap(d(2024, 12, 31), d(2025, 1, 1)), 1);
        assert_eq!(day_gap(d(2025, 1, 4), d(2025, 1, 4)), 0);
        assert_eq!(day_gap(d(2025, 1, 4), d(2025, 1, 2)), -2);
    }
}
