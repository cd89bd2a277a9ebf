use anyhow::{anyhow, Result};
use chrono::{Datelike, Duration, Local, NaiveDate};

/// Format used for every calendar-day key in storage.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Today on the local calendar. All "today" comparisons go through here.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

pub fn parse_date_key(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_KEY_FORMAT)
        .map_err(|e| anyhow!("Bad date '{}' (expected YYYY-MM-DD): {}", s, e))
}

/// Parse an optional `--date` argument, falling back to today.
pub fn date_or_today(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(s) => parse_date_key(s),
        None => Ok(today()),
    }
}

pub fn days_before(date: NaiveDate, days: i64) -> NaiveDate {
    date - Duration::days(days)
}

/// Day of the year with January 1 as day 1.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_key_is_zero_padded() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(date_key(d), "2025-03-07");
        assert_eq!(parse_date_key("2025-03-07").unwrap(), d);
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!(parse_date_key("07/03/2025").is_err());
        assert!(parse_date_key("").is_err());
    }

    #[test]
    fn january_first_is_day_one() {
        assert_eq!(day_of_year(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()), 1);
        assert_eq!(day_of_year(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()), 366);
        assert_eq!(day_of_year(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()), 365);
    }

    #[test]
    fn days_before_crosses_year_boundary() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        assert_eq!(date_key(days_before(d, 7)), "2024-12-27");
    }
}
