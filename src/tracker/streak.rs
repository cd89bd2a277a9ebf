use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::utils::dates::DATE_KEY_FORMAT;

fn parse_dates(dates: &[String]) -> BTreeSet<NaiveDate> {
    dates
        .iter()
        .filter_map(|s| NaiveDate::parse_from_str(s, DATE_KEY_FORMAT).ok())
        .collect()
}

/// Consecutive completed days ending today, or ending yesterday when today
/// is not (yet) completed. Anything older is a broken streak.
pub fn current_streak(completed: &[String], today: NaiveDate) -> u32 {
    let days = parse_dates(completed);
    let yesterday = today.pred_opt().unwrap_or(today);

    let mut check_date = if days.contains(&today) {
        today
    } else if days.contains(&yesterday) {
        yesterday
    } else {
        return 0;
    };

    let mut current = 0u32;
    while days.contains(&check_date) {
        current += 1;
        match check_date.pred_opt() {
            Some(prev) => check_date = prev,
            None => break,
        }
    }
    current
}

/// Longest run of consecutive days anywhere in the history.
pub fn best_streak(completed: &[String]) -> u32 {
    let sorted: Vec<NaiveDate> = parse_dates(completed).into_iter().collect();
    if sorted.is_empty() {
        return 0;
    }

    let mut best = 0u32;
    let mut current = 1u32;

    for i in 1..sorted.len() {
        let prev = sorted[i - 1];
        let curr = sorted[i];
        if prev.succ_opt() == Some(curr) {
            current += 1;
        } else {
            current = 1;
        }
        best = best.max(current);
    }
    best.max(current)
}
