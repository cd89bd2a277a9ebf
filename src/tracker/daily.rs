//! Date-driven rotation through fixed catalogs and the once-a-day "new" marker.

use chrono::NaiveDate;
use rand::Rng;

use crate::db::{LoadStatus, RecordKey, Records, SaveStatus};
use crate::utils::dates::{date_key, day_of_year};

/// `day_of_year(date) mod len`, or `None` for an empty catalog.
pub fn rotation_index(date: NaiveDate, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(day_of_year(date) as usize % len)
}

/// The item a catalog shows on `date`.
pub fn daily_item<T>(items: &[T], date: NaiveDate) -> Option<&T> {
    rotation_index(date, items.len()).map(|i| &items[i])
}

/// Uniformly pick an index other than `current` from `0..len`.
/// With fewer than two items there is nothing else to pick.
pub fn pick_different<R: Rng + ?Sized>(current: usize, len: usize, rng: &mut R) -> usize {
    if len <= 1 {
        return current.min(len.saturating_sub(1));
    }
    let current = current.min(len - 1);
    let offset = rng.gen_range(1..len);
    (current + offset) % len
}

/// True when today's content has not been marked as seen yet.
/// Always false when storage is unavailable.
pub fn should_show_new_daily(records: &Records<'_>, today: NaiveDate) -> bool {
    let loaded = records.load_text(RecordKey::LastSeen);
    if loaded.status == LoadStatus::Unavailable {
        return false;
    }
    loaded.value.as_deref().map(str::trim) != Some(date_key(today).as_str())
}

pub fn set_last_seen_date(records: &Records<'_>, today: NaiveDate) -> SaveStatus {
    records.save_text(RecordKey::LastSeen, &date_key(today))
}

/// Check the marker and, if today is new, record it. Returns whether it was new.
pub fn mark_seen_today(records: &Records<'_>, today: NaiveDate) -> bool {
    let fresh = should_show_new_daily(records, today);
    if fresh {
        set_last_seen_date(records, today);
    }
    fresh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryStore, UnavailableStore};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rotation_is_day_of_year_mod_len() {
        // 2025-03-01 is day 60
        assert_eq!(rotation_index(day(2025, 3, 1), 5), Some(0));
        assert_eq!(rotation_index(day(2025, 3, 1), 7), Some(4));
        assert_eq!(rotation_index(day(2025, 1, 1), 3), Some(1));
        assert_eq!(rotation_index(day(2025, 1, 1), 0), None);
    }

    #[test]
    fn rotation_is_stable_within_a_day() {
        let d = day(2024, 8, 19);
        for len in 1..20 {
            let first = rotation_index(d, len);
            assert_eq!(first, rotation_index(d, len));
            assert_eq!(first, Some(day_of_year(d) as usize % len));
        }
    }

    #[test]
    fn daily_item_picks_from_catalog() {
        let items = ["a", "b", "c"];
        assert_eq!(daily_item(&items, day(2025, 1, 1)), Some(&"b"));
        let empty: [&str; 0] = [];
        assert_eq!(daily_item(&empty, day(2025, 1, 1)), None);
    }

    #[test]
    fn pick_different_never_returns_current() {
        let mut rng = StdRng::seed_from_u64(7);
        for current in 0..5 {
            for _ in 0..50 {
                let next = pick_different(current, 5, &mut rng);
                assert_ne!(next, current);
                assert!(next < 5);
            }
        }
    }

    #[test]
    fn pick_different_reaches_every_other_item() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[pick_different(0, 4, &mut rng)] = true;
        }
        assert_eq!(seen, [false, true, true, true]);
    }

    #[test]
    fn pick_different_with_single_item() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_different(0, 1, &mut rng), 0);
        assert_eq!(pick_different(0, 0, &mut rng), 0);
    }

    #[test]
    fn new_daily_flag_flips_once_per_day() {
        let store = MemoryStore::default();
        let records = Records::new(&store);
        let today = day(2025, 3, 1);

        assert!(should_show_new_daily(&records, today));
        assert!(should_show_new_daily(&records, today));
        set_last_seen_date(&records, today);
        assert!(!should_show_new_daily(&records, today));

        let tomorrow = day(2025, 3, 2);
        assert!(mark_seen_today(&records, tomorrow));
        assert!(!mark_seen_today(&records, tomorrow));
    }

    #[test]
    fn new_daily_flag_is_off_without_storage() {
        let store = UnavailableStore;
        let records = Records::new(&store);
        assert!(!should_show_new_daily(&records, day(2025, 3, 1)));
    }
}
