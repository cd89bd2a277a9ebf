use chrono::NaiveDate;

use crate::catalog::find_virtue_action;
use crate::db::{RecordKey, Records, SaveStatus};
use crate::models::{AchievementLevel, VirtueRecord};
use crate::utils::dates::{date_key, days_before};
use crate::utils::format::percent;

/// Length of the trailing window used for the weekly total.
pub const WEEK_WINDOW_DAYS: i64 = 7;

/// Append-only log of good deeds.
pub struct VirtueLedger {
    records: Vec<VirtueRecord>,
}

impl VirtueLedger {
    pub fn load(records: &Records<'_>) -> Self {
        Self {
            records: records.load(RecordKey::VirtueRecords, Vec::new()).value,
        }
    }

    pub fn records(&self) -> &[VirtueRecord] {
        &self.records
    }

    /// Log `action_id` for `today`. Unknown actions are skipped and nothing is saved.
    pub fn add(
        &mut self,
        records: &Records<'_>,
        action_id: &str,
        today: NaiveDate,
    ) -> Option<(VirtueRecord, SaveStatus)> {
        let Some(action) = find_virtue_action(action_id) else {
            log::debug!("Skipping unknown virtue action '{}'", action_id);
            return None;
        };
        let record = VirtueRecord {
            id: uuid::Uuid::new_v4().simple().to_string(),
            action_id: action.id.to_string(),
            date: date_key(today),
            points: action.points,
        };
        self.records.push(record.clone());
        let status = records.save(RecordKey::VirtueRecords, &self.records);
        Some((record, status))
    }

    pub fn daily_total(&self, date: NaiveDate) -> u32 {
        let key = date_key(date);
        self.records
            .iter()
            .filter(|r| r.date == key)
            .fold(0u32, |acc, r| acc.saturating_add(r.points))
    }

    /// Points on or after `start` (inclusive).
    pub fn window_total(&self, start: NaiveDate) -> u32 {
        let key = date_key(start);
        self.records
            .iter()
            .filter(|r| r.date.as_str() >= key.as_str())
            .fold(0u32, |acc, r| acc.saturating_add(r.points))
    }

    /// Trailing window anchored at today minus seven days.
    pub fn weekly_total(&self, today: NaiveDate) -> u32 {
        self.window_total(days_before(today, WEEK_WINDOW_DAYS))
    }

    pub fn lifetime_total(&self) -> u32 {
        self.records
            .iter()
            .fold(0u32, |acc, r| acc.saturating_add(r.points))
    }

    pub fn level(&self) -> AchievementLevel {
        AchievementLevel::from_points(self.lifetime_total())
    }

    pub fn weekly_progress(&self, today: NaiveDate, weekly_goal: u32) -> u32 {
        percent(self.weekly_total(today), weekly_goal)
    }

    /// How many times each catalog action has been logged, in catalog order.
    pub fn action_counts(&self) -> Vec<(&'static str, u32)> {
        crate::catalog::VIRTUE_ACTIONS
            .iter()
            .map(|a| {
                let n = self.records.iter().filter(|r| r.action_id == a.id).count() as u32;
                (a.name, n)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn record(offset: i64, points: u32) -> VirtueRecord {
        VirtueRecord {
            id: format!("r{}", offset),
            action_id: "sadaqah".to_string(),
            date: date_key(days_before(today(), offset)),
            points,
        }
    }

    fn ledger_with(records: Vec<VirtueRecord>) -> VirtueLedger {
        VirtueLedger { records }
    }

    #[test]
    fn weekly_window_excludes_older_records() {
        let ledger = ledger_with(vec![record(8, 10), record(2, 5)]);
        assert_eq!(ledger.weekly_total(today()), 5);
        assert_eq!(ledger.lifetime_total(), 15);
    }

    #[test]
    fn huge_stored_points_saturate_instead_of_overflowing() {
        let ledger = ledger_with(vec![record(0, 4_000_000_000), record(0, 4_000_000_000)]);
        assert_eq!(ledger.lifetime_total(), u32::MAX);
        assert_eq!(ledger.daily_total(today()), u32::MAX);
        assert_eq!(ledger.weekly_total(today()), u32::MAX);
        assert_eq!(ledger.level(), AchievementLevel::Master);
    }

    #[test]
    fn window_start_is_inclusive() {
        let ledger = ledger_with(vec![record(7, 4), record(0, 1)]);
        assert_eq!(ledger.weekly_total(today()), 5);
    }

    #[test]
    fn daily_total_only_counts_that_day() {
        let ledger = ledger_with(vec![record(0, 5), record(0, 12), record(1, 3)]);
        assert_eq!(ledger.daily_total(today()), 17);
        assert_eq!(ledger.daily_total(days_before(today(), 1)), 3);
        assert_eq!(ledger.daily_total(days_before(today(), 2)), 0);
    }

    #[test]
    fn add_copies_points_from_catalog() {
        let store = MemoryStore::default();
        let records = Records::new(&store);
        let mut ledger = VirtueLedger::load(&records);

        let (rec, status) = ledger.add(&records, "tahajjud", today()).unwrap();
        assert_eq!(rec.points, 15);
        assert_eq!(rec.date, "2025-03-10");
        assert!(status.is_saved());

        let reloaded = VirtueLedger::load(&records);
        assert_eq!(reloaded.records(), &[rec]);
    }

    #[test]
    fn unknown_action_is_skipped() {
        let store = MemoryStore::default();
        let records = Records::new(&store);
        let mut ledger = VirtueLedger::load(&records);
        assert!(ledger.add(&records, "napping", today()).is_none());
        assert!(ledger.records().is_empty());
        assert!(VirtueLedger::load(&records).records().is_empty());
    }

    #[test]
    fn level_follows_lifetime_total() {
        let ledger = ledger_with(vec![record(30, 60), record(0, 40)]);
        assert_eq!(ledger.level(), AchievementLevel::Beginner);
        assert_eq!(ledger.weekly_progress(today(), 150), 27);
    }

    #[test]
    fn action_counts_follow_catalog_order() {
        let ledger = ledger_with(vec![record(0, 10), record(1, 10)]);
        let counts = ledger.action_counts();
        assert_eq!(counts[0], ("Daily Prayer", 0));
        assert!(counts.contains(&("Charity", 2)));
    }
}
