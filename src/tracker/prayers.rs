use chrono::NaiveDate;

use crate::db::{RecordKey, Records, SaveStatus};
use crate::models::{DailyPrayers, PrayerName, PrayerStatus, PrayerSummary};
use crate::utils::dates::{date_key, days_before};

pub struct PrayerTracker {
    days: Vec<DailyPrayers>,
}

impl PrayerTracker {
    pub fn load(records: &Records<'_>) -> Self {
        Self {
            days: records.load(RecordKey::Prayers, Vec::new()).value,
        }
    }

    /// The record for `date`, materialized as all-missed if none is stored.
    /// Viewing a day does not persist it.
    pub fn day(&self, date: NaiveDate) -> DailyPrayers {
        let key = date_key(date);
        self.days
            .iter()
            .rev()
            .find(|d| d.date == key)
            .cloned()
            .unwrap_or_else(|| DailyPrayers::new(&key))
    }

    /// Advance one prayer around the status ring and persist the whole collection.
    pub fn cycle(
        &mut self,
        records: &Records<'_>,
        date: NaiveDate,
        name: PrayerName,
    ) -> (PrayerStatus, SaveStatus) {
        let mut day = self.day(date);
        let next = day.prayers.get(name).next();
        day.prayers.set(name, next);

        self.days.retain(|d| d.date != day.date);
        self.days.push(day);

        let status = records.save(RecordKey::Prayers, &self.days);
        log::debug!("{} on {} -> {}", name, date_key(date), next.as_str());
        (next, status)
    }

    pub fn summary(&self, date: NaiveDate) -> PrayerSummary {
        let day = self.day(date);
        let mut summary = PrayerSummary::default();
        for (_, status) in day.prayers.iter() {
            summary.add(status);
        }
        summary
    }

    /// Per-day summaries for the `days` days ending at `today`, oldest first.
    pub fn recent(&self, today: NaiveDate, days: i64) -> Vec<(NaiveDate, PrayerSummary)> {
        (0..days)
            .rev()
            .map(|offset| {
                let date = days_before(today, offset);
                (date, self.summary(date))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryStore, RecordStore, UnavailableStore};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn unseen_day_is_all_missed_and_not_stored() {
        let store = MemoryStore::default();
        let tracker = PrayerTracker::load(&Records::new(&store));
        let d = tracker.day(day(1));
        assert_eq!(d.date, "2025-03-01");
        assert!(d.prayers.iter().all(|(_, s)| s == PrayerStatus::Missed));
        assert!(store.get("tadhkir-prayers").unwrap().is_none());
    }

    #[test]
    fn cycling_four_times_returns_to_missed() {
        let store = MemoryStore::default();
        let records = Records::new(&store);
        let mut tracker = PrayerTracker::load(&records);
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(tracker.cycle(&records, day(1), PrayerName::Fajr).0);
        }
        assert_eq!(
            seen,
            vec![
                PrayerStatus::Performed,
                PrayerStatus::Qadha,
                PrayerStatus::Jamaat,
                PrayerStatus::Missed
            ]
        );
    }

    #[test]
    fn cycle_replaces_the_day_record() {
        let store = MemoryStore::default();
        let records = Records::new(&store);
        let mut tracker = PrayerTracker::load(&records);
        tracker.cycle(&records, day(1), PrayerName::Fajr);
        tracker.cycle(&records, day(2), PrayerName::Isha);
        tracker.cycle(&records, day(1), PrayerName::Asr);

        let reloaded = PrayerTracker::load(&records);
        assert_eq!(reloaded.days.len(), 2);
        // replaced record moves to the end
        assert_eq!(reloaded.days[1].date, "2025-03-01");
        let d1 = reloaded.day(day(1));
        assert_eq!(d1.prayers.get(PrayerName::Fajr), PrayerStatus::Performed);
        assert_eq!(d1.prayers.get(PrayerName::Asr), PrayerStatus::Performed);
        assert_eq!(d1.prayers.get(PrayerName::Dhuhr), PrayerStatus::Missed);
        assert_eq!(
            reloaded.day(day(2)).prayers.get(PrayerName::Isha),
            PrayerStatus::Performed
        );
    }

    #[test]
    fn unavailable_storage_still_updates_in_memory() {
        let store = UnavailableStore;
        let records = Records::new(&store);
        let mut tracker = PrayerTracker::load(&records);
        let (next, status) = tracker.cycle(&records, day(1), PrayerName::Maghrib);
        assert_eq!(next, PrayerStatus::Performed);
        assert_eq!(status, SaveStatus::Unavailable);
        assert_eq!(
            tracker.day(day(1)).prayers.get(PrayerName::Maghrib),
            PrayerStatus::Performed
        );
    }

    #[test]
    fn recent_summaries_are_oldest_first() {
        let store = MemoryStore::default();
        let records = Records::new(&store);
        let mut tracker = PrayerTracker::load(&records);
        tracker.cycle(&records, day(7), PrayerName::Fajr);
        tracker.cycle(&records, day(7), PrayerName::Dhuhr);

        let week = tracker.recent(day(7), 7);
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].0, day(1));
        assert_eq!(week[6].0, day(7));
        assert_eq!(week[6].1.on_time(), 2);
        assert_eq!(week[6].1.missed, 3);
        assert_eq!(week[0].1.missed, 5);
    }
}
