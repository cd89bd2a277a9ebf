use crate::config::TasbeehConfig;
use crate::db::{RecordKey, Records, SaveStatus};
use crate::models::{Dhikr, TasbeehCounts};
use crate::utils::format::percent;

pub struct TasbeehCounter {
    counts: TasbeehCounts,
    targets: TasbeehConfig,
}

impl TasbeehCounter {
    pub fn load(records: &Records<'_>, targets: &TasbeehConfig) -> Self {
        Self {
            counts: records
                .load(RecordKey::Tasbeeh, TasbeehCounts::default())
                .value,
            targets: targets.clone(),
        }
    }

    pub fn counts(&self) -> TasbeehCounts {
        self.counts
    }

    pub fn count(&self, dhikr: Dhikr) -> u32 {
        self.counts.get(dhikr)
    }

    pub fn target(&self, dhikr: Dhikr) -> u32 {
        self.targets.target(dhikr)
    }

    pub fn progress(&self, dhikr: Dhikr) -> u32 {
        percent(self.count(dhikr), self.target(dhikr))
    }

    pub fn is_complete(&self, dhikr: Dhikr) -> bool {
        self.count(dhikr) >= self.target(dhikr)
    }

    pub fn increment(&mut self, records: &Records<'_>, dhikr: Dhikr, by: u32) -> (u32, SaveStatus) {
        let slot = self.counts.slot_mut(dhikr);
        *slot = slot.saturating_add(by);
        let count = *slot;
        (count, self.save(records))
    }

    pub fn reset(&mut self, records: &Records<'_>, dhikr: Dhikr) -> SaveStatus {
        *self.counts.slot_mut(dhikr) = 0;
        self.save(records)
    }

    pub fn reset_all(&mut self, records: &Records<'_>) -> SaveStatus {
        self.counts = TasbeehCounts::default();
        self.save(records)
    }

    fn save(&self, records: &Records<'_>) -> SaveStatus {
        records.save(RecordKey::Tasbeeh, &self.counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryStore, RecordStore};

    #[test]
    fn counters_are_independent() {
        let store = MemoryStore::default();
        let records = Records::new(&store);
        let mut counter = TasbeehCounter::load(&records, &TasbeehConfig::default());

        counter.increment(&records, Dhikr::SubhanAllah, 1);
        counter.increment(&records, Dhikr::SubhanAllah, 1);
        counter.increment(&records, Dhikr::AllahuAkbar, 5);
        assert_eq!(counter.count(Dhikr::SubhanAllah), 2);
        assert_eq!(counter.count(Dhikr::Alhamdulillah), 0);

        counter.reset(&records, Dhikr::SubhanAllah);
        assert_eq!(counter.count(Dhikr::SubhanAllah), 0);
        assert_eq!(counter.count(Dhikr::AllahuAkbar), 5);
        assert_eq!(
            store.get("tadhkir-tasbeeh").unwrap().as_deref(),
            Some(r#"{"subhanAllah":0,"alhamdulillah":0,"allahuAkbar":5}"#)
        );
    }

    #[test]
    fn default_targets_and_completion() {
        let store = MemoryStore::default();
        let records = Records::new(&store);
        let mut counter = TasbeehCounter::load(&records, &TasbeehConfig::default());
        assert_eq!(counter.target(Dhikr::SubhanAllah), 33);
        assert_eq!(counter.target(Dhikr::AllahuAkbar), 34);

        counter.increment(&records, Dhikr::AllahuAkbar, 33);
        assert!(!counter.is_complete(Dhikr::AllahuAkbar));
        counter.increment(&records, Dhikr::AllahuAkbar, 10);
        assert!(counter.is_complete(Dhikr::AllahuAkbar));
        assert_eq!(counter.progress(Dhikr::AllahuAkbar), 100);
    }

    #[test]
    fn reset_all_persists() {
        let store = MemoryStore::default();
        let records = Records::new(&store);
        let mut counter = TasbeehCounter::load(&records, &TasbeehConfig::default());
        counter.increment(&records, Dhikr::Alhamdulillah, 7);
        counter.reset_all(&records);
        let reloaded = TasbeehCounter::load(&records, &TasbeehConfig::default());
        assert_eq!(reloaded.counts(), TasbeehCounts::default());
    }
}
