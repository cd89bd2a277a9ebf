use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The five daily prayers. Serialized with the capitalized names used as
/// keys in stored day records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PrayerName {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    pub fn all() -> [PrayerName; 5] {
        [
            PrayerName::Fajr,
            PrayerName::Dhuhr,
            PrayerName::Asr,
            PrayerName::Maghrib,
            PrayerName::Isha,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }
}

impl std::fmt::Display for PrayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fajr" => Ok(PrayerName::Fajr),
            "dhuhr" | "zuhr" | "dhuhur" => Ok(PrayerName::Dhuhr),
            "asr" => Ok(PrayerName::Asr),
            "maghrib" => Ok(PrayerName::Maghrib),
            "isha" => Ok(PrayerName::Isha),
            _ => Err(anyhow::anyhow!("Unknown prayer: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerStatus {
    Performed,
    Qadha,
    #[default]
    Missed,
    Jamaat,
}

impl PrayerStatus {
    /// Single forward ring: missed → performed → qadha → jamaat → missed.
    pub fn next(self) -> PrayerStatus {
        match self {
            PrayerStatus::Missed => PrayerStatus::Performed,
            PrayerStatus::Performed => PrayerStatus::Qadha,
            PrayerStatus::Qadha => PrayerStatus::Jamaat,
            PrayerStatus::Jamaat => PrayerStatus::Missed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerStatus::Performed => "performed",
            PrayerStatus::Qadha => "qadha",
            PrayerStatus::Missed => "missed",
            PrayerStatus::Jamaat => "jamaat",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrayerStatus::Performed => "prayed",
            PrayerStatus::Qadha => "qadha",
            PrayerStatus::Missed => "missed",
            PrayerStatus::Jamaat => "in jamaat",
        }
    }
}

impl FromStr for PrayerStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "performed" => Ok(PrayerStatus::Performed),
            "qadha" => Ok(PrayerStatus::Qadha),
            "missed" => Ok(PrayerStatus::Missed),
            "jamaat" => Ok(PrayerStatus::Jamaat),
            _ => Err(anyhow::anyhow!("Unknown prayer status: {}", s)),
        }
    }
}

/// One status per prayer. Fields missing from stored JSON fall back to `missed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerStatuses {
    #[serde(rename = "Fajr", default)]
    pub fajr: PrayerStatus,
    #[serde(rename = "Dhuhr", default)]
    pub dhuhr: PrayerStatus,
    #[serde(rename = "Asr", default)]
    pub asr: PrayerStatus,
    #[serde(rename = "Maghrib", default)]
    pub maghrib: PrayerStatus,
    #[serde(rename = "Isha", default)]
    pub isha: PrayerStatus,
}

impl PrayerStatuses {
    pub fn get(&self, name: PrayerName) -> PrayerStatus {
        match name {
            PrayerName::Fajr => self.fajr,
            PrayerName::Dhuhr => self.dhuhr,
            PrayerName::Asr => self.asr,
            PrayerName::Maghrib => self.maghrib,
            PrayerName::Isha => self.isha,
        }
    }

    pub fn set(&mut self, name: PrayerName, status: PrayerStatus) {
        let slot = match name {
            PrayerName::Fajr => &mut self.fajr,
            PrayerName::Dhuhr => &mut self.dhuhr,
            PrayerName::Asr => &mut self.asr,
            PrayerName::Maghrib => &mut self.maghrib,
            PrayerName::Isha => &mut self.isha,
        };
        *slot = status;
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrayerName, PrayerStatus)> + '_ {
        PrayerName::all().into_iter().map(|n| (n, self.get(n)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPrayers {
    pub date: String,
    pub prayers: PrayerStatuses,
}

impl DailyPrayers {
    /// A fresh all-missed day.
    pub fn new(date: &str) -> Self {
        Self {
            date: date.to_string(),
            prayers: PrayerStatuses::default(),
        }
    }
}

/// Count of each status across one or more days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrayerSummary {
    pub performed: u32,
    pub jamaat: u32,
    pub qadha: u32,
    pub missed: u32,
}

impl PrayerSummary {
    pub fn add(&mut self, status: PrayerStatus) {
        match status {
            PrayerStatus::Performed => self.performed += 1,
            PrayerStatus::Jamaat => self.jamaat += 1,
            PrayerStatus::Qadha => self.qadha += 1,
            PrayerStatus::Missed => self.missed += 1,
        }
    }

    /// Prayed on time, alone or in congregation.
    pub fn on_time(&self) -> u32 {
        self.performed + self.jamaat
    }

    pub fn total(&self) -> u32 {
        self.performed + self.jamaat + self.qadha + self.missed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_cycles_close_the_ring() {
        let mut s = PrayerStatus::default();
        assert_eq!(s, PrayerStatus::Missed);
        let seen: Vec<_> = (0..4)
            .map(|_| {
                s = s.next();
                s
            })
            .collect();
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
    fn day_record_uses_stored_json_shape() {
        let mut day = DailyPrayers::new("2025-03-01");
        day.prayers.set(PrayerName::Asr, PrayerStatus::Jamaat);
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2025-03-01","prayers":{"Fajr":"missed","Dhuhr":"missed","Asr":"jamaat","Maghrib":"missed","Isha":"missed"}}"#
        );
    }

    #[test]
    fn missing_prayers_default_to_missed() {
        let day: DailyPrayers =
            serde_json::from_str(r#"{"date":"2025-03-01","prayers":{"Fajr":"performed"}}"#)
                .unwrap();
        assert_eq!(day.prayers.get(PrayerName::Fajr), PrayerStatus::Performed);
        assert_eq!(day.prayers.get(PrayerName::Isha), PrayerStatus::Missed);
    }

    #[test]
    fn prayer_names_accept_aliases() {
        assert_eq!("zuhr".parse::<PrayerName>().unwrap(), PrayerName::Dhuhr);
        assert_eq!("ISHA".parse::<PrayerName>().unwrap(), PrayerName::Isha);
        assert!("tahajjud".parse::<PrayerName>().is_err());
    }

    #[test]
    fn summary_counts_on_time() {
        let mut s = PrayerSummary::default();
        s.add(PrayerStatus::Performed);
        s.add(PrayerStatus::Jamaat);
        s.add(PrayerStatus::Qadha);
        assert_eq!(s.on_time(), 2);
        assert_eq!(s.total(), 3);
    }
}
