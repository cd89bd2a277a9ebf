use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use hijri_date::HijriDate;

/// Islamic month names in English (index 0 = Muharram = month 1)
const HIJRI_MONTH_NAMES: &[&str] = &[
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

fn hijri_month_name(month: usize) -> &'static str {
    if (1..=12).contains(&month) {
        HIJRI_MONTH_NAMES[month - 1]
    } else {
        "Unknown"
    }
}

pub struct HijriInfo {
    pub day: usize,
    pub month: usize,
    pub year: usize,
    pub month_name: String,
}

impl HijriInfo {
    pub fn formatted(&self) -> String {
        format!("{} {} {} AH", self.day, self.month_name, self.year)
    }
}

/// Convert a Gregorian day to Hijri. `offset_days` lets users adjust for
/// local moon sighting (e.g. -1 if your country is one day behind Saudi Arabia).
pub fn to_hijri(date: NaiveDate, offset_days: i32) -> Result<HijriInfo> {
    let adjusted = date + Duration::days(offset_days as i64);
    let hd = HijriDate::from_gr(
        adjusted.year() as usize,
        adjusted.month() as usize,
        adjusted.day() as usize,
    )
    .map_err(|e| anyhow::anyhow!("Hijri conversion error: {}", e))?;

    let month = hd.month();
    Ok(HijriInfo {
        day: hd.day(),
        month,
        year: hd.year(),
        month_name: hijri_month_name(month).to_string(),
    })
}

/// Hijri label for display; empty when the date is outside the supported range.
pub fn hijri_string(date: NaiveDate, offset_days: i32) -> String {
    match to_hijri(date, offset_days) {
        Ok(info) => info.formatted(),
        Err(e) => {
            log::debug!("No hijri date for {}: {}", date, e);
            String::new()
        }
    }
}
