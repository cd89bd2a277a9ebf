use chrono::NaiveDate;

use crate::catalog::INTENTIONS;
use crate::db::{RecordKey, Records, SaveStatus};
use crate::models::Intention;
use crate::tracker::daily::daily_item;

pub fn intention_of_the_day(date: NaiveDate) -> Option<&'static Intention> {
    daily_item(INTENTIONS, date)
}

/// The user's own intention, if one has been written.
pub fn custom_intention(records: &Records<'_>) -> Option<String> {
    records
        .load_text(RecordKey::CustomIntention)
        .value
        .filter(|s| !s.trim().is_empty())
}

pub fn set_custom_intention(records: &Records<'_>, text: &str) -> SaveStatus {
    records.save_text(RecordKey::CustomIntention, text.trim())
}

pub fn clear_custom_intention(records: &Records<'_>) -> SaveStatus {
    records.remove(RecordKey::CustomIntention)
}
