use chrono::NaiveDate;

use crate::catalog::ISLAMIC_EVENTS;
use crate::models::IslamicEvent;
use crate::utils::dates::date_key;

pub fn event_on(date: NaiveDate) -> Option<&'static IslamicEvent> {
    let key = date_key(date);
    ISLAMIC_EVENTS.iter().find(|e| e.gregorian_date == key)
}

/// Events on or after `from`, soonest first.
pub fn upcoming(from: NaiveDate, limit: usize) -> Vec<&'static IslamicEvent> {
    let key = date_key(from);
    let mut events: Vec<_> = ISLAMIC_EVENTS
        .iter()
        .filter(|e| e.gregorian_date >= key.as_str())
        .collect();
    events.sort_by_key(|e| e.gregorian_date);
    events.truncate(limit);
    events
}
