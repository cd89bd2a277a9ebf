use chrono::NaiveDate;

use crate::catalog::{find_ayat, AYAT};
use crate::db::{RecordKey, Records, SaveStatus};
use crate::models::Ayat;
use crate::tracker::daily::daily_item;

pub fn ayat_of_the_day(date: NaiveDate) -> Option<&'static Ayat> {
    daily_item(AYAT, date)
}

pub struct Favorites {
    ids: Vec<u32>,
}

impl Favorites {
    pub fn load(records: &Records<'_>) -> Self {
        Self {
            ids: records.load(RecordKey::FavoriteAyat, Vec::new()).value,
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Flip an ayat in or out of favorites. Returns the new membership,
    /// or `None` if the id is not in the catalog.
    pub fn toggle(&mut self, records: &Records<'_>, id: u32) -> Option<(bool, SaveStatus)> {
        find_ayat(id)?;
        let now_favorite = if self.contains(id) {
            self.ids.retain(|&i| i != id);
            false
        } else {
            self.ids.push(id);
            true
        };
        let status = records.save(RecordKey::FavoriteAyat, &self.ids);
        Some((now_favorite, status))
    }

    /// Favorite ayat in catalog order; stale ids are ignored.
    pub fn ayat(&self) -> Vec<&'static Ayat> {
        AYAT.iter().filter(|a| self.contains(a.id)).collect()
    }
}
