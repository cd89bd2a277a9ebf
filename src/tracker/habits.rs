use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::db::{RecordKey, Records, SaveStatus};
use crate::models::Habit;
use crate::tracker::streak::current_streak;
use crate::tracker::TrackerError;
use crate::utils::dates::date_key;

pub struct HabitTracker {
    habits: Vec<Habit>,
}

impl HabitTracker {
    /// Load all habits and bring their streaks up to date for `today`,
    /// so a habit left untouched for days shows a broken streak.
    pub fn load(records: &Records<'_>, today: NaiveDate) -> Self {
        let mut habits: Vec<Habit> = records.load(RecordKey::Habits, Vec::new()).value;
        for habit in &mut habits {
            habit.streak = current_streak(&habit.completed_dates, today);
        }
        Self { habits }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Exact id, or an unambiguous id prefix.
    pub fn find(&self, id: &str) -> Result<&Habit, TrackerError> {
        self.position(id).map(|i| &self.habits[i])
    }

    pub fn add(
        &mut self,
        records: &Records<'_>,
        name: &str,
        created_at: DateTime<Utc>,
    ) -> Result<(&Habit, SaveStatus), TrackerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::EmptyName);
        }
        self.habits.push(Habit {
            id: uuid::Uuid::new_v4().simple().to_string(),
            name: name.to_string(),
            icon: None,
            color: None,
            streak: 0,
            completed_dates: Vec::new(),
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        });
        let status = self.save(records);
        let habit = &self.habits[self.habits.len() - 1];
        log::info!("Added habit '{}'", habit.name);
        Ok((habit, status))
    }

    /// Mark today done, or undo it if already done. The streak is recomputed
    /// from the full completion history afterwards.
    pub fn toggle_today(
        &mut self,
        records: &Records<'_>,
        id: &str,
        today: NaiveDate,
    ) -> Result<(&Habit, SaveStatus), TrackerError> {
        let idx = self.position(id)?;
        let key = date_key(today);
        {
            let habit = &mut self.habits[idx];
            if habit.is_completed_on(&key) {
                habit.completed_dates.retain(|d| d != &key);
            } else {
                habit.completed_dates.push(key);
            }
            habit.streak = current_streak(&habit.completed_dates, today);
        }
        let status = self.save(records);
        Ok((&self.habits[idx], status))
    }

    pub fn delete(
        &mut self,
        records: &Records<'_>,
        id: &str,
    ) -> Result<(Habit, SaveStatus), TrackerError> {
        let idx = self.position(id)?;
        let removed = self.habits.remove(idx);
        let status = self.save(records);
        log::info!("Deleted habit '{}'", removed.name);
        Ok((removed, status))
    }

    fn position(&self, id: &str) -> Result<usize, TrackerError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(TrackerError::UnknownHabit(id.to_string()));
        }
        if let Some(i) = self.habits.iter().position(|h| h.id == id) {
            return Ok(i);
        }
        let mut matches = self
            .habits
            .iter()
            .enumerate()
            .filter(|(_, h)| h.id.starts_with(id));
        match (matches.next(), matches.next()) {
            (Some((i, _)), None) => Ok(i),
            (Some(_), Some(_)) => Err(TrackerError::AmbiguousHabit(id.to_string())),
            (None, _) => Err(TrackerError::UnknownHabit(id.to_string())),
        }
    }

    fn save(&self, records: &Records<'_>) -> SaveStatus {
        records.save(RecordKey::Habits, &self.habits)
    }
}
