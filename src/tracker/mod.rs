//! One tracker per feature. Each owns its state and takes the record
//! adapter by reference for every load and save.

pub mod ayat;
pub mod calendar;
pub mod daily;
pub mod habits;
pub mod intention;
pub mod prayers;
pub mod quiz;
pub mod streak;
pub mod tasbeeh;
pub mod virtue;

use thiserror::Error;

pub use ayat::Favorites;
pub use habits::HabitTracker;
pub use prayers::PrayerTracker;
pub use quiz::Quiz;
pub use tasbeeh::TasbeehCounter;
pub use virtue::VirtueLedger;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("habit name cannot be empty")]
    EmptyName,
    #[error("no habit matches '{0}'")]
    UnknownHabit(String),
    #[error("'{0}' matches more than one habit, use more of the id")]
    AmbiguousHabit(String),
    #[error("answer must be between 1 and {0}")]
    AnswerOutOfRange(usize),
    #[error("no quiz questions available")]
    NoQuestion,
}
