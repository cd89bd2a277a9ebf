pub mod content;
pub mod habit;
pub mod prayer;
pub mod tasbeeh;
pub mod virtue;

pub use content::{Ayat, Difficulty, Importance, Intention, IslamicEvent, QuizQuestion};
pub use habit::Habit;
pub use prayer::{DailyPrayers, PrayerName, PrayerStatus, PrayerSummary};
pub use tasbeeh::{Dhikr, TasbeehCounts};
pub use virtue::{AchievementLevel, VirtueAction, VirtueRecord};
