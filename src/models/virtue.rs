use serde::{Deserialize, Serialize};

/// A catalog entry describing a good deed and what it is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtueAction {
    pub id: &'static str,
    pub name: &'static str,
    pub points: u32,
    pub description: &'static str,
}

/// One logged deed. Points are copied from the catalog when the record is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtueRecord {
    pub id: String,
    pub action_id: String,
    pub date: String,
    pub points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AchievementLevel {
    Novice,
    Beginner,
    Intermediate,
    Expert,
    Master,
}

impl AchievementLevel {
    pub fn from_points(points: u32) -> Self {
        match points {
            p if p >= 500 => AchievementLevel::Master,
            p if p >= 300 => AchievementLevel::Expert,
            p if p >= 200 => AchievementLevel::Intermediate,
            p if p >= 100 => AchievementLevel::Beginner,
            _ => AchievementLevel::Novice,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementLevel::Novice => "Novice",
            AchievementLevel::Beginner => "Beginner",
            AchievementLevel::Intermediate => "Intermediate",
            AchievementLevel::Expert => "Expert",
            AchievementLevel::Master => "Master",
        }
    }

    pub fn motivation(&self) -> &'static str {
        match self {
            AchievementLevel::Master => "MashaAllah! Your dedication is inspiring others!",
            AchievementLevel::Expert => {
                "Amazing progress! You're on a beautiful spiritual journey."
            }
            AchievementLevel::Intermediate => {
                "You're growing steadily in your practice. Keep going!"
            }
            AchievementLevel::Beginner => "A wonderful start to your journey. Stay consistent!",
            AchievementLevel::Novice => "Every small step counts. Begin your journey today!",
        }
    }
}

impl std::fmt::Display for AchievementLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
