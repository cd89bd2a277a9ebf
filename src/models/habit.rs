use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub streak: u32,
    /// Calendar-day keys, treated as a set.
    #[serde(default)]
    pub completed_dates: Vec<String>,
    pub created_at: String,
}

impl Habit {
    pub fn is_completed_on(&self, date: &str) -> bool {
        self.completed_dates.iter().any(|d| d == date)
    }
}
