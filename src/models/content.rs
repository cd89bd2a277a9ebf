//! Read-only reference content bundled with the binary.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ayat {
    pub id: u32,
    pub surah: &'static str,
    pub ayat_number: u32,
    pub arabic_text: &'static str,
    pub translation: &'static str,
    pub explanation: &'static str,
    pub tags: &'static [&'static str],
}

impl Ayat {
    pub fn reference(&self) -> String {
        format!("{} {}", self.surah, self.ayat_number)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intention {
    pub id: u32,
    pub text: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: &'static str,
    pub options: &'static [&'static str],
    /// Zero-based index into `options`.
    pub correct_answer: usize,
    pub explanation: &'static str,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Importance {
    Major,
    Minor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IslamicEvent {
    pub id: u32,
    pub name: &'static str,
    pub hijri_date: &'static str,
    /// Calendar-day key of the expected Gregorian date.
    pub gregorian_date: &'static str,
    pub description: &'static str,
    pub importance: Importance,
}
