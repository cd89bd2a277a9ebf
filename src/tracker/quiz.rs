use chrono::NaiveDate;
use rand::Rng;

use crate::catalog::QUIZ_QUESTIONS;
use crate::models::QuizQuestion;
use crate::tracker::daily::{pick_different, rotation_index};
use crate::tracker::TrackerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerResult {
    pub correct: bool,
    pub correct_answer: &'static str,
    pub explanation: &'static str,
}

/// One question on screen at a time: today's by default, or a reshuffle.
#[derive(Debug, Clone, Copy)]
pub struct Quiz {
    index: usize,
}

impl Quiz {
    pub fn for_day(date: NaiveDate) -> Self {
        Self {
            index: rotation_index(date, QUIZ_QUESTIONS.len()).unwrap_or(0),
        }
    }

    /// The question with catalog id `id`, if there is one.
    pub fn by_id(id: u32) -> Option<Self> {
        QUIZ_QUESTIONS
            .iter()
            .position(|q| q.id == id)
            .map(|index| Self { index })
    }

    pub fn question(&self) -> Option<&'static QuizQuestion> {
        QUIZ_QUESTIONS.get(self.index)
    }

    /// Move to a different question, chosen uniformly.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.index = pick_different(self.index, QUIZ_QUESTIONS.len(), rng);
    }

    /// Check a zero-based option index against the current question.
    pub fn answer(&self, choice: usize) -> Result<AnswerResult, TrackerError> {
        let q = self.question().ok_or(TrackerError::NoQuestion)?;
        if choice >= q.options.len() {
            return Err(TrackerError::AnswerOutOfRange(q.options.len()));
        }
        Ok(AnswerResult {
            correct: choice == q.correct_answer,
            correct_answer: q.options[q.correct_answer],
            explanation: q.explanation,
        })
    }
}
