mod data;

pub use data::{AYAT, INTENTIONS, ISLAMIC_EVENTS, QUIZ_QUESTIONS, VIRTUE_ACTIONS};

use crate::models::{Ayat, VirtueAction};

pub fn find_virtue_action(id: &str) -> Option<&'static VirtueAction> {
    VIRTUE_ACTIONS
        .iter()
        .find(|a| a.id.eq_ignore_ascii_case(id.trim()))
}

pub fn find_ayat(id: u32) -> Option<&'static Ayat> {
    AYAT.iter().find(|a| a.id == id)
}
