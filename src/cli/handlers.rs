use anyhow::{anyhow, Context, Result};
use chrono::{NaiveDate, Utc};
use std::str::FromStr;

use crate::catalog::{AYAT, INTENTIONS, VIRTUE_ACTIONS};
use crate::cli::args::{
    AyatCommands, CalendarCommands, HabitCommands, IntentionCommands, PrayerCommands,
    QuizCommands, TasbeehCommands, VirtueCommands,
};
use crate::config::AppConfig;
use crate::db::{Records, SaveStatus};
use crate::models::{Ayat, Dhikr, Importance, PrayerName, PrayerStatus};
use crate::tracker::ayat::ayat_of_the_day;
use crate::tracker::calendar::{event_on, upcoming};
use crate::tracker::daily::{mark_seen_today, pick_different, rotation_index};
use crate::tracker::intention::{
    clear_custom_intention, custom_intention, intention_of_the_day, set_custom_intention,
};
use crate::tracker::quiz::AnswerResult;
use crate::tracker::streak::best_streak;
use crate::tracker::{Favorites, HabitTracker, PrayerTracker, Quiz, TasbeehCounter, VirtueLedger};
use crate::utils::dates::{date_key, date_or_today, today};
use crate::utils::format::{plural, progress_bar};
use crate::utils::hijri::hijri_string;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

/// Tell the user when a change only lived in memory.
fn report_save(status: SaveStatus) {
    match status {
        SaveStatus::Saved => {}
        SaveStatus::Unavailable => {
            println_colored!(DIM, "  (storage unavailable — change not saved)");
        }
        SaveStatus::Failed => {
            println_colored!(RED, "  (could not save — see log for details)");
        }
    }
}

fn status_icon(status: PrayerStatus) -> (&'static str, &'static str) {
    match status {
        PrayerStatus::Jamaat => ("◉", GREEN),
        PrayerStatus::Performed => ("●", GREEN),
        PrayerStatus::Qadha => ("◑", AMBER),
        PrayerStatus::Missed => ("○", DIM),
    }
}

// ─── Prayers ─────────────────────────────────────────────────────────────────

pub fn handle_prayer(records: &Records<'_>, action: &PrayerCommands) -> Result<()> {
    let mut tracker = PrayerTracker::load(records);

    match action {
        PrayerCommands::Show { date } => {
            let date = date_or_today(date.as_deref())?;
            let day = tracker.day(date);
            println!();
            println_colored!(GOLD, "  Prayers — {}", day.date);
            println!();
            for (name, status) in day.prayers.iter() {
                let (icon, color) = status_icon(status);
                println!(
                    "  {:<9} {}{}\x1b[0m  {}",
                    name.display_name(),
                    color,
                    icon,
                    status.label()
                );
            }
            let summary = tracker.summary(date);
            println!();
            println_colored!(
                DIM,
                "  {}/5 on time · {} qadha · {} missed",
                summary.on_time(),
                summary.qadha,
                summary.missed
            );
            println!();
        }
        PrayerCommands::Cycle { prayer, date } => {
            let name = PrayerName::from_str(prayer).map_err(|_| {
                anyhow!(
                    "Unknown prayer '{}'. Use: fajr, dhuhr, asr, maghrib, isha",
                    prayer
                )
            })?;
            let date = date_or_today(date.as_deref())?;
            let (next, status) = tracker.cycle(records, date, name);
            let (icon, color) = status_icon(next);
            println_colored!(
                color,
                "  {} {} — {} ({})",
                icon,
                name.display_name(),
                next.label(),
                date_key(date)
            );
            report_save(status);
        }
        PrayerCommands::Week => {
            println!();
            println_colored!(GOLD, "  Last 7 days");
            println!();
            for (date, summary) in tracker.recent(today(), 7) {
                println!(
                    "  {}  {}  {}/5 on time  {}",
                    date_key(date),
                    progress_bar(summary.on_time(), 5, 5),
                    summary.on_time(),
                    if summary.qadha > 0 {
                        format!("{} qadha", summary.qadha)
                    } else {
                        String::new()
                    }
                );
            }
            println!();
        }
    }
    Ok(())
}

// ─── Habits ──────────────────────────────────────────────────────────────────

pub fn handle_habit(records: &Records<'_>, action: &HabitCommands) -> Result<()> {
    let today = today();
    let today_str = date_key(today);
    let mut tracker = HabitTracker::load(records, today);

    match action {
        HabitCommands::List => {
            println!();
            if tracker.habits().is_empty() {
                println_colored!(DIM, "  No habits yet. Add one with `tadhkir habit add <name>`");
            } else {
                println_colored!(GOLD, "  Habits");
                println!();
                for habit in tracker.habits() {
                    let done = habit.is_completed_on(&today_str);
                    let (icon, color) = if done { ("✓", GREEN) } else { ("○", DIM) };
                    println!(
                        "  {}{}\x1b[0m {:<28} {:>8}  {}best {}\x1b[0m  {}{}\x1b[0m",
                        color,
                        icon,
                        habit.name,
                        plural(habit.streak, "day"),
                        DIM,
                        best_streak(&habit.completed_dates),
                        DIM,
                        short_id(&habit.id)
                    );
                }
            }
            println!();
        }
        HabitCommands::Add { name } => {
            let (habit, status) = tracker.add(records, name, Utc::now())?;
            println_colored!(
                GREEN,
                "  ✓ Added habit: {} ({})",
                habit.name,
                short_id(&habit.id)
            );
            report_save(status);
        }
        HabitCommands::Toggle { id } => {
            let (habit, status) = tracker.toggle_today(records, id, today)?;
            if habit.is_completed_on(&today_str) {
                println_colored!(
                    GREEN,
                    "  ✓ {} — done today · {} streak",
                    habit.name,
                    plural(habit.streak, "day")
                );
            } else {
                println_colored!(
                    DIM,
                    "  ○ {} — unmarked · {} streak",
                    habit.name,
                    plural(habit.streak, "day")
                );
            }
            report_save(status);
        }
        HabitCommands::Delete { id } => {
            let (habit, status) = tracker.delete(records, id)?;
            println_colored!(AMBER, "  Deleted habit: {}", habit.name);
            report_save(status);
        }
    }
    Ok(())
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

// ─── Ayat ────────────────────────────────────────────────────────────────────

pub fn handle_ayat(records: &Records<'_>, action: Option<&AyatCommands>, random: bool) -> Result<()> {
    let mut favorites = Favorites::load(records);

    match action {
        None => {
            let today = today();
            let ayat = if random {
                let current = rotation_index(today, AYAT.len()).unwrap_or(0);
                AYAT.get(pick_different(current, AYAT.len(), &mut rand::thread_rng()))
            } else {
                ayat_of_the_day(today)
            };
            let ayat = ayat.ok_or_else(|| anyhow!("No ayat available"))?;
            if mark_seen_today(records, today) {
                println_colored!(AMBER, "  ✦ New for today");
            }
            print_ayat(ayat, favorites.contains(ayat.id));
        }
        Some(AyatCommands::Favorite { id }) => match favorites.toggle(records, *id) {
            Some((true, status)) => {
                println_colored!(GREEN, "  ♥ Added ayat {} to favorites", id);
                report_save(status);
            }
            Some((false, status)) => {
                println_colored!(DIM, "  ♡ Removed ayat {} from favorites", id);
                report_save(status);
            }
            None => {
                println_colored!(DIM, "  No ayat with id {} — nothing changed", id);
            }
        },
        Some(AyatCommands::Favorites) => {
            let list = favorites.ayat();
            if list.is_empty() {
                println!();
                println_colored!(DIM, "  No favorite ayat yet");
                println!();
            }
            for ayat in list {
                print_ayat(ayat, true);
            }
        }
    }
    Ok(())
}

fn print_ayat(ayat: &Ayat, favorite: bool) {
    println!();
    println_colored!(
        GOLD,
        "  {} {}  {}",
        ayat.reference(),
        if favorite { "♥" } else { "" },
        ayat.arabic_text
    );
    println!();
    println_colored!(BOLD, "  \"{}\"", ayat.translation);
    println!();
    println_colored!(DIM, "  {}", ayat.explanation);
    println_colored!(DIM, "  #{} · {}", ayat.id, ayat.tags.join(", "));
    println!();
}

// ─── Intention ───────────────────────────────────────────────────────────────

pub fn handle_intention(
    records: &Records<'_>,
    action: Option<&IntentionCommands>,
    random: bool,
) -> Result<()> {
    match action {
        None => {
            let today = today();
            let intention = if random {
                let current = rotation_index(today, INTENTIONS.len()).unwrap_or(0);
                INTENTIONS.get(pick_different(current, INTENTIONS.len(), &mut rand::thread_rng()))
            } else {
                intention_of_the_day(today)
            };
            mark_seen_today(records, today);
            println!();
            if let Some(intention) = intention {
                println_colored!(GOLD, "  Today's intention");
                println_colored!(BOLD, "  {}", intention.text);
                println_colored!(DIM, "  {}", intention.category);
            }
            if let Some(custom) = custom_intention(records) {
                println!();
                println_colored!(GOLD, "  Your intention");
                println_colored!(BOLD, "  {}", custom);
            }
            println!();
        }
        Some(IntentionCommands::Set { text }) => {
            if text.trim().is_empty() {
                return Err(anyhow!("Intention cannot be empty"));
            }
            let status = set_custom_intention(records, text);
            println_colored!(GREEN, "  ✓ Intention set: {}", text.trim());
            report_save(status);
        }
        Some(IntentionCommands::Clear) => {
            let status = clear_custom_intention(records);
            println_colored!(DIM, "  Intention cleared");
            report_save(status);
        }
    }
    Ok(())
}

// ─── Quiz ────────────────────────────────────────────────────────────────────

pub fn handle_quiz(records: &Records<'_>, action: Option<&QuizCommands>, random: bool) -> Result<()> {
    let today = today();

    match action {
        None => {
            let mut quiz = Quiz::for_day(today);
            if random {
                quiz.reshuffle(&mut rand::thread_rng());
            }
            mark_seen_today(records, today);
            let q = quiz.question().ok_or_else(|| anyhow!("No quiz questions available"))?;
            println!();
            println_colored!(GOLD, "  {} ({})", q.question, q.difficulty.as_str());
            println!();
            for (i, option) in q.options.iter().enumerate() {
                println!("  {}. {}", i + 1, option);
            }
            println!();
            println_colored!(
                DIM,
                "  Answer with `tadhkir quiz answer <number> --question {}`",
                q.id
            );
            println!();
        }
        Some(QuizCommands::Answer { choice, question }) => {
            if random {
                return Err(anyhow!(
                    "--random picks a new question and cannot be answered in the same step. \
                     Use `tadhkir quiz answer <number> --question <id>`"
                ));
            }
            let result = check_answer(*question, *choice, today)?;
            println!();
            if result.correct {
                println_colored!(GREEN, "  ✓ Correct!");
            } else {
                println_colored!(RED, "  ✗ Not quite — the answer is {}", result.correct_answer);
            }
            println_colored!(DIM, "  {}", result.explanation);
            println!();
        }
    }
    Ok(())
}

/// Check a 1-based `choice` against question `question`, or today's question.
fn check_answer(question: Option<u32>, choice: usize, today: NaiveDate) -> Result<AnswerResult> {
    let quiz = match question {
        Some(id) => Quiz::by_id(id).ok_or_else(|| anyhow!("No quiz question with id {}", id))?,
        None => Quiz::for_day(today),
    };
    let answer = quiz
        .answer(choice.checked_sub(1).unwrap_or(usize::MAX))
        .context("Checking answer")?;
    Ok(answer)
}

// ─── Tasbeeh ─────────────────────────────────────────────────────────────────

pub fn handle_tasbeeh(
    records: &Records<'_>,
    config: &AppConfig,
    action: &TasbeehCommands,
) -> Result<()> {
    let mut counter = TasbeehCounter::load(records, &config.tasbeeh);

    match action {
        TasbeehCommands::Show => {
            println!();
            println_colored!(GOLD, "  Tasbeeh");
            println!();
            for dhikr in Dhikr::all() {
                let color = if counter.is_complete(dhikr) { GREEN } else { AMBER };
                println!(
                    "  {:<14} {}{}\x1b[0m  {}/{}  {}{}\x1b[0m",
                    dhikr.display_name(),
                    color,
                    progress_bar(counter.count(dhikr), counter.target(dhikr), 12),
                    counter.count(dhikr),
                    counter.target(dhikr),
                    DIM,
                    dhikr.meaning()
                );
            }
            println!();
        }
        TasbeehCommands::Count { dhikr, by } => {
            let dhikr = Dhikr::from_str(dhikr)?;
            let (count, status) = counter.increment(records, dhikr, *by);
            let target = counter.target(dhikr);
            if count >= target {
                println_colored!(
                    GREEN,
                    "  ✓ {} — {}/{} (complete!)",
                    dhikr.display_name(),
                    count,
                    target
                );
            } else {
                println_colored!(AMBER, "  ◑ {} — {}/{}", dhikr.display_name(), count, target);
            }
            report_save(status);
        }
        TasbeehCommands::Reset { dhikr } => {
            let status = match dhikr {
                Some(name) => {
                    let dhikr = Dhikr::from_str(name)?;
                    let status = counter.reset(records, dhikr);
                    println_colored!(DIM, "  {} reset to 0", dhikr.display_name());
                    status
                }
                None => {
                    let status = counter.reset_all(records);
                    println_colored!(DIM, "  All counters reset");
                    status
                }
            };
            report_save(status);
        }
    }
    Ok(())
}

// ─── Virtue points ───────────────────────────────────────────────────────────

pub fn handle_virtue(
    records: &Records<'_>,
    config: &AppConfig,
    action: &VirtueCommands,
) -> Result<()> {
    let today = today();
    let mut ledger = VirtueLedger::load(records);

    match action {
        VirtueCommands::Actions => {
            println!();
            println_colored!(GOLD, "  Virtue actions");
            println!();
            for a in VIRTUE_ACTIONS {
                println!(
                    "  {:<10} {:>3} pts  {:<24} {}{}\x1b[0m",
                    a.id, a.points, a.name, DIM, a.description
                );
            }
            println!();
        }
        VirtueCommands::Add { action } => match ledger.add(records, action, today) {
            Some((record, status)) => {
                println_colored!(
                    GREEN,
                    "  ✓ +{} points · today {} · level {}",
                    record.points,
                    ledger.daily_total(today),
                    ledger.level()
                );
                report_save(status);
            }
            None => {
                println_colored!(
                    DIM,
                    "  Unknown action '{}' — nothing logged. See `tadhkir virtue actions`",
                    action
                );
            }
        },
        VirtueCommands::Stats => {
            let level = ledger.level();
            let weekly = ledger.weekly_total(today);
            let goal = config.virtue.weekly_goal;
            println!();
            println_colored!(GOLD, "  Virtue points");
            println!();
            println_colored!(BOLD, "  Level:     {}", level);
            println_colored!(DIM, "  {}", level.motivation());
            println!();
            println!("  Today:     {} pts", ledger.daily_total(today));
            println!(
                "  This week: {} / {} pts  {}  {}%",
                weekly,
                goal,
                progress_bar(weekly, goal, 12),
                ledger.weekly_progress(today, goal)
            );
            println!("  Lifetime:  {} pts", ledger.lifetime_total());
            println!();
            for (name, count) in ledger.action_counts() {
                if count > 0 {
                    println_colored!(DIM, "  {:<24} ×{}", name, count);
                }
            }
            println!();
        }
    }
    Ok(())
}

// ─── Calendar ────────────────────────────────────────────────────────────────

pub fn handle_calendar(
    config: &AppConfig,
    action: Option<&CalendarCommands>,
    date: Option<&str>,
) -> Result<()> {
    let date = date_or_today(date)?;
    let offset = config.calendar.hijri_offset;

    match action {
        None => {
            println!();
            println_colored!(
                GOLD,
                "  {}  ·  {}",
                date.format("%A, %b %d, %Y"),
                hijri_string(date, offset)
            );
            println!();
            match event_on(date) {
                Some(event) => {
                    println_colored!(BOLD, "  {} ({})", event.name, event.hijri_date);
                    println_colored!(DIM, "  {}", event.description);
                }
                None => println_colored!(DIM, "  No Islamic events on this day"),
            }
            println!();
        }
        Some(CalendarCommands::Upcoming) => {
            let events = upcoming(date, 10);
            println!();
            if events.is_empty() {
                println_colored!(DIM, "  No upcoming events in the calendar");
            }
            for event in events {
                let color = match event.importance {
                    Importance::Major => AMBER,
                    Importance::Minor => DIM,
                };
                println_colored!(
                    color,
                    "  {}  {:<16} {}",
                    event.gregorian_date,
                    event.name,
                    event.hijri_date
                );
            }
            println!();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn answer_checks_the_named_question() {
        // question 2's correct option is the second one
        assert!(check_answer(Some(2), 2, day()).unwrap().correct);
        assert!(!check_answer(Some(2), 1, day()).unwrap().correct);
    }

    #[test]
    fn answer_without_id_checks_todays_question() {
        // 2025-03-01 rotates to question 1, whose answer is the third option
        assert!(check_answer(None, 3, day()).unwrap().correct);
    }

    #[test]
    fn bad_question_id_or_choice_is_an_error() {
        assert!(check_answer(Some(99), 1, day()).is_err());
        assert!(check_answer(Some(1), 0, day()).is_err());
        assert!(check_answer(Some(1), 5, day()).is_err());
    }

    #[test]
    fn random_cannot_be_combined_with_answer() {
        let store = MemoryStore::default();
        let records = Records::new(&store);
        let answer = QuizCommands::Answer {
            choice: 1,
            question: Some(1),
        };
        assert!(handle_quiz(&records, Some(&answer), true).is_err());
        assert!(handle_quiz(&records, Some(&answer), false).is_ok());
    }
}
