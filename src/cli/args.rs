use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "tadhkir",
    version,
    author,
    about = "A local-first companion for prayers, habits, dhikr and daily reminders"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Daily prayer log
    Prayer {
        #[command(subcommand)]
        action: PrayerCommands,
    },
    /// Habit streaks
    Habit {
        #[command(subcommand)]
        action: HabitCommands,
    },
    /// Ayat of the day and favorites
    Ayat {
        #[command(subcommand)]
        action: Option<AyatCommands>,
        /// Show a different ayat than today's
        #[arg(long)]
        random: bool,
    },
    /// Daily intention
    Intention {
        #[command(subcommand)]
        action: Option<IntentionCommands>,
        /// Show a different intention than today's
        #[arg(long)]
        random: bool,
    },
    /// Daily Islamic knowledge quiz
    Quiz {
        #[command(subcommand)]
        action: Option<QuizCommands>,
        /// Show a different question than today's
        #[arg(long)]
        random: bool,
    },
    /// Tasbeeh counter
    Tasbeeh {
        #[command(subcommand)]
        action: TasbeehCommands,
    },
    /// Virtue points
    Virtue {
        #[command(subcommand)]
        action: VirtueCommands,
    },
    /// Islamic calendar events
    Calendar {
        #[command(subcommand)]
        action: Option<CalendarCommands>,
        /// Day to look up (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PrayerCommands {
    /// Show the five prayers for a day
    Show {
        /// Day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Advance a prayer: missed → performed → qadha → jamaat → missed
    Cycle {
        /// Prayer name (fajr, dhuhr, asr, maghrib, isha)
        prayer: String,
        /// Day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Summary of the last 7 days
    Week,
}

#[derive(Subcommand, Debug)]
pub enum HabitCommands {
    /// List habits with their streaks
    List,
    /// Add a new habit
    Add {
        /// Habit name, e.g. "Read Quran daily"
        name: String,
    },
    /// Mark today done, or undo it
    Toggle {
        /// Habit id (a unique prefix is enough)
        id: String,
    },
    /// Permanently remove a habit
    Delete {
        /// Habit id (a unique prefix is enough)
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum AyatCommands {
    /// Add or remove an ayat from favorites
    Favorite {
        /// Ayat id
        id: u32,
    },
    /// List favorite ayat
    Favorites,
}

#[derive(Subcommand, Debug)]
pub enum IntentionCommands {
    /// Save your own intention
    Set {
        /// Intention text
        text: String,
    },
    /// Remove your own intention
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum QuizCommands {
    /// Answer a question (today's unless --question is given)
    Answer {
        /// Option number, starting at 1
        choice: usize,
        /// Id of the question being answered, as printed with it
        #[arg(long)]
        question: Option<u32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TasbeehCommands {
    /// Show all counters
    Show,
    /// Add to a counter
    Count {
        /// subhanallah, alhamdulillah or allahuakbar
        dhikr: String,
        /// How many to add
        #[arg(long, default_value = "1")]
        by: u32,
    },
    /// Reset one counter, or all of them
    Reset {
        /// Counter to reset; omit to reset all
        dhikr: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum VirtueCommands {
    /// List the deeds that earn points
    Actions,
    /// Log a deed for today
    Add {
        /// Action id (prayer, jamaat, tahajjud, quran, sadaqah, dhikr)
        action: String,
    },
    /// Today, this week and lifetime totals
    Stats,
}

#[derive(Subcommand, Debug)]
pub enum CalendarCommands {
    /// Upcoming events
    Upcoming,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_opens_dashboard() {
        let cli = Cli::try_parse_from(["tadhkir"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_prayer_cycle_with_date() {
        let cli =
            Cli::try_parse_from(["tadhkir", "prayer", "cycle", "fajr", "--date", "2025-03-01"])
                .unwrap();
        match cli.command {
            Some(Commands::Prayer {
                action: PrayerCommands::Cycle { prayer, date },
            }) => {
                assert_eq!(prayer, "fajr");
                assert_eq!(date.as_deref(), Some("2025-03-01"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn tasbeeh_count_defaults_to_one() {
        let cli = Cli::try_parse_from(["tadhkir", "tasbeeh", "count", "subhanallah"]).unwrap();
        match cli.command {
            Some(Commands::Tasbeeh {
                action: TasbeehCommands::Count { by, .. },
            }) => assert_eq!(by, 1),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn ayat_random_flag_without_action() {
        let cli = Cli::try_parse_from(["tadhkir", "ayat", "--random"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Ayat {
                action: None,
                random: true
            })
        ));
    }

    #[test]
    fn quiz_answer_takes_question_id() {
        let cli =
            Cli::try_parse_from(["tadhkir", "quiz", "answer", "2", "--question", "3"]).unwrap();
        match cli.command {
            Some(Commands::Quiz {
                action: Some(QuizCommands::Answer { choice, question }),
                random: false,
            }) => {
                assert_eq!(choice, 2);
                assert_eq!(question, Some(3));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn habit_add_requires_name() {
        assert!(Cli::try_parse_from(["tadhkir", "habit", "add"]).is_err());
    }
}
