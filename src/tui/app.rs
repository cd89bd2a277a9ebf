use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Duration;

use crate::catalog::AYAT;
use crate::config::AppConfig;
use crate::db::{Records, SaveStatus};
use crate::models::{Dhikr, PrayerName};
use crate::tracker::calendar::upcoming;
use crate::tracker::daily::{mark_seen_today, pick_different, rotation_index};
use crate::tracker::intention::{custom_intention, intention_of_the_day};
use crate::tracker::streak::best_streak;
use crate::tracker::{Favorites, HabitTracker, PrayerTracker, TasbeehCounter, VirtueLedger};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::virtue::VirtueView;
use crate::tui::widgets::{daily, habits, header, prayers, statusbar, tasbeeh, virtue};
use crate::utils::dates::{date_key, today};
use crate::utils::format::progress_bar;
use crate::utils::hijri::hijri_string;

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Stats,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FocusSection {
    Prayers,
    Habits,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    HabitName,
}

pub struct App<'a> {
    records: Records<'a>,
    pub view: View,
    pub config: AppConfig,
    pub focus_section: FocusSection,
    pub focus_idx: usize,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub input_error: Option<String>,
    /// Shown in the status bar until the next successful save.
    pub notice: Option<String>,

    pub today: NaiveDate,
    pub hijri_str: String,
    pub new_today: bool,
    pub ayat_idx: Option<usize>,
    pub custom_intention: Option<String>,
    pub prayers: PrayerTracker,
    pub habits: HabitTracker,
    pub tasbeeh: TasbeehCounter,
    pub virtue: VirtueLedger,
    pub favorites: Favorites,
}

impl<'a> App<'a> {
    pub fn new(records: Records<'a>, config: AppConfig) -> Self {
        let today = today();
        let mut app = App {
            records,
            view: View::Dashboard,
            focus_section: FocusSection::Prayers,
            focus_idx: 0,
            should_quit: false,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            input_error: None,
            notice: None,
            today,
            hijri_str: String::new(),
            new_today: false,
            ayat_idx: None,
            custom_intention: None,
            prayers: PrayerTracker::load(&records),
            habits: HabitTracker::load(&records, today),
            tasbeeh: TasbeehCounter::load(&records, &config.tasbeeh),
            virtue: VirtueLedger::load(&records),
            favorites: Favorites::load(&records),
            config,
        };
        app.roll_to(today);
        app
    }

    /// Reload everything from storage.
    pub fn load(&mut self) {
        let records = self.records;
        self.prayers = PrayerTracker::load(&records);
        self.habits = HabitTracker::load(&records, self.today);
        self.tasbeeh = TasbeehCounter::load(&records, &self.config.tasbeeh);
        self.virtue = VirtueLedger::load(&records);
        self.favorites = Favorites::load(&records);
        self.custom_intention = custom_intention(&records);
    }

    /// Switch the dashboard to `date`: new daily content, fresh streaks.
    pub fn roll_to(&mut self, date: NaiveDate) {
        self.today = date;
        self.hijri_str = hijri_string(date, self.config.calendar.hijri_offset);
        self.ayat_idx = rotation_index(date, AYAT.len());
        self.new_today = mark_seen_today(&self.records, date);
        self.load();
    }

    pub fn tick(&mut self) {
        let now = today();
        if now != self.today {
            log::info!("Day changed to {}", now);
            self.roll_to(now);
        }
    }

    fn note(&mut self, status: SaveStatus) {
        self.notice = match status {
            SaveStatus::Saved => None,
            SaveStatus::Unavailable => {
                Some("Storage unavailable, changes are kept for this session only".to_string())
            }
            SaveStatus::Failed => Some("Could not save the last change".to_string()),
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only handle actual key presses, some terminals also report release/repeat
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.input_mode {
            InputMode::HabitName => self.handle_habit_input(key),
            InputMode::Normal => match self.view {
                View::Dashboard => self.handle_dashboard_key(key),
                View::Stats => self.handle_stats_key(key),
                View::Help => self.handle_help_key(key),
            },
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Char('s') => {
                self.view = View::Stats;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.focus_idx = self.focus_idx.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = match self.focus_section {
                    FocusSection::Prayers => PrayerName::all().len() - 1,
                    FocusSection::Habits => self.habits.habits().len().saturating_sub(1),
                };
                if self.focus_idx < max {
                    self.focus_idx += 1;
                }
            }
            KeyCode::Tab => {
                self.focus_section = match self.focus_section {
                    FocusSection::Prayers => FocusSection::Habits,
                    FocusSection::Habits => FocusSection::Prayers,
                };
                self.focus_idx = 0;
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_focused(),
            KeyCode::Char(c @ '1'..='3') => {
                let idx = c as usize - '1' as usize;
                let dhikr = Dhikr::all()[idx];
                let (_, status) = self.tasbeeh.increment(&self.records, dhikr, 1);
                self.note(status);
            }
            KeyCode::Char('r') => {
                let status = self.tasbeeh.reset_all(&self.records);
                self.note(status);
            }
            KeyCode::Char('a') => {
                self.input_mode = InputMode::HabitName;
                self.input_buffer.clear();
                self.input_error = None;
            }
            KeyCode::Char('D') => self.delete_focused_habit(),
            KeyCode::Char('n') => {
                let current = self.ayat_idx.unwrap_or(0);
                self.ayat_idx = Some(pick_different(current, AYAT.len(), &mut rand::thread_rng()));
            }
            KeyCode::Char('f') => {
                if let Some(ayat) = self.ayat_idx.and_then(|i| AYAT.get(i)) {
                    if let Some((_, status)) = self.favorites.toggle(&self.records, ayat.id) {
                        self.note(status);
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_stats_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('s')) {
            self.view = View::Dashboard;
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            self.view = View::Dashboard;
        }
    }

    fn handle_habit_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
                self.input_error = None;
            }
            KeyCode::Enter => {
                let added = self
                    .habits
                    .add(&self.records, &self.input_buffer, chrono::Utc::now())
                    .map(|(_, status)| status);
                match added {
                    Ok(status) => {
                        self.note(status);
                        self.input_mode = InputMode::Normal;
                        self.input_buffer.clear();
                        self.input_error = None;
                        self.focus_section = FocusSection::Habits;
                        self.focus_idx = self.habits.habits().len().saturating_sub(1);
                    }
                    Err(e) => {
                        self.input_error = Some(e.to_string());
                    }
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                self.input_error = None;
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                self.input_error = None;
            }
            _ => {}
        }
    }

    fn activate_focused(&mut self) {
        match self.focus_section {
            FocusSection::Prayers => {
                if let Some(name) = PrayerName::all().get(self.focus_idx).copied() {
                    let (_, status) = self.prayers.cycle(&self.records, self.today, name);
                    self.note(status);
                }
            }
            FocusSection::Habits => {
                let Some(id) = self.focused_habit_id() else {
                    return;
                };
                let toggled = self
                    .habits
                    .toggle_today(&self.records, &id, self.today)
                    .map(|(_, status)| status);
                match toggled {
                    Ok(status) => self.note(status),
                    Err(e) => log::warn!("Toggle failed: {}", e),
                }
            }
        }
    }

    fn delete_focused_habit(&mut self) {
        if self.focus_section != FocusSection::Habits {
            return;
        }
        let Some(id) = self.focused_habit_id() else {
            return;
        };
        match self.habits.delete(&self.records, &id) {
            Ok((_, status)) => {
                self.note(status);
                let max = self.habits.habits().len().saturating_sub(1);
                self.focus_idx = self.focus_idx.min(max);
            }
            Err(e) => log::warn!("Delete failed: {}", e),
        }
    }

    fn focused_habit_id(&self) -> Option<String> {
        self.habits
            .habits()
            .get(self.focus_idx)
            .map(|h| h.id.clone())
    }

    pub fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Dashboard => self.draw_dashboard(frame),
            View::Stats => self.draw_stats(frame),
            View::Help => {
                self.draw_dashboard(frame);
                self.draw_help_overlay(frame);
            }
        }

        if self.input_mode == InputMode::HabitName {
            self.draw_habit_input(frame);
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(
            frame,
            outer_chunks[0],
            self.today,
            &self.hijri_str,
            self.new_today,
        );
        statusbar::render(frame, outer_chunks[2], self.notice.as_deref());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(outer_chunks[1]);

        // Left column: prayers + habits
        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(0)])
            .split(columns[0]);

        let day = self.prayers.day(self.today);
        let summary = self.prayers.summary(self.today);
        prayers::render(
            frame,
            left_chunks[0],
            &day,
            &summary,
            self.focus_idx,
            self.focus_section == FocusSection::Prayers,
        );
        habits::render(
            frame,
            left_chunks[1],
            self.habits.habits(),
            &date_key(self.today),
            self.focus_idx,
            self.focus_section == FocusSection::Habits,
        );

        // Right column: daily content, tasbeeh, virtue
        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(5),
                Constraint::Length(5),
            ])
            .split(columns[1]);

        let ayat = self.ayat_idx.and_then(|i| AYAT.get(i));
        daily::render(
            frame,
            right_chunks[0],
            ayat,
            ayat.is_some_and(|a| self.favorites.contains(a.id)),
            intention_of_the_day(self.today),
            self.custom_intention.as_deref(),
        );
        tasbeeh::render(frame, right_chunks[1], &self.tasbeeh);

        let goal = self.config.virtue.weekly_goal;
        virtue::render(
            frame,
            right_chunks[2],
            &VirtueView {
                today: self.virtue.daily_total(self.today),
                weekly: self.virtue.weekly_total(self.today),
                weekly_goal: goal,
                weekly_percent: self.virtue.weekly_progress(self.today, goal),
                level: self.virtue.level(),
            },
        );
    }

    fn draw_stats(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("  Stats  ", theme::gold().add_modifier(Modifier::BOLD)),
            Span::styled("  [Esc] back", theme::dim()),
        ]));
        frame.render_widget(title, chunks[0]);

        let mut lines = vec![
            Line::from(Span::styled("  Last 7 Days", theme::gold())),
            Line::from(""),
        ];

        for (date, summary) in self.prayers.recent(self.today, 7) {
            let style = match summary.on_time() {
                5 => theme::green(),
                3 | 4 => theme::amber(),
                _ => theme::dim(),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("  {}  ", progress_bar(summary.on_time(), 5, 12)), style),
                Span::styled(
                    format!(
                        "{}  {}/5  ·  {} jamaat  ·  {} qadha",
                        date_key(date),
                        summary.on_time(),
                        summary.jamaat,
                        summary.qadha
                    ),
                    theme::dim(),
                ),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("  Habits", theme::gold())));
        for habit in self.habits.habits() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<28}", habit.name), theme::bold()),
                Span::styled(
                    format!(
                        "now {}  ·  best {}",
                        habit.streak,
                        best_streak(&habit.completed_dates)
                    ),
                    theme::dim(),
                ),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  Virtue points (lifetime):  ", theme::dim()),
            Span::styled(
                format!("{}  ·  {}", self.virtue.lifetime_total(), self.virtue.level()),
                theme::green().add_modifier(Modifier::BOLD),
            ),
        ]));
        for (name, count) in self.virtue.action_counts() {
            if count > 0 {
                lines.push(Line::from(Span::styled(
                    format!("    {:<24} ×{}", name, count),
                    theme::dim(),
                )));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("  Upcoming", theme::gold())));
        for event in upcoming(self.today, 3) {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}  ", event.gregorian_date), theme::dim()),
                Span::styled(event.name, theme::amber()),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let popup_area = centered_rect(frame.area(), frame.area().width / 2, 16);

        frame.render_widget(Clear, popup_area);

        let bindings = [
            ("[Enter]/[Space]", "Cycle prayer / toggle habit"),
            ("[Tab]", "Switch prayers ↔ habits"),
            ("[↑ ↓]", "Navigate"),
            ("[1] [2] [3]", "Count SubhanAllah / Alhamdulillah / Allahu Akbar"),
            ("[r]", "Reset tasbeeh"),
            ("[a]", "Add habit"),
            ("[D]", "Delete focused habit"),
            ("[n]", "Show another ayat"),
            ("[f]", "Favorite ayat"),
            ("[s]", "Stats view"),
            ("[?]", "Toggle help"),
            ("[Esc]", "Quit"),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (key, label) in bindings {
            help_text.push(Line::from(vec![
                Span::styled(format!("  {:<16}", key), theme::gold()),
                Span::styled(label, theme::dim()),
            ]));
        }

        let block = Block::default()
            .title(Span::styled(" Help ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::gold())
            .style(theme::surface());

        frame.render_widget(Paragraph::new(help_text).block(block), popup_area);
    }

    fn draw_habit_input(&self, frame: &mut Frame) {
        let height = if self.input_error.is_some() { 7 } else { 5 };
        let popup_area = centered_rect(frame.area(), frame.area().width / 2, height);

        frame.render_widget(Clear, popup_area);

        let mut text = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  Habit: ", theme::dim()),
                Span::styled(
                    self.input_buffer.as_str(),
                    theme::gold().add_modifier(Modifier::BOLD),
                ),
                Span::styled("█", theme::amber()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "  Type a name, then [Enter]  ·  [Esc] cancel",
                theme::dim(),
            )),
        ];

        if let Some(err) = &self.input_error {
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(format!("  ✗ {}", err), theme::red())));
        }

        let block = Block::default()
            .title(Span::styled(" New Habit ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.input_error.is_some() {
                theme::red()
            } else {
                theme::amber()
            })
            .style(theme::surface());

        frame.render_widget(Paragraph::new(text).block(block), popup_area);
    }
}

/// A `width` x `height` box centred in `area`, shrunk to fit inside it.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Run the TUI event loop.
pub fn run(records: Records<'_>, config: AppConfig) -> Result<()> {
    let mut app = App::new(records, config);

    let mut terminal = ratatui::init();
    let events = EventHandler::new(Duration::from_millis(500));

    let outcome = loop {
        if let Err(e) = terminal.draw(|frame| app.draw(frame)) {
            break Err(e.into());
        }

        match events.next() {
            Ok(Event::Key(key)) => {
                app.handle_key(key);
                if app.should_quit {
                    break Ok(());
                }
            }
            Ok(Event::Resize) => {}
            Ok(Event::Tick) => app.tick(),
            Err(e) => break Err(e.into()),
        }
    };

    ratatui::restore();
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryStore, UnavailableStore};
    use crate::models::PrayerStatus;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn press(app: &mut App<'_>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn render(app: &App<'_>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn type_text(app: &mut App<'_>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn enter_cycles_focused_prayer_and_saves() {
        let store = MemoryStore::default();
        let records = Records::new(&store);
        let mut app = App::new(records, AppConfig::default());

        press(&mut app, KeyCode::Down); // Dhuhr
        press(&mut app, KeyCode::Enter);

        let reloaded = PrayerTracker::load(&records);
        let day = reloaded.day(app.today);
        assert_eq!(day.prayers.get(PrayerName::Dhuhr), PrayerStatus::Performed);
        assert_eq!(day.prayers.get(PrayerName::Fajr), PrayerStatus::Missed);
        assert!(app.notice.is_none());
    }

    #[test]
    fn add_then_toggle_habit_from_keyboard() {
        let store = MemoryStore::default();
        let records = Records::new(&store);
        let mut app = App::new(records, AppConfig::default());

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.input_mode, InputMode::HabitName);
        type_text(&mut app, "Read Quran");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.focus_section, FocusSection::Habits);
        press(&mut app, KeyCode::Enter);

        let habit = &app.habits.habits()[0];
        assert_eq!(habit.name, "Read Quran");
        assert_eq!(habit.streak, 1);
        assert!(habit.is_completed_on(&date_key(app.today)));
    }

    #[test]
    fn empty_habit_name_keeps_popup_open() {
        let store = MemoryStore::default();
        let mut app = App::new(Records::new(&store), AppConfig::default());

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::HabitName);
        assert!(app.input_error.is_some());
        assert!(app.habits.habits().is_empty());
    }

    #[test]
    fn number_keys_count_tasbeeh() {
        let store = MemoryStore::default();
        let mut app = App::new(Records::new(&store), AppConfig::default());

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('3'));

        assert_eq!(app.tasbeeh.count(Dhikr::SubhanAllah), 2);
        assert_eq!(app.tasbeeh.count(Dhikr::AllahuAkbar), 1);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.tasbeeh.count(Dhikr::SubhanAllah), 0);
    }

    #[test]
    fn next_ayat_always_changes() {
        let store = MemoryStore::default();
        let mut app = App::new(Records::new(&store), AppConfig::default());
        let before = app.ayat_idx;
        press(&mut app, KeyCode::Char('n'));
        assert_ne!(app.ayat_idx, before);
    }

    #[test]
    fn unavailable_storage_shows_notice_but_keeps_state() {
        let store = UnavailableStore;
        let mut app = App::new(Records::new(&store), AppConfig::default());

        press(&mut app, KeyCode::Enter);

        assert!(app.notice.is_some());
        assert!(!app.new_today);
        let day = app.prayers.day(app.today);
        assert_eq!(day.prayers.get(PrayerName::Fajr), PrayerStatus::Performed);
    }

    #[test]
    fn rolling_to_a_new_day_flags_new_content_once() {
        let store = MemoryStore::default();
        let mut app = App::new(Records::new(&store), AppConfig::default());
        assert!(app.new_today);

        let tomorrow = app.today.succ_opt().unwrap();
        app.roll_to(tomorrow);
        assert!(app.new_today);
        assert_eq!(app.ayat_idx, rotation_index(tomorrow, AYAT.len()));

        app.roll_to(tomorrow);
        assert!(!app.new_today);
    }

    #[test]
    fn escape_quits_and_help_round_trips() {
        let store = MemoryStore::default();
        let mut app = App::new(Records::new(&store), AppConfig::default());

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.view, View::Help);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view, View::Dashboard);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn every_view_draws_on_small_terminals() {
        let store = MemoryStore::default();
        let mut app = App::new(Records::new(&store), AppConfig::default());

        for (width, height) in [(20, 5), (40, 10), (80, 15), (120, 40)] {
            for view in [View::Dashboard, View::Stats, View::Help] {
                app.view = view;
                render(&app, width, height);
            }
        }

        app.view = View::Dashboard;
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter); // empty name shows the error line
        assert!(app.input_error.is_some());
        for (width, height) in [(20, 5), (40, 10), (80, 15)] {
            render(&app, width, height);
        }
    }

    #[test]
    fn help_overlay_fits_a_short_terminal() {
        let store = MemoryStore::default();
        let mut app = App::new(Records::new(&store), AppConfig::default());
        press(&mut app, KeyCode::Char('?'));

        let screen = render(&app, 80, 15);
        assert!(screen.contains("Keybindings"));
    }

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 80, 15);
        let popup = centered_rect(area, 40, 16);
        assert_eq!(popup, Rect::new(20, 0, 40, 15));
        assert_eq!(area.intersection(popup), popup);
    }

    #[test]
    fn dashboard_shows_each_panel() {
        let store = MemoryStore::default();
        let app = App::new(Records::new(&store), AppConfig::default());

        let screen = render(&app, 100, 30);
        for text in ["Fajr", "Isha", "Habits", "Tasbeeh", "Virtue", "tadhkir"] {
            assert!(screen.contains(text), "missing {}", text);
        }
    }

    #[test]
    fn habit_popup_is_drawn() {
        let store = MemoryStore::default();
        let mut app = App::new(Records::new(&store), AppConfig::default());
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Walk");

        let screen = render(&app, 80, 15);
        assert!(screen.contains("New Habit"));
        assert!(screen.contains("Walk"));
    }

    #[test]
    fn focused_habit_is_scrolled_into_view() {
        let store = MemoryStore::default();
        let mut app = App::new(Records::new(&store), AppConfig::default());
        for i in 1..=15 {
            app.habits
                .add(&app.records, &format!("Habit {:02}", i), chrono::Utc::now())
                .unwrap();
        }
        app.focus_section = FocusSection::Habits;
        app.focus_idx = 14;

        let screen = render(&app, 80, 24);
        assert!(screen.contains("Habit 15"));
    }
}
