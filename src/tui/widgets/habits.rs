use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::Habit;
use crate::tui::theme;
use crate::utils::format::{progress_bar, truncate};

/// Streak bars fill up over this many days.
const STREAK_BAR_DAYS: u32 = 30;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    habits: &[Habit],
    today_key: &str,
    focused_idx: usize,
    focused: bool,
) {
    let block = theme::panel("Habits", focused);

    if habits.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("  No habits yet  ·  [a] add one", theme::dim())),
        ])
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let name_width = (area.width as usize).saturating_sub(30).max(8);

    let items: Vec<ListItem> = habits
        .iter()
        .enumerate()
        .map(|(i, habit)| {
            let is_focused = focused && i == focused_idx;
            let (icon, icon_style) = if habit.is_completed_on(today_key) {
                ("✓", theme::green().add_modifier(Modifier::BOLD))
            } else {
                ("○", theme::dim())
            };
            let name_style = if is_focused {
                theme::gold().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };
            let cursor = if is_focused { "›" } else { " " };

            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", cursor), name_style),
                Span::styled(icon, icon_style),
                Span::styled(
                    format!(" {:<width$} ", truncate(&habit.name, name_width), width = name_width),
                    name_style,
                ),
                Span::styled(
                    progress_bar(habit.streak.min(STREAK_BAR_DAYS), STREAK_BAR_DAYS, 10),
                    theme::green(),
                ),
                Span::styled(format!(" {}d", habit.streak), theme::dim()),
            ]))
        })
        .collect();

    // Keeps the focused habit scrolled into view
    let mut state = ListState::default().with_selected(focused.then_some(focused_idx));
    frame.render_stateful_widget(List::new(items).block(block), area, &mut state);
}
