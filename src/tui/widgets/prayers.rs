use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

use crate::models::{DailyPrayers, PrayerSummary};
use crate::tui::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    day: &DailyPrayers,
    summary: &PrayerSummary,
    focused_idx: usize,
    focused: bool,
) {
    let title = format!("Prayers · {}/5 on time", summary.on_time());
    let block = theme::panel(&title, focused);

    let items: Vec<ListItem> = day
        .prayers
        .iter()
        .enumerate()
        .map(|(i, (name, status))| {
            let is_focused = focused && i == focused_idx;
            let (icon, status_style) = theme::prayer_status(status);

            let name_style = if is_focused {
                theme::gold().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };
            let cursor = if is_focused { "›" } else { " " };

            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} {:<9}", cursor, name.display_name()), name_style),
                Span::styled(icon, status_style),
                Span::styled(format!("  {}", status.label()), theme::dim()),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
