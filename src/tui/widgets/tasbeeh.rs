use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::Dhikr;
use crate::tracker::TasbeehCounter;
use crate::tui::theme;
use crate::utils::format::progress_bar;

pub fn render(frame: &mut Frame, area: Rect, counter: &TasbeehCounter) {
    let block = theme::panel("Tasbeeh", false);

    let mut lines = Vec::new();
    for (i, dhikr) in Dhikr::all().into_iter().enumerate() {
        let count = counter.count(dhikr);
        let target = counter.target(dhikr);
        let bar_style = if counter.is_complete(dhikr) {
            theme::green().add_modifier(Modifier::BOLD)
        } else {
            theme::amber()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  [{}] ", i + 1), theme::gold()),
            Span::styled(format!("{:<14}", dhikr.display_name()), theme::bold()),
            Span::styled(progress_bar(count, target, 10), bar_style),
            Span::styled(format!(" {:>3}/{:<3}", count, target), theme::dim()),
            Span::styled(format!(" {:>3}%", counter.progress(dhikr)), theme::dim()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
