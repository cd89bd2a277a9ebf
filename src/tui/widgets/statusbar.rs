use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, notice: Option<&str>) {
    if let Some(notice) = notice {
        let line = Line::from(Span::styled(notice, theme::amber()));
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        return;
    }

    let hints = [
        ("[Enter]", " cycle/toggle  "),
        ("[1-3]", " tasbeeh  "),
        ("[a]", " add habit  "),
        ("[n]", " next ayat  "),
        ("[f]", " favorite  "),
        ("[s]", " stats  "),
        ("[?]", " help  "),
        ("[Esc]", " quit"),
    ];

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(key, theme::gold()));
        spans.push(Span::styled(label, theme::dim()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
