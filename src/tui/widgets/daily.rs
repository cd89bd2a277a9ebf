use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::models::{Ayat, Intention};
use crate::tui::theme;

/// Ayat and intention for the day, plus the user's own intention if set.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    ayat: Option<&Ayat>,
    favorite: bool,
    intention: Option<&Intention>,
    custom_intention: Option<&str>,
) {
    let block = theme::panel("Today", false);
    let mut lines = Vec::new();

    match ayat {
        Some(ayat) => {
            lines.push(Line::from(vec![
                Span::styled(format!(" {}", ayat.reference()), theme::gold()),
                Span::styled(if favorite { "  ♥" } else { "" }, theme::red()),
            ]));
            lines.push(Line::from(Span::styled(
                format!(" {}", ayat.arabic_text),
                theme::amber(),
            )));
            lines.push(Line::from(Span::styled(
                format!(" \"{}\"", ayat.translation),
                theme::bold().add_modifier(Modifier::ITALIC),
            )));
        }
        None => lines.push(Line::from(Span::styled(" No ayat", theme::dim()))),
    }

    lines.push(Line::from(""));
    if let Some(intention) = intention {
        lines.push(Line::from(vec![
            Span::styled(" Intention  ", theme::gold()),
            Span::styled(intention.text, theme::base()),
        ]));
    }
    if let Some(custom) = custom_intention {
        lines.push(Line::from(vec![
            Span::styled(" Yours      ", theme::gold()),
            Span::styled(custom.to_string(), theme::bold()),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
