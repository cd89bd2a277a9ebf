use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use crate::models::PrayerStatus;

pub const BG: Color = Color::Rgb(18, 16, 14);
pub const SURFACE: Color = Color::Rgb(28, 25, 20);
pub const BORDER: Color = Color::Rgb(55, 48, 36);
pub const TEXT: Color = Color::Rgb(230, 218, 196);
pub const TEXT_DIM: Color = Color::Rgb(130, 118, 96);
pub const GOLD: Color = Color::Rgb(196, 160, 68);
pub const GREEN: Color = Color::Rgb(92, 148, 92);
pub const TEAL: Color = Color::Rgb(72, 150, 140);
pub const AMBER: Color = Color::Rgb(210, 138, 60);
pub const RED: Color = Color::Rgb(180, 82, 62);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn gold() -> Style {
    Style::default().fg(GOLD)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

/// Icon and colour for each step of the prayer status ring.
pub fn prayer_status(status: PrayerStatus) -> (&'static str, Style) {
    match status {
        PrayerStatus::Jamaat => ("◉", Style::default().fg(TEAL).add_modifier(Modifier::BOLD)),
        PrayerStatus::Performed => ("●", green()),
        PrayerStatus::Qadha => ("◑", amber()),
        PrayerStatus::Missed => ("○", dim()),
    }
}

/// Rounded panel used by every dashboard section.
pub fn panel(title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .title(ratatui::text::Span::styled(format!(" {} ", title), gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            gold()
        } else {
            Style::default().fg(BORDER)
        })
        .style(surface())
}
