use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::AchievementLevel;
use crate::tui::theme;
use crate::utils::format::progress_bar;

pub struct VirtueView {
    pub today: u32,
    pub weekly: u32,
    pub weekly_goal: u32,
    pub weekly_percent: u32,
    pub level: AchievementLevel,
}

pub fn render(frame: &mut Frame, area: Rect, view: &VirtueView) {
    let block = theme::panel("Virtue", false);

    let lines = vec![
        Line::from(vec![
            Span::styled("  Level  ", theme::dim()),
            Span::styled(
                view.level.as_str(),
                theme::gold().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("   today {} pts", view.today), theme::dim()),
        ]),
        Line::from(vec![
            Span::styled("  Week   ", theme::dim()),
            Span::styled(
                progress_bar(view.weekly, view.weekly_goal, 12),
                theme::green(),
            ),
            Span::styled(
                format!(" {}/{}  {}%", view.weekly, view.weekly_goal, view.weekly_percent),
                theme::dim(),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {}", view.level.motivation()),
            theme::dim(),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
