use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;

/// Renders the score row and returns the play area below it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) -> Rect {
    let [score_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(score_text(score)))
            .alignment(Alignment::Right)
            .style(
                Style::new()
                    .fg(theme.hud_score)
                    .bg(theme.field_bg)
                    .add_modifier(Modifier::BOLD),
            ),
        score_area,
    );

    play_area
}

fn score_text(score: u32) -> String {
    format!("score: {score} ")
}

#[cfg(test)]
mod tests {
    use super::score_text;

    #[test]
    fn score_text_shows_count() {
        assert_eq!(score_text(12), "score: 12 ");
    }
}
