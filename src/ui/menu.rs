use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::EndReason;

const POPUP_PADDING_X: u16 = 4;

/// Draws the game-over overlay as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    reason: EndReason,
    theme: &Theme,
) {
    let body = [
        String::new(),
        format!("Cause: {reason}"),
        format!("Score: {score}"),
        String::new(),
        "press r to restart".to_owned(),
        "press esc to quit".to_owned(),
    ];

    let content_width = body
        .iter()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .max()
        .unwrap_or(0);
    let width = u16::try_from(content_width)
        .unwrap_or(u16::MAX)
        .saturating_add(2 * POPUP_PADDING_X + 2);
    let height = u16::try_from(body.len()).unwrap_or(u16::MAX).saturating_add(3);

    let popup = centered_popup(area, width, height);
    frame.render_widget(Clear, popup);

    let block = Block::bordered().style(Style::new().bg(theme.field_bg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [title_row, body_rows] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    frame.render_widget(
        Paragraph::new(Line::from("game over"))
            .alignment(Alignment::Center)
            .style(
                Style::new()
                    .fg(theme.game_over_title)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let lines: Vec<Line<'_>> = body.into_iter().map(Line::from).collect();
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.game_over_hint)),
        body_rows,
    );
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [mid] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);

    let [center] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(mid);

    center
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::centered_popup;

    #[test]
    fn popup_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 80, 24);

        let popup = centered_popup(area, 30, 10);
        assert_eq!(popup, Rect::new(25, 7, 30, 10));

        let clamped = centered_popup(Rect::new(0, 0, 20, 5), 30, 10);
        assert_eq!(clamped, Rect::new(0, 0, 20, 5));
    }
}
