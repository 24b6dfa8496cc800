use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{Theme, BORDER_WALL, GLYPH_CELL, GLYPH_FOOD};
use crate::game::Game;
use crate::geometry::GridSquare;
use crate::ui::hud::render_hud;
use crate::ui::menu::render_game_over_menu;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, game: &Game, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, game.score.count(), theme);

    let block = Block::bordered()
        .border_set(BORDER_WALL)
        .border_style(Style::new().fg(theme.wall))
        .style(Style::new().bg(theme.field_bg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    if let Some(grid) = CellGrid::for_game(game) {
        render_squares(
            frame,
            inner,
            &grid,
            game.food.items(),
            GLYPH_FOOD,
            Style::new().fg(theme.food),
        );
        render_snake(frame, inner, &grid, game, theme);
    }

    if let Some(reason) = game.end_reason() {
        render_game_over_menu(frame, play_area, game.score.count(), reason, theme);
    }
}

/// Playable cells inside the wall ring, one per body step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct CellGrid {
    origin: i32,
    step: i32,
    columns: i32,
    rows: i32,
}

impl CellGrid {
    fn for_game(game: &Game) -> Option<Self> {
        let step = game.config().segment_size;
        if step <= 0 {
            return None;
        }

        let walls = game.border().walls();
        let right = walls.iter().map(|wall| wall.x).max()?;
        let bottom = walls.iter().map(|wall| wall.y).max()?;
        let origin = game.border().padding();

        Some(Self {
            origin,
            step,
            columns: ceil_div(right - origin, step).max(1),
            rows: ceil_div(bottom - origin, step).max(1),
        })
    }

    fn cell(&self, square: GridSquare) -> (i32, i32) {
        (
            (square.x - self.origin).div_euclid(self.step),
            (square.y - self.origin).div_euclid(self.step),
        )
    }
}

fn ceil_div(value: i32, step: i32) -> i32 {
    (value + step - 1).div_euclid(step)
}

fn render_squares(
    frame: &mut Frame<'_>,
    inner: Rect,
    grid: &CellGrid,
    squares: &[GridSquare],
    glyph: &str,
    style: Style,
) {
    let buffer = frame.buffer_mut();
    for square in squares {
        if let Some((x, y)) = cell_to_terminal(inner, grid, *square) {
            buffer.set_string(x, y, glyph, style);
        }
    }
}

fn render_snake(
    frame: &mut Frame<'_>,
    inner: Rect,
    grid: &CellGrid,
    game: &Game,
    theme: &Theme,
) {
    let buffer = frame.buffer_mut();

    // Tail first so the head wins when two segments share a cell.
    let segments: Vec<_> = game.snake.segments().copied().collect();
    for (index, segment) in segments.iter().enumerate().rev() {
        let Some((x, y)) = cell_to_terminal(inner, grid, *segment) else {
            continue;
        };

        let style = if index == 0 {
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(theme.snake_body)
        };
        buffer.set_string(x, y, GLYPH_CELL, style);
    }
}

/// Maps a square onto a terminal cell inside the walls.
///
/// Squares past the playable grid land on the wall row or column they
/// crossed into.
fn cell_to_terminal(inner: Rect, grid: &CellGrid, square: GridSquare) -> Option<(u16, u16)> {
    if inner.width == 0 || inner.height == 0 {
        return None;
    }

    let (column, row) = grid.cell(square);
    let x = axis_to_terminal(column, grid.columns, inner.x, inner.width)?;
    let y = axis_to_terminal(row, grid.rows, inner.y, inner.height)?;

    Some((x, y))
}

fn axis_to_terminal(cell: i32, cells: i32, start: u16, len: u16) -> Option<u16> {
    let offset = if cell < 0 {
        -1
    } else if cell >= cells {
        i64::from(len)
    } else {
        i64::from(cell) * i64::from(len) / i64::from(cells)
    };

    u16::try_from(i64::from(start) + offset).ok()
}
