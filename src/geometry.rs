use crate::input::Direction;

/// Axis-aligned square centred on `(x, y)` with side length `size`.
///
/// Body segments, food and wall pieces are all squares; sizes may differ
/// between kinds, which is why overlap is not plain equality.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct GridSquare {
    pub x: i32,
    pub y: i32,
    pub size: i32,
}

impl GridSquare {
    #[must_use]
    pub const fn new(x: i32, y: i32, size: i32) -> Self {
        Self { x, y, size }
    }

    /// Returns true when the two squares overlap.
    #[must_use]
    pub fn collides(self, other: Self) -> bool {
        collides(self, other)
    }

    /// Returns this square moved one `step` towards `direction`.
    ///
    /// Screen coordinates: `y` grows downwards.
    #[must_use]
    pub fn stepped(self, direction: Direction, step: i32) -> Self {
        let (dx, dy) = match direction {
            Direction::Up => (0, -step),
            Direction::Down => (0, step),
            Direction::Left => (-step, 0),
            Direction::Right => (step, 0),
        };

        Self {
            x: self.x + dx,
            y: self.y + dy,
            size: self.size,
        }
    }
}

/// Centre distance below which two squares of the given sizes overlap.
///
/// Each half is truncated independently.
#[must_use]
pub const fn collision_threshold(a_size: i32, b_size: i32) -> i32 {
    a_size / 2 + b_size / 2
}

/// Overlap test on centred squares; strict on both axes and symmetric.
#[must_use]
pub fn collides(a: GridSquare, b: GridSquare) -> bool {
    let threshold = collision_threshold(a.size, b.size);
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();

    dx < threshold && dy < threshold
}
