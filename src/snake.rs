use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::config::GameConfig;
use crate::geometry::GridSquare;
use crate::input::Direction;

/// Segmented snake body with cadence-gated movement.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<GridSquare>,
    direction: Direction,
    cadence: Duration,
    last_advance: Option<Instant>,
    pending_growth: u32,
    segment_size: i32,
}

impl Snake {
    /// Creates the two-segment starting body near the top-left corner,
    /// facing right.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let size = config.segment_size;
        let padding = config.border_padding;
        let y = padding + 1 + size / 2;

        Self::from_segments(
            vec![
                GridSquare::new(3 * size + padding, y, size),
                GridSquare::new(2 * size + padding, y, size),
            ],
            Direction::Right,
            config.cadence,
        )
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// The segment size is taken from the head.
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(
        segments: Vec<GridSquare>,
        direction: Direction,
        cadence: Duration,
    ) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");
        let segment_size = segments[0].size;

        Self {
            body: VecDeque::from(segments),
            direction,
            cadence,
            last_advance: None,
            pending_growth: 0,
            segment_size,
        }
    }

    /// Overwrites the heading. Reversal filtering is the caller's job.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Returns the current head square.
    #[must_use]
    pub fn head(&self) -> GridSquare {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Where the head lands on the next advance.
    #[must_use]
    pub fn next_head_square(&self) -> GridSquare {
        self.head().stepped(self.direction, self.segment_size)
    }

    /// Returns true if `candidate_head` overlaps any segment except the
    /// current head.
    #[must_use]
    pub fn collides_self(&self, candidate_head: GridSquare) -> bool {
        self.body
            .iter()
            .skip(1)
            .any(|segment| segment.collides(candidate_head))
    }

    /// Returns true if `square` overlaps any segment, head included.
    #[must_use]
    pub fn point_collides(&self, square: GridSquare) -> bool {
        self.body.iter().any(|segment| segment.collides(square))
    }

    /// Moves one step if the cadence allows it, growing by one segment when
    /// growth is pending. Returns whether the body moved.
    pub fn advance(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_advance {
            if now.saturating_duration_since(last) < self.cadence {
                return false;
            }
        }

        let next_head = self.next_head_square();
        self.body.push_front(next_head);

        if self.pending_growth == 0 {
            let _ = self.body.pop_back();
        } else {
            self.pending_growth -= 1;
        }

        self.last_advance = Some(now);
        true
    }

    /// Queues `n` segments to be added on future advances.
    pub fn queue_growth(&mut self, n: u32) {
        self.pending_growth = self.pending_growth.saturating_add(n);
    }

    #[must_use]
    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &GridSquare> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::config::GameConfig;
    use crate::geometry::GridSquare;
    use crate::input::Direction;

    use super::Snake;

    const CADENCE: Duration = Duration::from_millis(100);

    fn square(x: i32, y: i32) -> GridSquare {
        GridSquare::new(x, y, 16)
    }

    fn two_segment_snake() -> Snake {
        Snake::from_segments(vec![square(68, 29), square(52, 29)], Direction::Right, CADENCE)
    }

    #[test]
    fn starting_body_has_two_segments_facing_right() {
        let snake = Snake::new(&GameConfig::default());

        let segments: Vec<_> = snake.segments().copied().collect();
        assert_eq!(segments, vec![square(68, 29), square(52, 29)]);
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.pending_growth(), 0);
    }

    #[test]
    fn first_advance_moves_immediately() {
        let mut snake = two_segment_snake();

        assert!(snake.advance(Instant::now()));
        assert_eq!(snake.head(), square(84, 29));
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn advance_before_cadence_is_a_no_op() {
        let start = Instant::now();
        let mut snake = two_segment_snake();
        assert!(snake.advance(start));
        let before: Vec<_> = snake.segments().copied().collect();

        assert!(!snake.advance(start + Duration::from_millis(99)));

        let after: Vec<_> = snake.segments().copied().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn advance_without_growth_slides_the_body() {
        let start = Instant::now();
        let mut snake = two_segment_snake();
        assert!(snake.advance(start));

        assert!(snake.advance(start + CADENCE));

        let segments: Vec<_> = snake.segments().copied().collect();
        assert_eq!(segments, vec![square(100, 29), square(84, 29)]);
    }

    #[test]
    fn advance_with_growth_keeps_the_tail() {
        let mut snake = two_segment_snake();
        snake.queue_growth(2);

        assert!(snake.advance(Instant::now()));

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.pending_growth(), 1);
        assert_eq!(snake.segments().last(), Some(&square(52, 29)));
    }

    #[test]
    fn next_head_follows_direction_without_moving() {
        let mut snake = two_segment_snake();
        snake.set_direction(Direction::Down);

        assert_eq!(snake.next_head_square(), square(68, 45));
        assert_eq!(snake.head(), square(68, 29));
    }

    #[test]
    fn self_collision_ignores_current_head() {
        let snake = two_segment_snake();

        assert!(!snake.collides_self(snake.head()));
        assert!(snake.collides_self(square(52, 29)));
        assert!(snake.point_collides(snake.head()));
    }

    #[test]
    fn turning_back_into_the_neck_collides() {
        let mut snake = two_segment_snake();
        snake.set_direction(Direction::Left);

        assert!(snake.collides_self(snake.next_head_square()));
    }

    #[test]
    fn point_collision_covers_every_segment() {
        let snake = two_segment_snake();

        assert!(snake.point_collides(GridSquare::new(45, 29, 4)));
        assert!(!snake.point_collides(GridSquare::new(100, 29, 4)));
    }
}
