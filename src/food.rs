use std::time::{Duration, Instant};

use rand::Rng;

use crate::border::Border;
use crate::config::{FieldSize, GameConfig, MAX_PLACEMENT_ATTEMPTS};
use crate::geometry::GridSquare;
use crate::snake::Snake;

/// Food items on the field plus the timer that rations new drops.
#[derive(Debug, Clone)]
pub struct FoodSpawner {
    items: Vec<GridSquare>,
    last_drop: Instant,
    redrop_interval: Duration,
    food_size: i32,
}

impl FoodSpawner {
    /// Creates an empty spawner whose drop timer starts at `now`.
    #[must_use]
    pub fn new(config: &GameConfig, now: Instant) -> Self {
        Self {
            items: Vec::new(),
            last_drop: now,
            redrop_interval: config.redrop_interval,
            food_size: config.food_size,
        }
    }

    /// Removes every item and restarts the drop timer.
    pub fn reset(&mut self, now: Instant) {
        self.items.clear();
        self.last_drop = now;
    }

    /// Returns true once the redrop interval has passed since the last drop.
    #[must_use]
    pub fn ready_to_drop(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_drop) >= self.redrop_interval
    }

    /// Adds food at the square's position, sized as food. Ignored while the
    /// redrop interval is still running.
    pub fn drop(&mut self, square: GridSquare, now: Instant) {
        if !self.ready_to_drop(now) {
            return;
        }

        self.items.push(GridSquare {
            size: self.food_size,
            ..square
        });
        self.last_drop = now;
    }

    /// All items overlapping `square`.
    #[must_use]
    pub fn collisions(&self, square: GridSquare) -> Vec<GridSquare> {
        self.items
            .iter()
            .copied()
            .filter(|item| item.collides(square))
            .collect()
    }

    /// Removes the first item equal to `square`, if any.
    pub fn remove(&mut self, square: GridSquare) {
        if let Some(index) = self.items.iter().position(|item| *item == square) {
            let _ = self.items.swap_remove(index);
        }
    }

    #[must_use]
    pub fn point_collides(&self, square: GridSquare) -> bool {
        self.items.iter().any(|item| item.collides(square))
    }

    #[must_use]
    pub fn items(&self) -> &[GridSquare] {
        &self.items
    }

    #[must_use]
    pub fn food_size(&self) -> i32 {
        self.food_size
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Endless stream of food-sized squares inside the border padding.
pub fn candidate_squares<'a, R: Rng + ?Sized>(
    rng: &'a mut R,
    field: FieldSize,
    padding: i32,
    size: i32,
) -> impl Iterator<Item = GridSquare> + 'a {
    let x_range = padding..(field.width - padding).max(padding + 1);
    let y_range = padding..(field.height - padding).max(padding + 1);

    std::iter::repeat_with(move || {
        GridSquare::new(
            rng.gen_range(x_range.clone()),
            rng.gen_range(y_range.clone()),
            size,
        )
    })
}

/// Picks a random square free of the body, other food and the walls.
///
/// Returns `None` after `MAX_PLACEMENT_ATTEMPTS` rejected candidates.
#[must_use]
pub fn random_free_square<R: Rng + ?Sized>(
    rng: &mut R,
    field: FieldSize,
    snake: &Snake,
    food: &FoodSpawner,
    border: &Border,
) -> Option<GridSquare> {
    candidate_squares(rng, field, border.padding(), food.food_size())
        .take(MAX_PLACEMENT_ATTEMPTS)
        .find(|candidate| {
            !snake.point_collides(*candidate)
                && !food.point_collides(*candidate)
                && !border.collides(*candidate)
        })
}
