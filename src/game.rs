use std::fmt;
use std::time::Instant;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::border::Border;
use crate::config::{FieldSize, GameConfig};
use crate::food::{random_free_square, FoodSpawner};
use crate::input::{direction_change_is_valid, InputState};
use crate::score::Score;
use crate::snake::Snake;

/// Why a round ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    BorderCollision,
    SnakeCollision,
}

impl EndReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BorderCollision => "border collision",
            Self::SnakeCollision => "snake collision",
        }
    }
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of the current round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RoundState {
    Active,
    Over(EndReason),
}

/// What the scheduler should do after an update.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum UpdateSignal {
    Continue,
    Quit,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct Game {
    pub snake: Snake,
    pub food: FoodSpawner,
    pub score: Score,
    pub round: RoundState,
    border: Border,
    config: GameConfig,
    rng: StdRng,
}

impl Game {
    /// Creates a game whose food placement is seeded from OS entropy.
    #[must_use]
    pub fn new(config: GameConfig, now: Instant) -> Self {
        Self::with_rng(config, StdRng::from_entropy(), now)
    }

    /// Creates a deterministic game for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64, now: Instant) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed), now)
    }

    fn with_rng(config: GameConfig, rng: StdRng, now: Instant) -> Self {
        let mut border = Border::new(config.border_padding, config.wall_width);
        border.ensure_walls(config.field);

        let game = Self {
            snake: Snake::new(&config),
            food: FoodSpawner::new(&config, now),
            score: Score::new(),
            round: RoundState::Active,
            border,
            config,
            rng,
        };

        info!(
            "round started: field {}x{}",
            game.config.field.width, game.config.field.height
        );
        game
    }

    /// Puts body, food and score back to their round-start values.
    pub fn restart(&mut self, now: Instant) {
        self.snake = Snake::new(&self.config);
        self.food.reset(now);
        self.score.reset();
        self.round = RoundState::Active;
        info!("round restarted");
    }

    /// Logical field size; the outer surface size does not affect it.
    pub fn layout(&mut self, _outer_width: u16, _outer_height: u16) -> FieldSize {
        self.border.ensure_walls(self.config.field);
        self.config.field
    }

    /// Advances the simulation by one tick.
    pub fn update(&mut self, input: &InputState, now: Instant) -> UpdateSignal {
        if input.quit_pressed {
            info!("game ended by player (score {})", self.score.count());
            return UpdateSignal::Quit;
        }

        if let RoundState::Over(_) = self.round {
            if input.restart_pressed {
                self.restart(now);
            }
            return UpdateSignal::Continue;
        }

        self.apply_directions(input);

        if self.border.collides(self.snake.head()) {
            self.end_round(EndReason::BorderCollision);
            return UpdateSignal::Continue;
        }

        if self.snake.collides_self(self.snake.next_head_square()) {
            self.end_round(EndReason::SnakeCollision);
            return UpdateSignal::Continue;
        }

        let moved = self.snake.advance(now);

        for item in self.food.collisions(self.snake.head()) {
            self.food.remove(item);
            self.score.increment();
            self.snake.queue_growth(1);
            debug!(
                "food eaten at ({}, {}), score {}, moved this tick: {moved}",
                item.x,
                item.y,
                self.score.count()
            );
        }

        if self.food.ready_to_drop(now) {
            self.drop_food(now);
        }

        UpdateSignal::Continue
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.round, RoundState::Over(_))
    }

    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        match self.round {
            RoundState::Over(reason) => Some(reason),
            RoundState::Active => None,
        }
    }

    #[must_use]
    pub fn border(&self) -> &Border {
        &self.border
    }

    #[must_use]
    pub fn field(&self) -> FieldSize {
        self.config.field
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // Held directions apply in poll order, each checked against the heading
    // left by the previous one.
    fn apply_directions(&mut self, input: &InputState) {
        for direction in input.held_directions() {
            let current = self.snake.direction();
            if direction != current && direction_change_is_valid(current, direction) {
                self.snake.set_direction(direction);
            }
        }
    }

    fn drop_food(&mut self, now: Instant) {
        match random_free_square(
            &mut self.rng,
            self.config.field,
            &self.snake,
            &self.food,
            &self.border,
        ) {
            Some(square) => {
                self.food.drop(square, now);
                debug!("food dropped at ({}, {})", square.x, square.y);
            }
            None => warn!("no free square for food, retrying next tick"),
        }
    }

    fn end_round(&mut self, reason: EndReason) {
        info!("game over: {reason} (score {})", self.score.count());
        self.round = RoundState::Over(reason);
    }
}
