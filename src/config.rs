use std::time::Duration;

use ratatui::style::Color;
use ratatui::symbols::border;
use thiserror::Error;

use crate::geometry::collision_threshold;

/// Logical field dimensions, in the same units as square coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FieldSize {
    pub width: i32,
    pub height: i32,
}

/// Default logical field width and height.
pub const DEFAULT_FIELD_SIZE: FieldSize = FieldSize {
    width: 960,
    height: 960,
};

/// Distance from the field edge to the wall ring.
pub const DEFAULT_BORDER_PADDING: i32 = 20;

/// Spacing (and size) of wall pieces.
pub const DEFAULT_WALL_WIDTH: i32 = 2;

/// Body segment size; also the distance travelled per advance.
pub const DEFAULT_SEGMENT_SIZE: i32 = 16;

pub const DEFAULT_FOOD_SIZE: i32 = 16;

/// Minimum time between two body advances.
pub const DEFAULT_CADENCE: Duration = Duration::from_millis(100);

/// Minimum time between two food drops.
pub const DEFAULT_REDROP_INTERVAL: Duration = Duration::from_secs(1);

/// Target period of the update/draw loop.
pub const DEFAULT_FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Upper bound on random candidates tried per food drop.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Rejected game configuration.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: i32 },
    #[error("field {width}x{height} cannot hold the starting snake inside the border")]
    FieldTooSmall { width: i32, height: i32 },
    #[error(
        "a {segment_size} step can cross {wall_width} wide walls without touching them"
    )]
    WallsCrossable { segment_size: i32, wall_width: i32 },
}

/// Tunables for one game session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub field: FieldSize,
    pub border_padding: i32,
    pub wall_width: i32,
    pub segment_size: i32,
    pub food_size: i32,
    pub cadence: Duration,
    pub redrop_interval: Duration,
    pub frame_period: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field: DEFAULT_FIELD_SIZE,
            border_padding: DEFAULT_BORDER_PADDING,
            wall_width: DEFAULT_WALL_WIDTH,
            segment_size: DEFAULT_SEGMENT_SIZE,
            food_size: DEFAULT_FOOD_SIZE,
            cadence: DEFAULT_CADENCE,
            redrop_interval: DEFAULT_REDROP_INTERVAL,
            frame_period: DEFAULT_FRAME_PERIOD,
        }
    }
}

impl GameConfig {
    /// Checks that the configuration yields a playable field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("field width", self.field.width),
            ("field height", self.field.height),
            ("wall width", self.wall_width),
            ("segment size", self.segment_size),
            ("food size", self.food_size),
        ] {
            if value <= 0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.border_padding < 0 {
            return Err(ConfigError::NonPositive {
                name: "border padding",
                value: self.border_padding,
            });
        }

        // Integer centre positions a wall piece reacts to along one axis.
        let band = 2 * collision_threshold(self.segment_size, self.wall_width) - 1;
        if self.segment_size > band || self.wall_width > band {
            return Err(ConfigError::WallsCrossable {
                segment_size: self.segment_size,
                wall_width: self.wall_width,
            });
        }

        // Head of the starting body plus one clear step before the far walls.
        let head_x = 3 * self.segment_size + self.border_padding;
        let head_y = self.border_padding + 1 + self.segment_size / 2;
        let reach = collision_threshold(self.segment_size, self.wall_width);
        if head_x + self.segment_size + reach > self.field.width - self.border_padding
            || head_y + reach > self.field.height - self.border_padding
        {
            return Err(ConfigError::FieldTooSmall {
                width: self.field.width,
                height: self.field.height,
            });
        }

        Ok(())
    }
}

/// Colours applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub field_bg: Color,
    pub wall: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub hud_score: Color,
    pub game_over_title: Color,
    pub game_over_hint: Color,
}

/// Green snake on a deep blue field.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    field_bg: Color::Rgb(0, 64, 128),
    wall: Color::Black,
    snake_head: Color::White,
    snake_body: Color::Rgb(100, 255, 100),
    food: Color::Rgb(255, 100, 100),
    hud_score: Color::White,
    game_over_title: Color::Rgb(255, 100, 100),
    game_over_hint: Color::White,
};

/// Glyph used for every occupied cell.
pub const GLYPH_CELL: &str = "█";

/// Glyph used for food cells.
pub const GLYPH_FOOD: &str = "●";

/// Solid border drawn one cell outside the playable grid.
pub const BORDER_WALL: border::Set = border::Set {
    top_left: "█",
    top_right: "█",
    bottom_left: "█",
    bottom_right: "█",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "█",
    horizontal_bottom: "█",
};

#[cfg(test)]
mod tests {
    use super::{ConfigError, FieldSize, GameConfig};

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_segment_size_is_rejected() {
        let config = GameConfig {
            segment_size: 0,
            ..GameConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "segment size",
                value: 0
            })
        );
    }

    #[test]
    fn thin_walls_with_large_steps_are_rejected() {
        let config = GameConfig {
            segment_size: 16,
            wall_width: 1,
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::WallsCrossable { .. })
        ));
    }

    #[test]
    fn tiny_field_is_rejected() {
        let config = GameConfig {
            field: FieldSize {
                width: 100,
                height: 100,
            },
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::FieldTooSmall { .. })
        ));
    }
}
