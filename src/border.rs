use crate::config::FieldSize;
use crate::geometry::GridSquare;

/// Rectangular ring of wall pieces around the play area.
///
/// Pieces are generated once for a field size and kept until cleared.
#[derive(Debug, Clone)]
pub struct Border {
    padding: i32,
    wall_width: i32,
    walls: Vec<GridSquare>,
}

impl Border {
    #[must_use]
    pub fn new(padding: i32, wall_width: i32) -> Self {
        Self {
            padding,
            wall_width,
            walls: Vec::new(),
        }
    }

    /// Generates the ring for `field` unless it already exists.
    pub fn ensure_walls(&mut self, field: FieldSize) {
        if self.walls.is_empty() {
            self.walls = self.generate(field);
        }
    }

    /// Drops the generated ring so the next `ensure_walls` rebuilds it.
    pub fn clear(&mut self) {
        self.walls.clear();
    }

    /// Returns true if `square` overlaps any wall piece.
    #[must_use]
    pub fn collides(&self, square: GridSquare) -> bool {
        self.walls.iter().any(|wall| wall.collides(square))
    }

    /// Wall pieces in ring order, starting at the top-left corner.
    #[must_use]
    pub fn walls(&self) -> &[GridSquare] {
        &self.walls
    }

    #[must_use]
    pub fn padding(&self) -> i32 {
        self.padding
    }

    // Walk top →, right ↓, bottom ←, left ↑.
    fn generate(&self, field: FieldSize) -> Vec<GridSquare> {
        let step = self.wall_width;
        let mut piece = GridSquare::new(self.padding, self.padding, step);
        let mut walls = vec![piece];
        if step <= 0 {
            return walls;
        }

        while piece.x < field.width - self.padding {
            piece.x += step;
            walls.push(piece);
        }

        while piece.y <= field.height - self.padding {
            piece.y += step;
            walls.push(piece);
        }

        while piece.x >= self.padding {
            piece.x -= step;
            walls.push(piece);
        }

        while piece.y > self.padding {
            piece.y -= step;
            walls.push(piece);
        }

        walls
    }
}
