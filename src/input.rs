use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Order in which held directions are applied within one frame.
    pub const POLL_ORDER: [Self; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Input sampled for a single frame.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct InputState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    pub restart_pressed: bool,
    pub quit_pressed: bool,
}

impl InputState {
    /// State with a single direction held.
    #[must_use]
    pub fn holding(direction: Direction) -> Self {
        let mut state = Self::default();
        state.hold(direction);
        state
    }

    /// State with only the restart key pressed.
    #[must_use]
    pub fn restart() -> Self {
        Self {
            restart_pressed: true,
            ..Self::default()
        }
    }

    /// State with only the quit key pressed.
    #[must_use]
    pub fn quit() -> Self {
        Self {
            quit_pressed: true,
            ..Self::default()
        }
    }

    pub fn hold(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
    }

    #[must_use]
    pub fn is_held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Held directions in application order.
    pub fn held_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::POLL_ORDER
            .into_iter()
            .filter(|direction| self.is_held(*direction))
    }

    fn apply_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('w' | 'W') => self.hold(Direction::Up),
            KeyCode::Down | KeyCode::Char('s' | 'S') => self.hold(Direction::Down),
            KeyCode::Left | KeyCode::Char('a' | 'A') => self.hold(Direction::Left),
            KeyCode::Right | KeyCode::Char('d' | 'D') => self.hold(Direction::Right),
            KeyCode::Char('r' | 'R' | ' ') if key.kind == KeyEventKind::Press => {
                self.restart_pressed = true;
            }
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => self.quit_pressed = true,
            _ => {}
        }
    }
}

/// Folds pending terminal key events into per-frame input state.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Drains every queued terminal event without blocking.
    pub fn poll_input(&mut self) -> io::Result<InputState> {
        let mut state = InputState::default();

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                state.apply_key(key);
            }
        }

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    use super::{direction_change_is_valid, Direction, InputState};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn reversal_is_not_a_valid_change() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(Direction::Down, Direction::Up));
        assert!(!direction_change_is_valid(
            Direction::Left,
            Direction::Right
        ));
        assert!(!direction_change_is_valid(
            Direction::Right,
            Direction::Left
        ));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
    }

    #[test]
    fn arrows_and_wasd_map_to_directions() {
        let mut state = InputState::default();
        state.apply_key(press(KeyCode::Char('w')));
        state.apply_key(press(KeyCode::Left));

        let held: Vec<_> = state.held_directions().collect();
        assert_eq!(held, vec![Direction::Left, Direction::Up]);
    }

    #[test]
    fn held_directions_follow_poll_order() {
        let mut state = InputState::default();
        state.hold(Direction::Up);
        state.hold(Direction::Right);
        state.hold(Direction::Down);

        let held: Vec<_> = state.held_directions().collect();
        assert_eq!(held, vec![Direction::Right, Direction::Down, Direction::Up]);
    }

    #[test]
    fn restart_and_quit_keys_are_recognised() {
        let mut state = InputState::default();
        state.apply_key(press(KeyCode::Char(' ')));
        assert!(state.restart_pressed);
        assert!(!state.quit_pressed);

        state.apply_key(press(KeyCode::Esc));
        assert!(state.quit_pressed);
    }

    #[test]
    fn released_keys_are_ignored() {
        let mut state = InputState::default();
        let mut release = press(KeyCode::Up);
        release.kind = KeyEventKind::Release;

        state.apply_key(release);

        assert_eq!(state, InputState::default());
    }
}
