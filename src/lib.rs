//! Grid-based snake: a cadence-gated body on a walled field, food dropped on
//! a timer, and overlap tests between centred squares of any size.

pub mod border;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod geometry;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
