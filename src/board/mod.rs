//! Grid state machine for the sliding-tile merging puzzle
//!
//! This module contains the rules engine:
//! - Tile ranks and promotion
//! - Line traversal and the slide-and-merge algorithm
//! - Random seeding and spawning
//! - The grid engine tying them together

/// Grid engine with move, spawn and query operations
pub mod grid;
/// Directional line traversal and the per-line move algorithm
pub mod line;
/// Random tile and cell selection
pub mod spawn;
/// Tile rank representation
pub mod tile;

pub use grid::{GridConfig, GridEngine, MoveResult};
pub use line::Direction;
pub use tile::Tile;
