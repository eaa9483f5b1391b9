//! Rules engine for the sliding-tile power-of-two merging puzzle
//!
//! Tiles slide toward an edge on each directional move, equal neighbours merge
//! into the next power of two at most once per move, and a new tile spawns
//! after every move that changed the grid. A small terminal front end drives
//! the engine for interactive and automated play.

#![forbid(unsafe_code)]

/// Grid state machine: tiles, line moves, spawning and the grid engine
pub mod board;
/// Input/output operations, configuration and error handling
pub mod io;

pub use board::{Direction, GridConfig, GridEngine, MoveResult, Tile};
pub use io::error::{GridError, Result};
