//! Grid engine owning the tile matrix and its move, spawn and query operations
//!
//! The grid is a square `Array2<Tile>` that never leaves the engine by
//! reference: snapshots are copied out and all mutation goes through the
//! directional moves and [`GridEngine::generate_cell`]. The random source is
//! injected so games can be replayed from a seed.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::line::{Direction, has_adjacent_merge, shift_lines};
use crate::board::spawn::{choose_cell, initial_tile, spawn_tile};
use crate::board::tile::Tile;
use crate::io::configuration::{
    DEFAULT_GRID_SIZE, MAX_GRID_DIMENSION, ROLL_RANGE, SEED_FOUR_ABOVE, SEED_TWO_ABOVE,
    SPAWN_FOUR_ABOVE,
};
use crate::io::error::{GridError, Result, invalid_parameter};

/// Construction-time parameters of a grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Side length of the square grid
    pub size: usize,
    /// Initial seeding rolls above this value produce a 2
    pub seed_two_above: u32,
    /// Initial seeding rolls above this value (and not above `seed_two_above`) produce a 4
    pub seed_four_above: u32,
    /// Spawn rolls above this value produce a 4 instead of a 2
    pub spawn_four_above: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::with_size(DEFAULT_GRID_SIZE)
    }
}

impl GridConfig {
    /// Default probabilities for a grid of the given size
    pub const fn with_size(size: usize) -> Self {
        Self {
            size,
            seed_two_above: SEED_TWO_ABOVE,
            seed_four_above: SEED_FOUR_ABOVE,
            spawn_four_above: SPAWN_FOUR_ABOVE,
        }
    }

    /// Check size bounds and threshold ordering
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`] naming the first offending field
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }

        for (parameter, value) in [
            ("seed_two_above", self.seed_two_above),
            ("seed_four_above", self.seed_four_above),
            ("spawn_four_above", self.spawn_four_above),
        ] {
            if value >= ROLL_RANGE {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be below {ROLL_RANGE}"),
                ));
            }
        }

        if self.seed_four_above > self.seed_two_above {
            return Err(invalid_parameter(
                "seed_four_above",
                &self.seed_four_above,
                &"must not exceed seed_two_above",
            ));
        }

        Ok(())
    }
}

/// Outcome of a single directional move
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveResult {
    /// At least one tile slid or merged
    pub changed: bool,
}

/// Square grid of tiles with the puzzle's move and spawn rules
#[derive(Debug, Clone)]
pub struct GridEngine<R = StdRng> {
    cells: Array2<Tile>,
    config: GridConfig,
    rng: R,
    moved: bool,
}

impl GridEngine<StdRng> {
    /// Randomly seeded grid using an OS-seeded generator
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero or above the maximum dimension
    pub fn new(size: usize) -> Result<Self> {
        Self::with_config(GridConfig::with_size(size), StdRng::from_os_rng())
    }

    /// Randomly seeded grid with a reproducible generator
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero or above the maximum dimension
    pub fn with_seed(size: usize, seed: u64) -> Result<Self> {
        Self::with_config(GridConfig::with_size(size), StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GridEngine<R> {
    /// Build a grid whose cells are each rolled independently
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn with_config(config: GridConfig, mut rng: R) -> Result<Self> {
        config.validate()?;

        let cells = Array2::from_shape_fn((config.size, config.size), |_| {
            initial_tile(&mut rng, &config)
        });

        let engine = Self {
            cells,
            config,
            rng,
            moved: false,
        };
        log::debug!(
            "Created {0}x{0} grid with {1} seeded tiles",
            config.size,
            engine.tile_count()
        );
        Ok(engine)
    }

    /// Build a grid from an explicit square layout without random seeding
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is empty, too large or not square
    pub fn from_rows(rows: &[Vec<Tile>], rng: R) -> Result<Self> {
        let size = rows.len();
        let config = GridConfig::with_size(size);
        config.validate()?;

        if let Some((row, line)) = rows.iter().enumerate().find(|(_, line)| line.len() != size) {
            return Err(GridError::NonSquareGrid {
                rows: size,
                row,
                len: line.len(),
            });
        }

        let flat: Vec<Tile> = rows.iter().flatten().copied().collect();
        let cells = Array2::from_shape_vec((size, size), flat).map_err(|error| {
            invalid_parameter("rows", &size, &format!("cannot form grid: {error}"))
        })?;

        Ok(Self {
            cells,
            config,
            rng,
            moved: false,
        })
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.config.size
    }

    /// Parameters the grid was built with
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Row-major copy of the current layout
    pub fn rows(&self) -> Vec<Vec<Tile>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Tile at a position, `None` when out of bounds
    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells.get((row, col)).copied()
    }

    /// Whether at least one cell is empty
    pub fn has_space(&self) -> bool {
        self.cells.iter().any(|tile| tile.is_empty())
    }

    /// Positions of all empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .indexed_iter()
            .filter(|(_, tile)| tile.is_empty())
            .map(|(position, _)| position)
            .collect()
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|tile| !tile.is_empty()).count()
    }

    /// Whether the most recent move changed the grid
    ///
    /// Cleared again by [`Self::generate_cell`].
    pub const fn moved(&self) -> bool {
        self.moved
    }

    /// Whether any direction would still change the grid
    ///
    /// A grid holding both tiles and gaps can always slide somewhere; a full
    /// grid needs a mergeable neighbour pair. An empty grid is stuck.
    pub fn can_move(&self) -> bool {
        let tiles = self.tile_count();
        (tiles > 0 && tiles < self.cells.len())
            || self
                .cells
                .rows()
                .into_iter()
                .chain(self.cells.columns())
                .any(has_adjacent_merge)
    }

    /// Directions that would change the grid, in [`Direction::ALL`] order
    pub fn legal_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| {
                let mut probe = self.cells.clone();
                shift_lines(&mut probe, direction)
            })
            .collect()
    }

    /// Highest tile on the grid
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(Tile::EMPTY)
    }

    /// Whether a maximum-rank tile has been produced
    pub fn has_reached_max(&self) -> bool {
        self.max_tile() == Tile::MAX
    }

    /// Slide and merge every line toward the edge of `direction`
    pub fn shift(&mut self, direction: Direction) -> MoveResult {
        let changed = shift_lines(&mut self.cells, direction);
        self.moved = changed;
        log::trace!("Move {direction:?} changed={changed}");
        MoveResult { changed }
    }

    /// Move all tiles toward column 0
    pub fn left(&mut self) -> MoveResult {
        self.shift(Direction::Left)
    }

    /// Move all tiles toward the last column
    pub fn right(&mut self) -> MoveResult {
        self.shift(Direction::Right)
    }

    /// Move all tiles toward row 0
    pub fn up(&mut self) -> MoveResult {
        self.shift(Direction::Up)
    }

    /// Move all tiles toward the last row
    pub fn down(&mut self) -> MoveResult {
        self.shift(Direction::Down)
    }

    /// Place a 2 or a 4 in a uniformly chosen empty cell
    ///
    /// Returns the position that was filled and clears the moved flag.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NoEmptyCells`] if the grid is full; the grid is
    /// left untouched
    pub fn generate_cell(&mut self) -> Result<(usize, usize)> {
        let empty = self.empty_cells();
        let Some(position) = choose_cell(&mut self.rng, &empty) else {
            return Err(GridError::NoEmptyCells {
                grid_dimensions: self.cells.dim(),
            });
        };
        let tile = spawn_tile(&mut self.rng, &self.config);

        if let Some(cell) = self.cells.get_mut(position) {
            *cell = tile;
        }
        self.moved = false;

        log::debug!(
            "Spawned {tile} at ({}, {}), {} empty cells left",
            position.0,
            position.1,
            empty.len().saturating_sub(1)
        );
        Ok(position)
    }
}
