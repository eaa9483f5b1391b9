//! Random tile rolls for initial seeding and post-move spawns
//!
//! Every roll draws an integer in `0..ROLL_RANGE` from the injected generator
//! and compares it against the thresholds carried by [`GridConfig`].

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::board::grid::GridConfig;
use crate::board::tile::Tile;
use crate::io::configuration::ROLL_RANGE;

fn roll<R: Rng>(rng: &mut R) -> u32 {
    rng.random_range(0..ROLL_RANGE)
}

/// Roll the starting content of one cell
///
/// Rolls above `seed_two_above` give a 2, rolls above `seed_four_above` (and
/// not above `seed_two_above`) give a 4, everything else stays empty.
pub fn initial_tile<R: Rng>(rng: &mut R, config: &GridConfig) -> Tile {
    let r = roll(rng);
    if r > config.seed_two_above {
        Tile::TWO
    } else if r > config.seed_four_above {
        Tile::FOUR
    } else {
        Tile::EMPTY
    }
}

/// Roll the rank of a freshly spawned tile
pub fn spawn_tile<R: Rng>(rng: &mut R, config: &GridConfig) -> Tile {
    if roll(rng) > config.spawn_four_above {
        Tile::FOUR
    } else {
        Tile::TWO
    }
}

/// Pick one position uniformly from the candidates
pub fn choose_cell<R: Rng>(rng: &mut R, cells: &[(usize, usize)]) -> Option<(usize, usize)> {
    cells.choose(rng).copied()
}
