//! Game constants and runtime configuration defaults

// Grid dimensions
/// Side length used when none is given
pub const DEFAULT_GRID_SIZE: usize = 4;

// Keeps snapshots and rendered output to a sensible size
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 64;

// Random rolls are integers drawn from 0..ROLL_RANGE
/// Exclusive upper bound of every random roll
pub const ROLL_RANGE: u32 = 100;

/// Initial seeding rolls above this produce a 2 (about 15%)
pub const SEED_TWO_ABOVE: u32 = 85;

/// Initial seeding rolls above this, up to [`SEED_TWO_ABOVE`], produce a 4 (about 10%)
pub const SEED_FOUR_ABOVE: u32 = 75;

/// Spawn rolls above this produce a 4, otherwise a 2
pub const SPAWN_FOUR_ABOVE: u32 = 50;

// Autoplay settings
/// Move limit per automated game before it is abandoned
pub const DEFAULT_AUTOPLAY_MOVE_LIMIT: usize = 100_000;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
