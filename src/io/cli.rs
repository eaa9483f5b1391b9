//! Command-line front end for interactive and automated play
//!
//! Interactive play reads lines of keys, applies each move to the grid,
//! spawns a tile after every move that changed something and prints the new
//! layout. Autoplay drives many games with random legal moves and reports how
//! far they got.

use crate::board::grid::{GridConfig, GridEngine};
use crate::board::tile::Tile;
use crate::io::command::{Command, parse_commands};
use crate::io::configuration::{DEFAULT_AUTOPLAY_MOVE_LIMIT, DEFAULT_GRID_SIZE, PROGRESS_BAR_WIDTH};
use crate::io::display::render_rows;
use crate::io::error::{Result, WithOperation};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::collections::BTreeMap;
use std::fmt;
use std::io::{BufRead, Write};
use std::sync::LazyLock;

#[derive(Parser, Debug)]
#[command(name = "mergegrid")]
#[command(author, version, about = "Slide and merge power-of-two tiles on a square grid")]
/// Command-line arguments for the puzzle
pub struct Cli {
    /// Side length of the grid
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Random seed for reproducible games
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Play this many games with random legal moves instead of reading keys
    #[arg(short, long, value_name = "GAMES")]
    pub autoplay: Option<usize>,

    /// Moves after which an automated game is abandoned
    #[arg(short, long, default_value_t = DEFAULT_AUTOPLAY_MOVE_LIMIT)]
    pub max_moves: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Why an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The player pressed the quit key
    Quit,
    /// No direction changes the grid any more
    Stuck,
    /// Input ran out before either of the above
    InputClosed,
}

/// Aggregate results of automated games
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoplaySummary {
    /// Number of games played
    pub games: usize,
    /// Grid-changing moves across all games
    pub total_moves: usize,
    /// How many games finished with each highest tile
    pub max_tiles: BTreeMap<Tile, usize>,
}

impl AutoplaySummary {
    fn record(&mut self, max_tile: Tile, moves: usize) {
        self.games += 1;
        self.total_moves += moves;
        *self.max_tiles.entry(max_tile).or_insert(0) += 1;
    }

    /// Games whose highest tile was at least `tile`
    pub fn games_reaching(&self, tile: Tile) -> usize {
        self.max_tiles.range(tile..).map(|(_, count)| count).sum()
    }
}

impl fmt::Display for AutoplaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Played {} games, {} moves",
            self.games, self.total_moves
        )?;
        for (tile, count) in self.max_tiles.iter().rev() {
            writeln!(f, "  {tile:>5}: {count}")?;
        }
        Ok(())
    }
}

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Games: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Runs games according to CLI arguments
pub struct GameRunner {
    cli: Cli,
}

impl GameRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Play interactively on stdin/stdout, or autoplay when requested
    ///
    /// # Errors
    ///
    /// Returns an error if the grid size is invalid or terminal I/O fails
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();

        if let Some(games) = self.cli.autoplay {
            let summary = self.autoplay(games)?;
            write!(stdout.lock(), "{summary}").with_operation("write summary")?;
            return Ok(());
        }

        let outcome = self.play(std::io::stdin().lock(), stdout.lock())?;
        log::info!("Session ended: {outcome:?}");
        Ok(())
    }

    /// Build the engine for the given game number
    ///
    /// Seeded runs derive one seed per game so every game differs but the
    /// whole run is reproducible.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured size is invalid
    pub fn new_engine(&self, game: u64) -> Result<GridEngine> {
        let rng = match self.cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(game)),
            None => StdRng::from_os_rng(),
        };
        GridEngine::with_config(GridConfig::with_size(self.cli.size), rng)
    }

    /// Read keys from `input` and play until quit, stuck or end of input
    ///
    /// The board is written to `output` at the start and after every move
    /// that changed it.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot be built or reading/writing fails
    pub fn play<B: BufRead, W: Write>(&self, input: B, mut output: W) -> Result<SessionOutcome> {
        let mut engine = self.new_engine(0)?;
        let mut announced_max = engine.has_reached_max();
        write_board(&mut output, &engine)?;

        if !engine.can_move() {
            writeln!(output, "No moves left").with_operation("write board")?;
            return Ok(SessionOutcome::Stuck);
        }

        for line in input.lines() {
            let line = line.with_operation("read commands")?;

            for command in parse_commands(&line) {
                let direction = match command {
                    Command::Quit => return Ok(SessionOutcome::Quit),
                    Command::Move(direction) => direction,
                };

                if !engine.shift(direction).changed {
                    continue;
                }

                engine.generate_cell()?;
                write_board(&mut output, &engine)?;

                if !announced_max && engine.has_reached_max() {
                    announced_max = true;
                    writeln!(output, "Reached {}!", Tile::MAX).with_operation("write board")?;
                }

                if !engine.can_move() {
                    writeln!(output, "No moves left").with_operation("write board")?;
                    return Ok(SessionOutcome::Stuck);
                }
            }
        }

        Ok(SessionOutcome::InputClosed)
    }

    /// Play `games` games with uniformly random legal moves
    ///
    /// Each game ends when no legal move remains or the move limit is hit.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot be built
    pub fn autoplay(&self, games: usize) -> Result<AutoplaySummary> {
        let progress = if self.cli.should_show_progress() {
            ProgressBar::new(games as u64).with_style(BATCH_STYLE.clone())
        } else {
            ProgressBar::hidden()
        };

        let mut agent = match self.cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut summary = AutoplaySummary::default();
        for game in 0..games {
            let mut engine = self.new_engine(game as u64)?;
            let mut moves = 0;

            while moves < self.cli.max_moves {
                let Some(&direction) = engine.legal_moves().choose(&mut agent) else {
                    break;
                };
                if engine.shift(direction).changed {
                    engine.generate_cell()?;
                    moves += 1;
                }
            }

            if moves == self.cli.max_moves {
                log::warn!("Game {game} abandoned after {moves} moves");
            }
            log::debug!("Game {game} finished at {} after {moves} moves", engine.max_tile());

            summary.record(engine.max_tile(), moves);
            progress.inc(1);
        }

        progress.finish_and_clear();
        Ok(summary)
    }
}

fn write_board<W: Write>(output: &mut W, engine: &GridEngine) -> Result<()> {
    writeln!(output, "{}", render_rows(&engine.rows())).with_operation("write board")
}
