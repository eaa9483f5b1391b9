//! Directional traversal and the slide-and-merge line algorithm
//!
//! Every move works on independent lines: rows for horizontal moves, columns
//! for vertical ones. A line is handed out as a one-dimensional mutable view
//! into the grid, oriented so that index 0 is the edge tiles move toward.
//! Right and Down simply reverse the view, so one algorithm serves all four
//! directions.

use ndarray::{Array2, ArrayView1, ArrayViewMut1, Axis};

use crate::board::tile::Tile;

/// Direction tiles travel during a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward column 0
    Left,
    /// Toward the last column
    Right,
    /// Toward row 0
    Up,
    /// Toward the last row
    Down,
}

impl Direction {
    /// All four directions in a fixed order
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Axis along which a line runs for this direction
    ///
    /// Rows are lanes along axis 1, columns are lanes along axis 0.
    pub const fn lane_axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis(1),
            Self::Up | Self::Down => Axis(0),
        }
    }

    /// Whether the target edge is at the far end of the lane
    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::Right | Self::Down)
    }
}

/// Mutable lines of the grid, each oriented with the target edge at index 0
pub fn lines_mut(
    cells: &mut Array2<Tile>,
    direction: Direction,
) -> impl Iterator<Item = ArrayViewMut1<'_, Tile>> {
    let reversed = direction.is_reversed();
    cells
        .lanes_mut(direction.lane_axis())
        .into_iter()
        .map(move |mut line| {
            if reversed {
                line.invert_axis(Axis(0));
            }
            line
        })
}

/// Apply one move to every line of the grid
///
/// Returns whether any line changed. Every line is processed even after the
/// first change is seen.
pub fn shift_lines(cells: &mut Array2<Tile>, direction: Direction) -> bool {
    let mut changed = false;
    for line in lines_mut(cells, direction) {
        changed |= slide_line(line);
    }
    changed
}

/// Merge then compact a single line toward index 0
///
/// Returns whether any tile merged or slid.
pub fn slide_line(mut line: ArrayViewMut1<'_, Tile>) -> bool {
    let merged = merge_pass(&mut line);
    let compacted = compact_pass(&mut line);
    merged || compacted
}

/// Whether any two neighbouring tiles of the line could merge
pub fn has_adjacent_merge(line: ArrayView1<'_, Tile>) -> bool {
    line.iter()
        .zip(line.iter().skip(1))
        .any(|(a, b)| a.merge(*b).is_some())
}

fn tile_at(line: &ArrayViewMut1<'_, Tile>, index: usize) -> Tile {
    line.get(index).copied().unwrap_or(Tile::EMPTY)
}

fn set_tile(line: &mut ArrayViewMut1<'_, Tile>, index: usize, tile: Tile) {
    if let Some(cell) = line.get_mut(index) {
        *cell = tile;
    }
}

// `tail` trails the last settled tile. After a merge it steps past the merge
// target, so a freshly merged tile never meets another candidate this move.
fn merge_pass(line: &mut ArrayViewMut1<'_, Tile>) -> bool {
    let mut changed = false;
    let mut tail = 0;

    for head in 1..line.len() {
        if let Some(merged) = tile_at(line, tail).merge(tile_at(line, head)) {
            set_tile(line, tail, merged);
            set_tile(line, head, Tile::EMPTY);
            changed = true;
            tail += 1;
        }

        if !tile_at(line, head).is_empty() {
            tail = head;
        }
    }

    changed
}

fn compact_pass(line: &mut ArrayViewMut1<'_, Tile>) -> bool {
    let mut changed = false;
    let mut write = 0;

    for read in 0..line.len() {
        if tile_at(line, read).is_empty() {
            continue;
        }
        // Everything in write..read is empty
        if read != write {
            line.swap(read, write);
            changed = true;
        }
        write += 1;
    }

    changed
}
