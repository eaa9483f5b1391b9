//! Text rendering of grid snapshots
//!
//! Rank-to-label mapping is front-end policy; the engine only hands out
//! tile ranks.

use crate::board::tile::Tile;

/// Label printed for a tile
pub fn tile_label(tile: Tile) -> String {
    tile.to_string()
}

/// Render rows as a bordered grid with uniformly padded, right-aligned labels
///
/// ```text
/// |    2 |    . |
/// |    . | 2048 |
/// ```
pub fn render_rows(rows: &[Vec<Tile>]) -> String {
    let width = rows
        .iter()
        .flatten()
        .map(|&tile| tile_label(tile).len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for row in rows {
        out.push('|');
        for &tile in row {
            out.push_str(&format!(" {tile:>width$} |"));
        }
        out.push('\n');
    }
    out
}
