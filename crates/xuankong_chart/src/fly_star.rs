//! Flying-star sequence generation over the Lo Shu grid.
//!
//! A sequence assigns one star (1..9) to each of the 9 grid cells. Cell
//! order is fixed throughout the engine: `[NW, N, NE, W, Center, E, SW, S,
//! SE]`, matching the canonical `4 9 2 / 3 5 7 / 8 1 6` magic-square rows.
//! Re-centering the forward or reverse base walk on a different starting
//! star produces every chart the engine needs: period charts, mountain and
//! water star overlays, and the annual overlay.

use xuankong_compass::Trigram;

/// Forward base walk (center 5), the Lo Shu magic square itself.
pub const FORWARD_BASE: [u8; 9] = [4, 9, 2, 3, 5, 7, 8, 1, 6];

/// Reverse base walk (center 1): the forward walk with the step direction
/// flipped around the center.
pub const REVERSE_BASE: [u8; 9] = [2, 6, 4, 3, 1, 8, 7, 5, 9];

/// Display names of the 9 cells, in cell order.
pub const CELL_NAMES: [&str; 9] = ["NW", "N", "NE", "W", "C", "E", "SW", "S", "SE"];

/// Native trigram of each cell: the home trigram of the star occupying the
/// cell in the forward base walk. The center has none.
pub const PALACE_TRIGRAMS: [Option<Trigram>; 9] = [
    Some(Trigram::Xun),
    Some(Trigram::Li),
    Some(Trigram::Kun),
    Some(Trigram::Zhen),
    None,
    Some(Trigram::Dui),
    Some(Trigram::Gen),
    Some(Trigram::Kan),
    Some(Trigram::Qian),
];

/// Generate the 9-cell flying-star sequence for a starting star.
///
/// Picks the forward or reverse base walk, shifts every cell by
/// `start - center`, and wraps into 1..9. The result always lands the
/// starting star on the center cell (index 4).
///
/// `start` is accepted as any `i32`: out-of-range values wrap modulo 9
/// onto a valid star rather than erroring, which callers rely on for the
/// annual overlay's year drift. Range validation, where wanted, happens at
/// the configuration boundary.
pub fn fly_star_sequence(start: i32, reversed: bool) -> [u8; 9] {
    let base = if reversed { &REVERSE_BASE } else { &FORWARD_BASE };
    let offset = start - base[4] as i32;
    let mut out = [0u8; 9];
    for (cell, &star) in base.iter().enumerate() {
        out[cell] = ((star as i32 - 1 + offset).rem_euclid(9) + 1) as u8;
    }
    out
}
