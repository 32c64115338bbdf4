//! # Flip Waves
//!
//! Start delays that make the discs turned by one move flip outward from the
//! placed stone instead of all at once.

use crate::board::GridCell;

/// Pairs each cell with a delay of `step` ticks per ring beyond the first.
///
/// Cells adjacent to `origin` start immediately, the next ring `step` ticks
/// later, and so on. Input order is kept.
///
/// # Examples
///
/// ```
/// use flipout::{wave_delays, GridCell};
///
/// let origin = GridCell::new(2, 3);
/// let flipped = [GridCell::new(3, 3), GridCell::new(4, 3)];
/// assert_eq!(
///     wave_delays(origin, &flipped, 3),
///     vec![(GridCell::new(3, 3), 0), (GridCell::new(4, 3), 3)]
/// );
/// ```
pub fn wave_delays(origin: GridCell, cells: &[GridCell], step: u32) -> Vec<(GridCell, u32)> {
    cells
        .iter()
        .map(|cell| {
            let ring = origin.chebyshev_distance(*cell).saturating_sub(1);
            (*cell, ring.saturating_mul(step))
        })
        .collect()
}
