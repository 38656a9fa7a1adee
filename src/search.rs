//! Coverage simulation and hit resolution for a single team's sweep.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::area::{AreaBounds, AreaId, TargetLocation};
use crate::common::SearchOutcome;
use crate::grid::{CellGrid, GridError};

/// Sweep an area at the given effectiveness: shuffle every cell of the
/// extent and keep the first `⌊cells × e⌋` as the searched set.
///
/// Effectiveness is clamped to [0, 1] before the quota is taken; zero
/// yields an empty set and one covers the full grid. Each call is an
/// independent draw, so two sweeps of the same area usually overlap.
pub fn sweep<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: &AreaBounds,
    effectiveness: f64,
) -> Result<CellGrid, GridError> {
    let (width, height) = (bounds.width(), bounds.height());
    let mut cells: Vec<(usize, usize)> = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            cells.push((x, y));
        }
    }
    cells.shuffle(rng);

    let quota = (cells.len() as f64 * effectiveness.clamp(0.0, 1.0)) as usize;
    debug!("sweep covered {} of {} cells", quota, cells.len());
    CellGrid::from_iter(width, height, cells.into_iter().take(quota))
}

/// Decide a team's outcome: `Found` only when the swept area is the one
/// actually holding the target and the target's cell fell inside the
/// coverage. Any other area reports `NotFound` no matter what it covered.
pub fn resolve(area: AreaId, coverage: &CellGrid, target: &TargetLocation) -> SearchOutcome {
    let (x, y) = target.cell();
    if area == target.area() && coverage.get(x, y).unwrap_or(false) {
        SearchOutcome::Found
    } else {
        SearchOutcome::NotFound
    }
}

/// Effectiveness actually achieved by two sweeps of one area: the fraction
/// of the extent their union covered.
pub fn observed_effectiveness(first: &CellGrid, second: &CellGrid) -> f64 {
    let union = *first | *second;
    union.count_ones() as f64 / union.cell_count() as f64
}
