//! Search area definitions: identity, chart rectangles, and per-area state.

use core::fmt;

/// Identity of a search area, numbered from 1 as printed on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AreaId(u8);

impl AreaId {
    /// Create an id from the 1-based chart number.
    pub const fn new(number: u8) -> Self {
        AreaId(number)
    }

    /// The 1-based chart number.
    pub fn number(&self) -> u8 {
        self.0
    }

    /// 0-based index into the session's area table.
    pub fn index(&self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Area {}", self.0)
    }
}

/// Rectangular extent of a search area on the chart, in map pixels.
/// Corners run (left, top) inclusive to (right, bottom) exclusive, so the
/// cell grid covering the area is `width() × height()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaBounds {
    left: usize,
    top: usize,
    right: usize,
    bottom: usize,
}

impl AreaBounds {
    /// Create bounds from corner coordinates.
    pub const fn new(left: usize, top: usize, right: usize, bottom: usize) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn top(&self) -> usize {
        self.top
    }

    pub fn right(&self) -> usize {
        self.right
    }

    pub fn bottom(&self) -> usize {
        self.bottom
    }

    /// Width of the area's cell grid.
    pub fn width(&self) -> usize {
        self.right - self.left
    }

    /// Height of the area's cell grid.
    pub fn height(&self) -> usize {
        self.bottom - self.top
    }

    /// Total number of searchable cells.
    pub fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Convert an area-local cell to map coordinates.
    pub fn to_map(&self, cell: (usize, usize)) -> (usize, usize) {
        (self.left + cell.0, self.top + cell.1)
    }
}

/// One search area's mutable state: the belief prior and the effectiveness
/// of the current round's search there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchArea {
    id: AreaId,
    bounds: AreaBounds,
    prior: f64,
    effectiveness: f64,
}

impl SearchArea {
    /// Create an area from its chart rectangle and starting prior.
    /// Effectiveness starts at zero: nothing has been searched yet.
    pub fn new(id: AreaId, bounds: AreaBounds, prior: f64) -> Self {
        Self {
            id,
            bounds,
            prior,
            effectiveness: 0.0,
        }
    }

    pub fn id(&self) -> AreaId {
        self.id
    }

    pub fn bounds(&self) -> &AreaBounds {
        &self.bounds
    }

    /// Probability the target lies here, before the next search.
    pub fn prior(&self) -> f64 {
        self.prior
    }

    /// Fraction of this area's cells covered in the current round.
    pub fn effectiveness(&self) -> f64 {
        self.effectiveness
    }

    /// Overwrite the prior. Callers keep the sum over all areas at 1.
    pub fn set_prior(&mut self, prior: f64) {
        self.prior = prior;
    }

    /// Overwrite the round effectiveness.
    pub fn set_effectiveness(&mut self, effectiveness: f64) {
        self.effectiveness = effectiveness;
    }
}

/// Where the sailor actually drifted: one area and a cell local to it.
/// Fixed when the session is created and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetLocation {
    area: AreaId,
    cell: (usize, usize),
}

impl TargetLocation {
    pub fn new(area: AreaId, cell: (usize, usize)) -> Self {
        Self { area, cell }
    }

    /// The area actually holding the target.
    pub fn area(&self) -> AreaId {
        self.area
    }

    /// The target's cell, local to its area.
    pub fn cell(&self) -> (usize, usize) {
        self.cell
    }
}
