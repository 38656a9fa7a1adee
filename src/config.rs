use crate::area::AreaBounds;

pub const NUM_AREAS: usize = 3;

// Chart rectangles as (left, top, right, bottom) in map pixels; one pixel
// spans one nautical mile. All three areas are 50 x 50 cells.
pub const AREAS: [AreaBounds; NUM_AREAS] = [
    AreaBounds::new(130, 265, 180, 315),
    AreaBounds::new(80, 255, 130, 305),
    AreaBounds::new(105, 205, 155, 255),
];

// Priors for areas 1..=3; must sum to 1.
pub const INITIAL_PRIORS: [f64; NUM_AREAS] = [0.2, 0.5, 0.3];

// Sea state bounds how much of an area a single sweep can cover.
pub const EFFECTIVENESS_BAND: (f64, f64) = (0.2, 0.9);

// The hurricane arrives after floor(uniform(band)) searches.
pub const ROUND_LIMIT_BAND: (f64, f64) = (3.0, 9.0);

pub const LAST_KNOWN_POSITION: (usize, usize) = (160, 290);

pub const PRIOR_SUM_TOLERANCE: f64 = 1e-9;
