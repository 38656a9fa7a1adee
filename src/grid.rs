//! A fixed-capacity coverage grid recording which cells a sweep visited.
//!
//! Grids hold a `width × height` cell extent packed into an array of `u64`
//! words, so they live on the stack and copy freely. The extent is a runtime
//! value taken from an area's chart rectangle; the word array is sized for
//! the largest charted area with room to spare.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// Number of `u64` words backing a grid.
const WORDS: usize = 40;

/// Largest cell count a grid can address.
pub const GRID_CAPACITY: usize = WORDS * 64;

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Requested extent exceeds the fixed word-array capacity.
    ExtentTooLarge { cells: usize, capacity: usize },
    /// Cell coordinate is outside the grid extent.
    CellOutOfBounds { x: usize, y: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ExtentTooLarge { cells, capacity } => {
                write!(f, "ExtentTooLarge: {} cells exceed capacity {}", cells, capacity)
            }
            GridError::CellOutOfBounds { x, y } => {
                write!(f, "CellOutOfBounds: x={}, y={}", x, y)
            }
        }
    }
}

/// A `width × height` cell grid stored in a fixed array of `u64` words.
///
/// Bits beyond the extent are always zero, so word-wise operations and
/// `count_ones` never see stray cells.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellGrid {
    width: usize,
    height: usize,
    words: [u64; WORDS],
}

impl CellGrid {
    /// Create an empty grid over a `width × height` extent.
    /// Returns `Err(ExtentTooLarge)` if the extent exceeds capacity.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let cells = width * height;
        if cells > GRID_CAPACITY {
            return Err(GridError::ExtentTooLarge {
                cells,
                capacity: GRID_CAPACITY,
            });
        }
        Ok(CellGrid {
            width,
            height,
            words: [0; WORDS],
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of addressable cells (`width × height`).
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Returns the number of set (visited) cells.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no cell is set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Gets the cell at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Result<bool, GridError> {
        let idx = self.cell_index(x, y)?;
        Ok((self.words[idx / 64] >> (idx % 64)) & 1 != 0)
    }

    /// Sets the cell at (x, y) to 1.
    pub fn set(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        let idx = self.cell_index(x, y)?;
        self.words[idx / 64] |= 1 << (idx % 64);
        Ok(())
    }

    /// Clears the cell at (x, y) to 0.
    pub fn clear(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        let idx = self.cell_index(x, y)?;
        self.words[idx / 64] &= !(1 << (idx % 64));
        Ok(())
    }

    /// Sets every cell in the extent.
    pub fn fill(&mut self) {
        let cells = self.cell_count();
        for (i, word) in self.words.iter_mut().enumerate() {
            let base = i * 64;
            *word = if base + 64 <= cells {
                u64::MAX
            } else if base < cells {
                (1u64 << (cells - base)) - 1
            } else {
                0
            };
        }
    }

    /// Clears all cells to 0.
    pub fn clear_all(&mut self) {
        self.words = [0; WORDS];
    }

    #[inline]
    fn cell_index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x >= self.width || y >= self.height {
            Err(GridError::CellOutOfBounds { x, y })
        } else {
            Ok(y * self.width + x)
        }
    }

    /// Creates a grid over `width × height` from an iterator of (x, y) cells.
    pub fn from_iter<I>(width: usize, height: usize, iter: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new(width, height)?;
        for (x, y) in iter {
            grid.set(x, y)?;
        }
        Ok(grid)
    }

    /// Iterator over the set cells of the grid, in row order.
    #[inline]
    pub fn iter_set_cells(&self) -> SetCells<'_> {
        SetCells { grid: self, idx: 0 }
    }
}

impl fmt::Debug for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CellGrid<{}x{}: {} of {} set>",
            self.width,
            self.height,
            self.count_ones(),
            self.cell_count()
        )
    }
}

/// Iterator over the set cells of a grid.
#[derive(Clone, Copy)]
pub struct SetCells<'a> {
    grid: &'a CellGrid,
    idx: usize,
}

impl<'a> Iterator for SetCells<'a> {
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let cells = self.grid.cell_count();
        while self.idx < cells {
            let idx = self.idx;
            self.idx += 1;
            if (self.grid.words[idx / 64] >> (idx % 64)) & 1 != 0 {
                return Some((idx % self.grid.width, idx / self.grid.width));
            }
        }
        None
    }
}

/// Intersection of two coverage sets over the same extent.
impl BitAnd for CellGrid {
    type Output = Self;
    fn bitand(mut self, rhs: Self) -> Self {
        self &= rhs;
        self
    }
}

/// Union of two coverage sets over the same extent.
impl BitOr for CellGrid {
    type Output = Self;
    fn bitor(mut self, rhs: Self) -> Self {
        self |= rhs;
        self
    }
}

impl BitAndAssign for CellGrid {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        debug_assert_eq!((self.width, self.height), (rhs.width, rhs.height));
        for (word, other) in self.words.iter_mut().zip(rhs.words.iter()) {
            *word &= other;
        }
    }
}

impl BitOrAssign for CellGrid {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        debug_assert_eq!((self.width, self.height), (rhs.width, rhs.height));
        for (word, other) in self.words.iter_mut().zip(rhs.words.iter()) {
            *word |= other;
        }
    }
}
