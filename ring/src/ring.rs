use std::fmt;

use rand::Rng;

use crate::{RingCursor, RingError};

/// Smallest size drawn when no size is requested.
pub const RANDOM_SIZE_MIN: usize = 1;
/// Largest size drawn when no size is requested.
pub const RANDOM_SIZE_MAX: usize = 9999;

#[derive(Debug, Clone, Copy)]
struct Cell {
    value: bool,
    next: usize,
    prev: usize,
}

/// Opaque identity of the cell under the cursor.
///
/// Two tokens compare equal exactly when they were taken at the same cell of
/// the same ring. Tokens carry no ordering and reveal nothing about size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellToken(usize);

/// A closed cycle of boolean cells with one cursor.
///
/// Cells know only their neighbours. The cycle is linked once at construction
/// and never relinked, so it always has exactly one loop of the constructed
/// size and no dangling ends.
#[derive(Clone)]
pub struct Ring {
    cells: Vec<Cell>,
    current: usize,
}

impl Ring {
    /// Build a ring of `count` random cells.
    ///
    /// A `count` of zero picks a size uniformly from
    /// [`RANDOM_SIZE_MIN`]..=[`RANDOM_SIZE_MAX`]. Values come from the
    /// thread-local generator, which is seeded once per thread from the OS, so
    /// rings built back to back never share a value stream.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self::with_rng(count, &mut rand::rng())
    }

    /// Like [`Ring::new`], drawing the size and every value from `rng`.
    #[must_use]
    pub fn with_rng<R: Rng>(count: usize, rng: &mut R) -> Self {
        let count = if count == 0 {
            rng.random_range(RANDOM_SIZE_MIN..=RANDOM_SIZE_MAX)
        } else {
            count
        };
        let values = (0..count).map(|_| rng.random::<bool>()).collect();
        Self::linked(values)
    }

    /// Build a ring holding exactly `values`, cursor on the first.
    pub fn from_values(values: Vec<bool>) -> Result<Self, RingError> {
        if values.is_empty() {
            return Err(RingError::Empty);
        }
        Ok(Self::linked(values))
    }

    fn linked(values: Vec<bool>) -> Self {
        let count = values.len();
        debug_assert!(count > 0, "ring must have at least one cell");
        let cells = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| Cell {
                value,
                next: (i + 1) % count,
                prev: (i + count - 1) % count,
            })
            .collect();
        Self { cells, current: 0 }
    }

    #[must_use]
    pub fn cursor_token(&self) -> CellToken {
        CellToken(self.current)
    }

    #[cfg(test)]
    fn size(&self) -> usize {
        self.cells.len()
    }
}

impl RingCursor for Ring {
    fn value(&self) -> bool {
        self.cells[self.current].value
    }

    fn set_value(&mut self, value: bool) {
        self.cells[self.current].value = value;
    }

    fn advance(&mut self) {
        self.current = self.cells[self.current].next;
    }

    fn retreat(&mut self) {
        self.current = self.cells[self.current].prev;
    }
}

// Manual Debug impl so diagnostics never leak the size.
impl fmt::Debug for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ring")
            .field("value", &self.value())
            .finish_non_exhaustive()
    }
}
