/// Single-cursor access to a circular boolean store.
///
/// Implementors must keep `advance` and `retreat` exact inverses: any sequence
/// of moves that nets to zero returns the cursor to the cell it started on.
pub trait RingCursor {
    /// Value of the cell under the cursor.
    fn value(&self) -> bool;

    /// Overwrite the cell under the cursor. No other cell changes.
    fn set_value(&mut self, value: bool);

    /// Move to the successor cell.
    fn advance(&mut self);

    /// Move to the predecessor cell.
    fn retreat(&mut self);

    /// Advance `steps` times.
    fn advance_by(&mut self, steps: usize) {
        for _ in 0..steps {
            self.advance();
        }
    }

    /// Retreat `steps` times.
    fn retreat_by(&mut self, steps: usize) {
        for _ in 0..steps {
            self.retreat();
        }
    }

    /// Negate the cell under the cursor.
    fn flip(&mut self) {
        let value = self.value();
        self.set_value(!value);
    }
}

/// Read `count` values forward from the cursor, then walk back.
///
/// The cursor ends where it started.
pub fn read_cells<C: RingCursor + ?Sized>(cursor: &mut C, count: usize) -> Vec<bool> {
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(cursor.value());
        cursor.advance();
    }
    cursor.retreat_by(count);
    values
}
