//! Shared test utilities and fixtures

#![allow(dead_code)]

use ringsize_ring::{CellToken, Ring, parse_bits, read_cells};

/// Fixed-content ring from a bit-string such as `"0101"`.
pub fn ring_of(bits: &str) -> Ring {
    Ring::from_values(parse_bits(bits).expect("valid bit-string")).expect("non-empty ring")
}

/// Cursor identity plus the full content read from it.
pub fn snapshot(ring: &mut Ring, size: usize) -> (CellToken, Vec<bool>) {
    (ring.cursor_token(), read_cells(ring, size))
}
