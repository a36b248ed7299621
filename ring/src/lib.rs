//! Circular boolean store that hides its own size.
//!
//! A [`Ring`] is a closed cycle of boolean cells with exactly one cursor. The
//! only way to learn anything about it is through [`RingCursor`]: read or
//! write the current cell, and step forward or backward by one.
//!
//! ```text
//!   retreat()            advance()
//!      <-- [ ] [ ] [x] [ ] [ ] -->
//!                   ^
//!                 cursor
//!   (last cell links back to the first)
//! ```
//!
//! The size is fixed at construction and never exposed. Recovering it is the
//! job of `ringsize-engine`.

#![allow(clippy::missing_errors_doc)]

mod bits;
mod cursor;
mod ring;

pub use bits::{format_bits, parse_bits};
pub use cursor::{RingCursor, read_cells};
pub use ring::{CellToken, RANDOM_SIZE_MAX, RANDOM_SIZE_MIN, Ring};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("a ring needs at least one cell")]
    Empty,
    #[error("invalid bit {found:?} at offset {offset}; expected '0' or '1'")]
    InvalidBit { found: char, offset: usize },
}
