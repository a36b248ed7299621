//! `0`/`1` text form of cell values, used for mismatch dumps and replays.

use crate::RingError;

/// Render values as a bit-string, `true` as `1`.
#[must_use]
pub fn format_bits(values: &[bool]) -> String {
    values.iter().map(|&v| if v { '1' } else { '0' }).collect()
}

/// Parse a bit-string produced by [`format_bits`].
///
/// ASCII whitespace and `_` are accepted as separators so long dumps can be
/// wrapped or grouped.
pub fn parse_bits(input: &str) -> Result<Vec<bool>, RingError> {
    let mut values = Vec::with_capacity(input.len());
    for (offset, ch) in input.char_indices() {
        match ch {
            '0' => values.push(false),
            '1' => values.push(true),
            '_' => {}
            c if c.is_ascii_whitespace() => {}
            found => return Err(RingError::InvalidBit { found, offset }),
        }
    }
    if values.is_empty() {
        return Err(RingError::Empty);
    }
    Ok(values)
}
