use std::fmt;

use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Bound {
    Left,
    Right,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// An index pair that does not address a (possibly empty) range of the slice.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("{bound} index {index} is out of range for a slice of length {len}")]
pub struct OutOfRange {
    pub bound: Bound,
    pub index: isize,
    pub len: usize,
}

impl OutOfRange {
    fn new(bound: Bound, index: isize, len: usize) -> Self {
        Self { bound, index, len }
    }

    /// Inclusive interval the violated index had to fall in, or `None` when
    /// no value would have been accepted (an empty slice).
    pub fn accepted(&self) -> Option<(isize, isize)> {
        // Lengths past `isize::MAX` (zero-sized elements) accept every
        // non-negative index.
        let n = isize::try_from(self.len).ok();
        match self.bound {
            Bound::Left => Some((0, n.unwrap_or(isize::MAX))),
            Bound::Right if self.len == 0 => None,
            Bound::Right => Some((-1, n.map_or(isize::MAX, |n| n - 1))),
        }
    }
}

/// Validates `(left, right)` against a slice of length `len`.
///
/// - `left` must lie in `0..=len`, `right` in `-1..len`.
/// - An empty slice has no addressable range, so every pair is rejected.
/// - `Ok(None)` means zero swaps (`left >= right`); `Ok(Some((l, r)))`
///   guarantees `l < r < len`.
pub fn check_range(
    len: usize,
    left: isize,
    right: isize,
) -> Result<Option<(usize, usize)>, OutOfRange> {
    if left < 0 || left as usize > len {
        return Err(OutOfRange::new(Bound::Left, left, len));
    }
    if right < -1 || (right >= 0 && right as usize >= len) || len == 0 {
        return Err(OutOfRange::new(Bound::Right, right, len));
    }
    if left >= right {
        return Ok(None);
    }
    Ok(Some((left as usize, right as usize)))
}
