//! Range generators for integer sequences.

use crate::error::{Error, Result};
use crate::sequence::IntSequence;

impl IntSequence {
    /// Generates the ascending sequence of every integer in `[start, end)`,
    /// step 1.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidRange`](crate::ErrorKind::InvalidRange)
    /// when `end <= start`. Empty and inverted ranges are rejected at
    /// construction rather than silently yielding an empty sequence.
    pub fn range(start: i64, end: i64) -> Result<Self> {
        if end <= start {
            return Err(Error::invalid_range(start, end));
        }
        Ok(Self((start..end).collect()))
    }

    /// Generates the ascending sequence of every integer in `[start, end]`,
    /// step 1.
    ///
    /// Equivalent to [`IntSequence::range`] with an end bound one past
    /// `end`, without the overflowing `end + 1` when `end` is `i64::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidRange`](crate::ErrorKind::InvalidRange)
    /// when `end < start`.
    pub fn range_inclusive(start: i64, end: i64) -> Result<Self> {
        if end < start {
            return Err(Error::invalid_range(start, end));
        }
        Ok(Self((start..=end).collect()))
    }
}
