//! Immutable integer sequences with eager declarative operations.
//!
//! This crate provides:
//! - [`IntSequence`] - A persistent, order-preserving sequence of `i64`
//! - Fallible range generators ([`IntSequence::range`],
//!   [`IntSequence::range_inclusive`])
//! - Chainable transforms (`filter`, `not`, `map`, `map_only`)
//! - Terminal queries (`any`, `all`, `find`, `reduce`, `count`)
//! - [`Error`] - Construction errors with a matchable [`ErrorKind`]
//!
//! Every transform is pure and returns a fresh sequence; the receiver is
//! never consumed or modified, so one base sequence can feed many derived
//! chains:
//!
//! ```
//! use rill_sequence::IntSequence;
//!
//! # fn main() -> rill_sequence::Result<()> {
//! let is_odd = |x: i64| x % 2 != 0;
//! let hundred = IntSequence::range_inclusive(1, 100)?;
//! let odds = hundred.filter(is_odd);
//! let evens = hundred.not(is_odd);
//! assert_eq!(odds.count() + evens.count(), hundred.count());
//!
//! let odd_sum = hundred.filter(is_odd).reduce(0, |acc, x| acc + x);
//! assert_eq!(odd_sum, 2500);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
mod range;
pub mod sequence;

pub use error::{Error, ErrorKind, Result};
pub use sequence::IntSequence;
