//! Rill - eager declarative operations over immutable integer sequences
//!
//! This crate re-exports the rill library for convenient access. For
//! detailed documentation, see the member crate.
//!
//! The system is deliberately a single layer:
//!
//! ```text
//! rill_sequence — IntSequence, range generators, transforms, queries
//! ```

pub use rill_sequence as sequence;
