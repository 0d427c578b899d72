//! # Permutation Module
//!
//! Enumeration of graft permutations: every combination of per-slot choices described
//! by a cardinality vector.
//!
//! ## Overview
//!
//! A design run has one slot per independent decision point (for antibody grafting,
//! one slot per CDR). Each slot has a *cardinality*, the number of candidates it can
//! take. A slot with cardinality `0` is inactive: it always holds the sentinel `0` and
//! contributes a factor of one to the total. A slot with cardinality `k > 0` ranges over
//! `1..=k`.
//!
//! Permutations are produced in odometer order: the last slot varies fastest and
//! carries into the slots on its left.
//!
//! ## Key Components
//!
//! - [`Cardinalities`] - Validated cardinality vector, counting and random-access decoding
//! - [`Permutations`] - Lazy, restartable odometer iterator
//! - [`PermutationSet`] - Materialized, ordered collection of permutations
//! - [`enumerate`] / [`enumerate_many`] - Materializing entry points
//!
//! ## Usage
//!
//! ```
//! use abgraft::core::permutation::enumerate;
//!
//! let set = enumerate(&[2, 0, 3]).unwrap();
//! assert_eq!(set.len(), 6);
//! assert_eq!(set[0], vec![1, 0, 1]);
//! assert_eq!(set[5], vec![2, 0, 3]);
//! ```

mod cardinality;
mod enumerate;
mod error;
mod iter;
mod set;

pub use cardinality::Cardinalities;
pub use enumerate::{EnumerationLimits, enumerate, enumerate_many};
pub use error::PermutationError;
pub use iter::Permutations;
pub use set::{Permutation, PermutationSet};
