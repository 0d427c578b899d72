//! Output of permutation sets.
//!
//! Permutations can be written as CSV tables (one column per slot) or as plain
//! whitespace-separated lines. Both writers accept any iterator of permutations so
//! that a lazy [`Permutations`](crate::core::permutation::Permutations) iterator can
//! be streamed to disk without materializing the full set.

pub mod table;
