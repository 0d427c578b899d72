//! # Core Module
//!
//! Stateless building blocks for graft planning.
//!
//! - **Combinatorics** ([`permutation`]) - Cardinality vectors, the permutation enumerator,
//!   the lazy odometer iterator and random-access decoding
//! - **Antibody Models** ([`models`]) - CDR names and design types
//! - **Output** ([`io`]) - Writing permutation sets as CSV tables

pub mod io;
pub mod models;
pub mod permutation;
