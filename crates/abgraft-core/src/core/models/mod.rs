//! Antibody-level models used to label permutation slots and design runs.

pub mod cdr;
pub mod design;
pub mod error;
