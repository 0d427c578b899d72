//! # ABGRAFT Core Library
//!
//! A small library for planning antibody CDR grafting runs: it enumerates every
//! combination of candidate grafts across the complementarity-determining regions
//! (CDRs) of an antibody, or samples a subset of them when the full product is too
//! large to try.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`CdrName`, `DesignType`),
//!   the permutation enumerator and its lazy odometer iterator, and CSV output.
//!
//! - **[`engine`]: The Logic Core.** Run configuration (`GraftConfig`), progress
//!   reporting, uniform sampling of permutations, and the engine error type.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together. The
//!   [`workflows::graft`] workflow turns per-CDR candidate counts into a complete
//!   graft plan.

pub mod core;
pub mod engine;
pub mod workflows;
