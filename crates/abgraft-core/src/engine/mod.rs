//! # Engine Module
//!
//! Run-level machinery for graft planning: configuration, progress reporting,
//! random sampling of permutations and error handling.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Per-CDR grafting instructions, sampling and limits
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Sampling** ([`sampling`]) - Uniform draws of distinct permutations
//! - **Error Handling** ([`error`]) - Engine error type aggregating lower-level failures

pub mod config;
pub mod error;
pub mod progress;
pub mod sampling;
