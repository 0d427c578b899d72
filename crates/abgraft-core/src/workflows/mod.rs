//! High-level workflows built on the [`engine`](crate::engine) and [`core`](crate::core) layers.

pub mod graft;
