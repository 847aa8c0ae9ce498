//! Category share chart.
//!
//! # Responsibility
//! - Compute proportional sector geometry from tag-count aggregates.
//! - Drive an injected 2D drawing surface; no drawing primitives here.
//!
//! # Invariants
//! - The chart holds no state of its own beyond the surface it draws on.

pub mod pie;
