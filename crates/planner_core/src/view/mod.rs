//! Derived views over the activity collection.
//!
//! # Responsibility
//! - Turn the owned collection plus sort/search state into display data.
//! - Keep dashboard aggregates consistent with the same collection.
//!
//! # Invariants
//! - Projection is a pure function of its inputs; it never mutates the
//!   collection.

pub mod projector;
