//! Activity collection ownership and persistence orchestration.
//!
//! # Responsibility
//! - Own the single mutable activity collection.
//! - Persist the whole collection after every mutation.
//!
//! # Invariants
//! - No caller ever receives a mutable reference to the backing sequence;
//!   consumers get slices or clones.
//! - Collection order is insertion order, newest-created first.

pub mod activity_store;
