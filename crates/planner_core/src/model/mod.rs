//! Domain model for planner activities.
//!
//! # Responsibility
//! - Define the canonical activity record and its boundary shapes.
//! - Keep one serialized shape for storage, seed, import and export.
//!
//! # Invariants
//! - Every activity is identified by a stable `ActivityId`.
//! - `created_at <= updated_at` for every stored record.

pub mod activity;
