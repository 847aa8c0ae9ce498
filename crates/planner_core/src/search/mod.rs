//! Regex search entry points.
//!
//! # Responsibility
//! - Compile user patterns into reusable matchers.
//! - Keep match counting and highlight shaping inside core.
//!
//! # Invariants
//! - An invalid pattern always clears the previous matcher; the engine is
//!   never left with stale filter state.

pub mod debounce;
pub mod matcher;
