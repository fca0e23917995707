//! Screen-level state and view projection.
//!
//! # Responsibility
//! - Own the per-screen mutable state (saved set, scroll offset).
//! - Project catalog records into renderable row views.
//!
//! # Invariants
//! - State lives with the screen instance; there is no process-wide store.

pub mod saved_jobs;
