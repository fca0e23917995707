//! Domain model for the saved-jobs screen.
//!
//! # Responsibility
//! - Define the canonical posting record rendered by the UI.
//! - Own the compiled-in catalog the screen displays.
//!
//! # Invariants
//! - Postings are immutable once a catalog is built.
//! - Every posting carries a stable, catalog-unique `id`.

pub mod catalog;
pub mod posting;
