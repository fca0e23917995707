//! Flutter-facing FFI crate for JobShelf.
//!
//! Exposes the saved-jobs screen's operations to Dart through
//! flutter_rust_bridge. All exported functions live in [`api`].

pub mod api;
