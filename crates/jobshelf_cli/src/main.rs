//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `jobshelf_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use jobshelf_core::SavedJobsScreen;

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from Flutter/FFI runtime setup.
    println!("jobshelf_core ping={}", jobshelf_core::ping());
    println!("jobshelf_core version={}", jobshelf_core::core_version());

    let screen = SavedJobsScreen::sample();
    for row in screen.rows() {
        println!(
            "row id={} saved={} glyph={} opacity={:.2} title={:?} company={:?}",
            row.id,
            row.saved,
            row.glyph.as_str(),
            row.opacity,
            row.title,
            row.company
        );
    }
}
