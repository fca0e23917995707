//! Core domain logic for JobShelf.
//! This crate is the single source of truth for the saved-jobs screen's
//! behavior: catalog data, saved-state tracking, the scroll fade curve and
//! the external link policy.

pub mod fade;
pub mod link;
pub mod logging;
pub mod model;
pub mod screen;

pub use fade::{fade_breakpoints, row_opacity, FADE_STRIDE};
pub use link::{
    open_external_url, LaunchError, SchemeLauncher, UrlLauncher, SUPPORTED_LINK_SCHEMES,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::catalog::{sample_catalog, CatalogError, JobCatalog};
pub use model::posting::{JobPosting, PostingValidationError};
pub use screen::saved_jobs::{
    BookmarkGlyph, JobRow, SavedJobsScreen, ScreenError, FEATURED_JOB_URL,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
