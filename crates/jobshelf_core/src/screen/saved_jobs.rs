//! Saved-jobs screen state.
//!
//! # Responsibility
//! - Track which postings the user marked as saved (in-memory only).
//! - Track the list's scroll offset and derive per-row fade opacity.
//! - Wire the link control to the external URL launch policy.
//!
//! # Invariants
//! - The saved set only ever contains ids present in the catalog.
//! - Saving is insert-only and idempotent; no un-save path exists.
//! - Saved state is discarded with the screen instance; nothing persists.

use crate::fade::row_opacity;
use crate::link::{open_external_url, UrlLauncher};
use crate::model::catalog::{sample_catalog, JobCatalog};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// URL opened by the link control on every row.
///
/// TODO: wire each row to its posting's own `url` field once product confirms
/// that is the intended behavior; today every row opens this listing.
pub const FEATURED_JOB_URL: &str =
    "https://www.linkedin.com/jobs/view/3701359617/?trk=jobs_biz_prem_srch";

/// Bookmark icon variant shown on a row's save control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookmarkGlyph {
    /// Solid bookmark ("bookmark" in the icon set).
    Filled,
    /// Outlined bookmark ("bookmark-border" in the icon set).
    Outline,
}

impl BookmarkGlyph {
    /// Maps saved state to the glyph the shipped screen shows.
    ///
    /// Saved rows show the outline glyph and unsaved rows the filled one.
    /// TODO: confirm with design whether this mapping should be flipped; it
    /// reads inverted but is reproduced from the shipped behavior.
    pub fn for_saved(saved: bool) -> Self {
        if saved {
            Self::Outline
        } else {
            Self::Filled
        }
    }

    /// Stable icon-set name for the glyph.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Filled => "bookmark",
            Self::Outline => "bookmark-border",
        }
    }
}

/// Renderable projection of one catalog posting.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRow {
    /// Posting id, used as the row key and saved-set key.
    pub id: String,
    /// Row headline.
    pub title: String,
    /// Company line under the title.
    pub company: String,
    /// Whether the posting is in the saved set.
    pub saved: bool,
    /// Bookmark glyph derived from `saved` (see `BookmarkGlyph::for_saved`).
    pub glyph: BookmarkGlyph,
    /// Fade opacity at the screen's current scroll offset, in `[0, 1]`.
    pub opacity: f64,
}

/// Screen state errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenError {
    /// The id is not present in the catalog.
    UnknownPosting(String),
}

impl Display for ScreenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPosting(id) => write!(f, "unknown posting id: {id}"),
        }
    }
}

impl Error for ScreenError {}

/// State owned by one mounted saved-jobs screen.
///
/// Holds the immutable catalog plus the two mutable scalars the UI drives:
/// the saved set and the scroll offset. All mutation happens on the UI
/// event thread through the methods below.
#[derive(Debug, Clone)]
pub struct SavedJobsScreen {
    catalog: JobCatalog,
    saved: HashSet<String>,
    scroll_offset: f64,
}

impl SavedJobsScreen {
    /// Mounts a screen over the given catalog with empty saved state.
    pub fn new(catalog: JobCatalog) -> Self {
        Self {
            catalog,
            saved: HashSet::new(),
            scroll_offset: 0.0,
        }
    }

    /// Mounts a screen over the compiled-in sample catalog.
    pub fn sample() -> Self {
        Self::new(sample_catalog())
    }

    /// Returns the catalog backing this screen.
    pub fn catalog(&self) -> &JobCatalog {
        &self.catalog
    }

    /// Projects every posting into a renderable row, in catalog order.
    ///
    /// Row opacity is computed from the current scroll offset and the row's
    /// 0-based position.
    pub fn rows(&self) -> Vec<JobRow> {
        self.catalog
            .postings()
            .iter()
            .enumerate()
            .map(|(index, posting)| {
                let saved = self.saved.contains(&posting.id);
                JobRow {
                    id: posting.id.clone(),
                    title: posting.title.clone(),
                    company: posting.company.clone(),
                    saved,
                    glyph: BookmarkGlyph::for_saved(saved),
                    opacity: row_opacity(index, self.scroll_offset),
                }
            })
            .collect()
    }

    /// Returns whether a posting is currently saved.
    pub fn is_saved(&self, id: &str) -> bool {
        self.saved.contains(id)
    }

    /// Returns saved ids in stable (sorted) order.
    pub fn saved_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.saved.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Marks a posting as saved.
    ///
    /// Insert-only and idempotent: saving an already-saved posting is a
    /// no-op, and there is no un-save operation. Returns whether the id was
    /// newly inserted.
    ///
    /// # Errors
    /// - `UnknownPosting` when the id is not in the catalog.
    pub fn toggle_saved(&mut self, id: &str) -> Result<bool, ScreenError> {
        if !self.catalog.contains(id) {
            return Err(ScreenError::UnknownPosting(id.to_string()));
        }
        let inserted = self.saved.insert(id.to_string());
        debug!(
            "event=posting_saved module=screen status=ok id={id} newly_saved={inserted} total={}",
            self.saved.len()
        );
        Ok(inserted)
    }

    /// Returns the current scroll offset.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Updates the scroll offset from a scroll event.
    ///
    /// Non-finite offsets are dropped; the scroll surface only produces
    /// finite values, so anything else indicates a broken event payload.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        if !offset.is_finite() {
            debug!("event=scroll_offset_dropped module=screen status=ignored offset={offset}");
            return;
        }
        self.scroll_offset = offset;
    }

    /// Opens the screen's link control target through the launch policy.
    ///
    /// Every row's link control points at [`FEATURED_JOB_URL`] regardless of
    /// which row was tapped. Returns whether the URL was handed off.
    pub fn open_link(&self, launcher: &dyn UrlLauncher) -> bool {
        open_external_url(launcher, FEATURED_JOB_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::{BookmarkGlyph, SavedJobsScreen, ScreenError};

    #[test]
    fn glyph_mapping_matches_shipped_inversion() {
        assert_eq!(BookmarkGlyph::for_saved(true), BookmarkGlyph::Outline);
        assert_eq!(BookmarkGlyph::for_saved(false), BookmarkGlyph::Filled);
        assert_eq!(BookmarkGlyph::Outline.as_str(), "bookmark-border");
        assert_eq!(BookmarkGlyph::Filled.as_str(), "bookmark");
    }

    #[test]
    fn toggle_rejects_unknown_id() {
        let mut screen = SavedJobsScreen::sample();
        let error = screen
            .toggle_saved("404")
            .expect_err("unknown id must be rejected");
        assert_eq!(error, ScreenError::UnknownPosting("404".to_string()));
        assert!(screen.saved_ids().is_empty());
    }

    #[test]
    fn non_finite_scroll_offsets_are_dropped() {
        let mut screen = SavedJobsScreen::sample();
        screen.set_scroll_offset(120.0);
        screen.set_scroll_offset(f64::NAN);
        assert_eq!(screen.scroll_offset(), 120.0);
        screen.set_scroll_offset(f64::INFINITY);
        assert_eq!(screen.scroll_offset(), 120.0);
    }
}
