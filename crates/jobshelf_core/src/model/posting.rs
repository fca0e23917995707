//! Job posting domain model.
//!
//! # Responsibility
//! - Define the record shape each list row renders from.
//! - Validate records before they enter a catalog.
//!
//! # Invariants
//! - `id` is stable for the posting's lifetime and never reused.
//! - `url` is either absent or a non-blank string; blank means `None`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Immutable record describing one displayed job listing.
///
/// Created at process start from the compiled-in catalog; never mutated at
/// runtime. The optional `url` points at the posting's external listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    /// Stable catalog-unique identifier, used as the saved-set key.
    pub id: String,
    /// Role title shown as the row headline.
    pub title: String,
    /// Company line shown under the title.
    pub company: String,
    /// External listing URL, when the posting has one.
    pub url: Option<String>,
}

impl JobPosting {
    /// Creates a posting without an external listing URL.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            company: company.into(),
            url: None,
        }
    }

    /// Creates a posting carrying an external listing URL.
    pub fn with_url(
        id: impl Into<String>,
        title: impl Into<String>,
        company: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::new(id, title, company)
        }
    }

    /// Checks record-level invariants.
    ///
    /// # Errors
    /// - `EmptyId` when `id` is empty or whitespace-only.
    /// - `EmptyTitle` when `title` is empty or whitespace-only.
    /// - `BlankUrl` when `url` is `Some` but empty or whitespace-only.
    pub fn validate(&self) -> Result<(), PostingValidationError> {
        if self.id.trim().is_empty() {
            return Err(PostingValidationError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(PostingValidationError::EmptyTitle);
        }
        if let Some(url) = &self.url {
            if url.trim().is_empty() {
                return Err(PostingValidationError::BlankUrl(self.id.clone()));
            }
        }
        Ok(())
    }
}

/// Posting record validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostingValidationError {
    EmptyId,
    EmptyTitle,
    BlankUrl(String),
}

impl Display for PostingValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "posting id must not be empty"),
            Self::EmptyTitle => write!(f, "posting title must not be empty"),
            Self::BlankUrl(id) => {
                write!(f, "posting `{id}` has a blank url; omit the field instead")
            }
        }
    }
}

impl Error for PostingValidationError {}
