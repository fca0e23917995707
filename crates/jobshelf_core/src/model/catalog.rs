//! Ordered posting catalog.
//!
//! # Responsibility
//! - Hold the ordered, immutable posting list the screen renders.
//! - Enforce catalog-level invariants at construction time.
//!
//! # Invariants
//! - Posting ids are unique within a catalog.
//! - Display order is construction order and never changes.

use crate::model::posting::{JobPosting, PostingValidationError};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Immutable ordered collection of job postings.
///
/// The catalog is the screen's only data source; there is no fetch, refresh
/// or mutation path after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCatalog {
    postings: Vec<JobPosting>,
}

impl JobCatalog {
    /// Builds a catalog after validating every record.
    ///
    /// # Errors
    /// - `InvalidPosting` when any record fails `JobPosting::validate`.
    /// - `DuplicateId` when two records share an id.
    pub fn new(postings: Vec<JobPosting>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(postings.len());
        for posting in &postings {
            posting.validate()?;
            if !seen.insert(posting.id.as_str()) {
                return Err(CatalogError::DuplicateId(posting.id.clone()));
            }
        }
        Ok(Self { postings })
    }

    /// Returns postings in display order.
    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    /// Returns the number of postings.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Returns whether the catalog holds no postings.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Returns whether an id exists in the catalog.
    pub fn contains(&self, id: &str) -> bool {
        self.postings.iter().any(|posting| posting.id == id)
    }

    /// Looks up one posting by id.
    pub fn get(&self, id: &str) -> Option<&JobPosting> {
        self.postings.iter().find(|posting| posting.id == id)
    }
}

/// Catalog construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    InvalidPosting(PostingValidationError),
    DuplicateId(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPosting(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate posting id: {id}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPosting(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<PostingValidationError> for CatalogError {
    fn from(value: PostingValidationError) -> Self {
        Self::InvalidPosting(value)
    }
}

/// Returns the compiled-in catalog shown by the saved-jobs screen.
///
/// Record "1" is the only posting carrying an external listing URL; the
/// titles and company lines are reproduced verbatim, trailing whitespace
/// included.
pub fn sample_catalog() -> JobCatalog {
    JobCatalog::new(vec![
        JobPosting::with_url(
            "1",
            "Seasonal Sales Associate",
            "PlanetStream",
            "https://www.linkedin.com/jobs/view/3701359617/?trk=jobs_biz_prem_srch",
        ),
        JobPosting::new("2", "Outside Sales Representative", "Aether"),
        JobPosting::new("3", "Retail Sales Associate", "FusionTech, (Cary, NC)"),
        JobPosting::new("4", "Retail Sales – Part Time", "Mirage"),
        JobPosting::new("5", "Retail Sales Associate", "TidalForce"),
        JobPosting::new("6", "Manager, Sales and Customer Service", "Zenith"),
        JobPosting::new("7", "Retail Sales Associate", "FusionTech, (Frisco, TX)"),
        JobPosting::new("8", "Sales Director ", "Vortex"),
        JobPosting::new("9", "Regional Sales Manager", "NexiTech"),
    ])
    .expect("compiled-in catalog is valid")
}

#[cfg(test)]
mod tests {
    use super::{sample_catalog, CatalogError, JobCatalog};
    use crate::model::posting::JobPosting;

    #[test]
    fn rejects_duplicate_ids() {
        let error = JobCatalog::new(vec![
            JobPosting::new("1", "First", "Acme"),
            JobPosting::new("1", "Second", "Acme"),
        ])
        .expect_err("duplicate ids must be rejected");
        assert_eq!(error, CatalogError::DuplicateId("1".to_string()));
    }

    #[test]
    fn rejects_invalid_posting() {
        let error = JobCatalog::new(vec![JobPosting::new("", "First", "Acme")])
            .expect_err("invalid posting must be rejected");
        assert!(matches!(error, CatalogError::InvalidPosting(_)));
    }

    #[test]
    fn sample_catalog_has_nine_ordered_records() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 9);
        let ids: Vec<&str> = catalog
            .postings()
            .iter()
            .map(|posting| posting.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
        assert!(catalog.get("1").and_then(|p| p.url.as_deref()).is_some());
        assert_eq!(catalog.get("2").and_then(|p| p.url.as_deref()), None);
    }
}
