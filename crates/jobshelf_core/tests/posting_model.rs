use jobshelf_core::{JobPosting, PostingValidationError};

#[test]
fn with_url_sets_url_and_validates() {
    let posting = JobPosting::with_url(
        "1",
        "Seasonal Sales Associate",
        "PlanetStream",
        "https://www.linkedin.com/jobs/view/3701359617/?trk=jobs_biz_prem_srch",
    );
    posting.validate().expect("posting should be valid");
    assert_eq!(
        posting.url.as_deref(),
        Some("https://www.linkedin.com/jobs/view/3701359617/?trk=jobs_biz_prem_srch")
    );
}

#[test]
fn validate_reports_the_first_broken_invariant() {
    let posting = JobPosting::new("", "", "Acme");
    assert_eq!(posting.validate(), Err(PostingValidationError::EmptyId));
}

#[test]
fn posting_serialization_uses_expected_wire_fields() {
    let posting = JobPosting::with_url("2", "Outside Sales Representative", "Aether", "https://example.com/2");

    let json = serde_json::to_value(&posting).unwrap();
    assert_eq!(json["id"], "2");
    assert_eq!(json["title"], "Outside Sales Representative");
    assert_eq!(json["company"], "Aether");
    assert_eq!(json["url"], "https://example.com/2");

    let decoded: JobPosting = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, posting);
}

#[test]
fn posting_without_url_serializes_null_url() {
    let posting = JobPosting::new("5", "Retail Sales Associate", "TidalForce");
    let json = serde_json::to_value(&posting).unwrap();
    assert!(json["url"].is_null());
}
