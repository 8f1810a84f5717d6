//! `rstest` and `proptest` coverage for `ScoringPipeline`.

use activity_points::{
    CategoryCatalog, CertificateScorer, ScoringPipeline,
    matching::CompoundRule,
};
use proptest::prelude::*;
use rstest::rstest;
use std::sync::Arc;
use std::thread;

mod support;
use support::{labels, standard_pipeline};

#[rstest]
#[case("ncc nss", &["ncc", "nss"], 120)]
#[case("NCC NSS", &["ncc", "nss"], 120)]
#[case("Cadet of NCC holding a C Certificate", &["ncc", "ncc_c-certificate"], 140)]
#[case("nptel 8 week course completed", &["nptel + 8 week"], 30)]
#[case("nptel + 4 week elite", &["nptel + 4 week"], 20)]
#[case("Sports Participation and sports 2nd prize", &["sports + 2nd prize", "sports participation"], 24)]
#[case("MOOC on Industrial Training", &["industrial training", "mooc"], 70)]
#[case("Patent Published; Prototype Developed", &["patent published", "prototype developed"], 95)]
#[case("nss nss nss", &["nss"], 60)]
#[case("nssx", &[], 0)]
#[case("", &[], 0)]
fn scores_certificate_text(
    #[case] text: &str,
    #[case] expected: &[&str],
    #[case] points: u32,
) {
    let result = standard_pipeline().score(text);
    assert_eq!(result.matched_categories, labels(expected.iter().copied()));
    assert_eq!(result.total_points, points);
}

#[rstest]
fn custom_rules_are_plain_data() {
    let catalog: CategoryCatalog = [("hackathon + winner", 25), ("hackathon", 5)]
        .into_iter()
        .collect();
    let rules = [CompoundRule::new("hackathon", "winner", "hackathon + winner")];
    let pipeline = ScoringPipeline::with_rules(catalog, rules)
        .unwrap_or_else(|e| panic!("unexpected catalog error: {e}"));
    let result = pipeline.score("Hackathon 2024 Winner");
    assert_eq!(
        result.matched_categories,
        labels(["hackathon", "hackathon + winner"])
    );
    assert_eq!(result.total_points, 30);
}

#[rstest]
fn concurrent_calls_agree() {
    let pipeline = Arc::new(standard_pipeline());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let pipeline = Arc::clone(&pipeline);
            thread::spawn(move || pipeline.score("ncc c certificate and nss"))
        })
        .collect();
    for handle in handles {
        let result = handle
            .join()
            .unwrap_or_else(|_| panic!("scoring thread panicked"));
        assert_eq!(result.total_points, 200);
    }
}

proptest! {
    #[test]
    fn scoring_is_idempotent(text in "[a-zA-Z0-9 +\\-_\n]{0,60}") {
        let pipeline = standard_pipeline();
        prop_assert_eq!(pipeline.score(&text), pipeline.score(&text));
    }

    #[test]
    fn scoring_ignores_case(text in "[a-zA-Z0-9 +\\-_]{0,60}") {
        let pipeline = standard_pipeline();
        let upper = pipeline.score(&text.to_uppercase());
        let lower = pipeline.score(&text.to_lowercase());
        prop_assert_eq!(upper.matched_categories, lower.matched_categories);
        prop_assert_eq!(upper.total_points, lower.total_points);
    }

    #[test]
    fn digits_alone_score_zero(text in "[0-9 ]{0,40}") {
        let result = standard_pipeline().score(&text);
        prop_assert!(result.matched_categories.is_empty());
        prop_assert_eq!(result.total_points, 0);
    }

    #[test]
    fn total_is_sum_of_matches(text in "(ncc|nss|mooc|nptel|8 week|sports|1st prize|music|x| ){0,12}") {
        let pipeline = standard_pipeline();
        let result = pipeline.score(&text);
        let expected: u32 = result
            .matched_categories
            .iter()
            .map(|label| pipeline.catalog().points(label).unwrap_or_else(|| panic!("{label} not in catalog")))
            .sum();
        prop_assert_eq!(result.total_points, expected);
    }
}
