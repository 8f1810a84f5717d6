use crate::catalog::PointValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Category labels matched in one certificate, each counted once.
///
/// Serialised as a sorted list; callers should still compare it as a set.
pub type MatchedCategorySet = BTreeSet<String>;

/// Outcome of scoring one certificate's OCR text.
///
/// `total_points` is the sum of the catalog values of `matched_categories`.
///
/// # Examples
///
/// ```
/// use activity_points::api::ScoreResult;
///
/// let result = ScoreResult::default();
/// assert!(result.matched_categories.is_empty());
/// assert_eq!(result.total_points, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub normalized_text: String,
    pub matched_categories: MatchedCategorySet,
    pub total_points: PointValue,
}

/// Diagnostic trace pairing the raw input with its score.
///
/// # Examples
///
/// ```
/// use activity_points::api::{ScoreResult, ScoreTrace};
///
/// let trace = ScoreTrace { text: "NSS".into(), result: ScoreResult::default() };
/// assert_eq!(trace.result.total_points, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTrace {
    pub text: String,
    pub result: ScoreResult,
}

/// Trait for turning certificate text into a points score.
///
/// Scoring never fails: text without recognised categories scores zero.
pub trait CertificateScorer {
    /// Score the raw OCR text of a certificate.
    fn score(&self, text: &str) -> ScoreResult;

    /// Produce a diagnostic trace for the raw text.
    fn trace(&self, text: &str) -> ScoreTrace {
        ScoreTrace {
            text: text.to_owned(),
            result: self.score(text),
        }
    }
}
