//! Points catalog mapping award categories to their point values.
//!
//! The catalog is built once and shared read-only by every scoring call.
//! Labels are stored verbatim; matching is case-insensitive, so labels such
//! as `"Tech lead"` keep their original spelling in results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Point value awarded for a single category.
pub type PointValue = u32;

/// Errors raised while validating a catalog or building matchers from it.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A category label was empty or whitespace only.
    #[error("category label cannot be empty")]
    EmptyLabel,
    /// A compound rule has an empty token, phrase, or label.
    #[error("compound rule for \"{label}\" has an empty {field}")]
    EmptyRuleField { label: String, field: &'static str },
    /// A compound rule token contains whitespace and can never equal a
    /// single whitespace-separated token.
    #[error("compound rule for \"{label}\" has multi-word token \"{token}\"")]
    WhitespaceToken { label: String, token: String },
    /// A label could not be compiled into a matcher.
    #[error("failed to compile pattern for \"{label}\": {source}")]
    Pattern {
        label: String,
        #[source]
        source: regex::Error,
    },
}

/// Built-in categories grouped as the activity-points programme lists them.
const STANDARD_CATEGORIES: &[(&str, PointValue)] = &[
    // national initiatives
    ("ncc", 60),
    ("nss", 60),
    ("ncc_c-certificate", 80),
    ("nptel + 4 week", 20),
    ("nptel + 8 week", 30),
    ("nptel + 12 week", 50),
    // sports and games
    ("sports participation", 8),
    ("games participation", 8),
    ("sports + 1st prize", 20),
    ("sports + 2nd prize", 16),
    ("sports + 3rd prize", 12),
    // cultural activities
    ("music", 8),
    ("performing arts", 8),
    ("literary arts", 8),
    ("cultural + 1st prize", 20),
    ("cultural + 2nd prize", 16),
    ("cultural + 3rd prize", 12),
    // professional self initiatives
    ("tech fest", 10),
    ("tech quiz", 10),
    ("Excel", 15),
    ("mooc", 50),
    ("competitions + ieee", 40),
    ("competitions + iet", 40),
    ("conference + iit", 40),
    ("conference + nit", 40),
    ("paper presentation + iit", 40),
    ("paper presentation + nit", 40),
    ("industrial training", 20),
    ("foreign language skill", 50),
    // entrepreneurship and innovation
    ("startup company", 60),
    ("patent filed", 30),
    ("patent published", 35),
    ("patent approved", 50),
    ("patent licensed", 80),
    ("prototype developed", 60),
    ("venture capital funding", 80),
    ("startup employment", 80),
    // leadership and management
    ("student society member", 10),
    ("student society executive", 15),
    ("festival coordinator", 15),
    ("chairman", 15),
    ("secretary", 15),
    ("chairperson", 15),
    ("Tech lead", 15),
];

/// Immutable mapping from category label to point value.
///
/// Building from an iterator with repeated labels keeps the last value.
///
/// # Examples
///
/// ```
/// use activity_points::CategoryCatalog;
///
/// let catalog: CategoryCatalog = [("ncc", 60), ("nss", 60)].into_iter().collect();
/// assert_eq!(catalog.points("ncc"), Some(60));
/// assert_eq!(catalog.points("mooc"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCatalog {
    points: BTreeMap<String, PointValue>,
}

impl CategoryCatalog {
    /// The catalog used by the activity-points programme.
    #[must_use]
    pub fn standard() -> Self {
        STANDARD_CATEGORIES.iter().copied().collect()
    }

    /// Point value for `label`, if the catalog defines it.
    #[must_use]
    pub fn points(&self, label: &str) -> Option<PointValue> {
        self.points.get(label).copied()
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.points.contains_key(label)
    }

    /// Iterate over `(label, points)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, PointValue)> {
        self.points.iter().map(|(label, points)| (label.as_str(), *points))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Ensure every label is non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyLabel`] if any label is empty or
    /// whitespace only.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.points.keys().any(|label| label.trim().is_empty()) {
            Err(CatalogError::EmptyLabel)
        } else {
            Ok(())
        }
    }
}

impl<S: Into<String>> FromIterator<(S, PointValue)> for CategoryCatalog {
    fn from_iter<I: IntoIterator<Item = (S, PointValue)>>(iter: I) -> Self {
        Self {
            points: iter
                .into_iter()
                .map(|(label, points)| (label.into(), points))
                .collect(),
        }
    }
}
