//! End-to-end certificate scoring.
//!
//! Normalises OCR text, applies the compound rules, then the whole-word
//! catalog matcher, and sums the matched categories. The pipeline holds only
//! read-only state, so one instance can be shared across threads.

use crate::{
    CertificateScorer, ScoreResult,
    aggregate::total_points,
    api::MatchedCategorySet,
    catalog::{CatalogError, CategoryCatalog},
    config::ScoringConfig,
    matching::{CatalogMatcher, CompoundRule, CompoundRuleMatcher, standard_rules, text::normalize},
};
use tracing::debug;

/// `CertificateScorer` backed by a catalog and a compound rule table.
///
/// # Examples
///
/// ```
/// use activity_points::{CategoryCatalog, CertificateScorer, ScoringPipeline};
///
/// let pipeline = ScoringPipeline::new(CategoryCatalog::standard()).unwrap();
/// let result = pipeline.score("NCC NSS");
/// assert_eq!(result.total_points, 120);
/// ```
#[derive(Debug, Clone)]
pub struct ScoringPipeline {
    catalog: CategoryCatalog,
    compound: CompoundRuleMatcher,
    matcher: CatalogMatcher,
}

impl ScoringPipeline {
    /// Create a pipeline over `catalog` with the standard compound rules.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the catalog has a blank label or a label
    /// cannot be compiled.
    pub fn new(catalog: CategoryCatalog) -> Result<Self, CatalogError> {
        Self::with_rules(catalog, standard_rules())
    }

    /// Create a pipeline over `catalog` with a custom compound rule table.
    ///
    /// Rules whose label the catalog does not define are dropped so every
    /// matched label carries a point value.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the catalog or any rule is malformed.
    pub fn with_rules(
        catalog: CategoryCatalog,
        rules: impl IntoIterator<Item = CompoundRule>,
    ) -> Result<Self, CatalogError> {
        catalog.validate()?;
        let rules = rules
            .into_iter()
            .map(|rule| rule.validate().map(|()| rule))
            .collect::<Result<Vec<_>, _>>()?;
        let compound = CompoundRuleMatcher::new(rules).restricted_to(&catalog);
        let matcher = CatalogMatcher::new(&catalog)?;
        Ok(Self {
            catalog,
            compound,
            matcher,
        })
    }

    /// Create a pipeline from a loaded [`ScoringConfig`].
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the configuration is malformed.
    pub fn from_config(config: ScoringConfig) -> Result<Self, CatalogError> {
        Self::with_rules(config.categories, config.compound_rules)
    }

    #[must_use]
    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// Find the categories present in already normalised text.
    #[must_use]
    pub fn match_categories(&self, normalized: &str) -> MatchedCategorySet {
        let mut matched = MatchedCategorySet::new();
        self.compound.apply(normalized, &mut matched);
        self.matcher.apply(normalized, &mut matched);
        matched
    }
}

impl CertificateScorer for ScoringPipeline {
    fn score(&self, text: &str) -> ScoreResult {
        let normalized_text = normalize(text);
        let matched_categories = self.match_categories(&normalized_text);
        let total_points = total_points(&self.catalog, &matched_categories);
        debug!(
            categories = ?matched_categories,
            total_points,
            "scored certificate text"
        );
        ScoreResult {
            normalized_text,
            matched_categories,
            total_points,
        }
    }
}
