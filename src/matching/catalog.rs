//! Whole-word matching of catalog labels.

use crate::{
    api::MatchedCategorySet,
    catalog::{CatalogError, CategoryCatalog},
    matching::text::whole_word_pattern,
};
use regex::Regex;

/// Tests every catalog label against text as a literal whole phrase.
///
/// Patterns are compiled once when the matcher is built.
///
/// # Examples
///
/// ```
/// use activity_points::api::MatchedCategorySet;
/// use activity_points::matching::catalog::CatalogMatcher;
/// use activity_points::CategoryCatalog;
///
/// let catalog: CategoryCatalog = [("nss", 60)].into_iter().collect();
/// let matcher = CatalogMatcher::new(&catalog).unwrap();
/// let mut matched = MatchedCategorySet::new();
/// matcher.apply("NSS camp", &mut matched);
/// assert!(matched.contains("nss"));
/// ```
#[derive(Debug, Clone)]
pub struct CatalogMatcher {
    patterns: Vec<(String, Regex)>,
}

impl CatalogMatcher {
    /// Compile a pattern for every label in `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Pattern`] if a label cannot be compiled.
    pub fn new(catalog: &CategoryCatalog) -> Result<Self, CatalogError> {
        let patterns = catalog
            .iter()
            .map(|(label, _)| {
                whole_word_pattern(label)
                    .map(|re| (label.to_owned(), re))
                    .map_err(|source| CatalogError::Pattern {
                        label: label.to_owned(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Add every label found in `text` that is not already in `matched`.
    pub fn apply(&self, text: &str, matched: &mut MatchedCategorySet) {
        for (label, re) in &self.patterns {
            if !matched.contains(label) && re.is_match(text) {
                matched.insert(label.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn run(catalog: &CategoryCatalog, text: &str) -> MatchedCategorySet {
        #[expect(clippy::expect_used, reason = "escaped labels always compile")]
        let matcher = CatalogMatcher::new(catalog).expect("build matcher");
        let mut matched = MatchedCategorySet::new();
        matcher.apply(text, &mut matched);
        matched
    }

    fn set(labels: &[&str]) -> MatchedCategorySet {
        labels.iter().map(|s| (*s).to_owned()).collect()
    }

    #[rstest]
    #[case("ncc nss", &["ncc", "nss"])]
    #[case("nssx", &[])]
    #[case("sports participation and games participation", &["games participation", "sports participation"])]
    #[case("tech lead", &["Tech lead"])]
    #[case("advanced excel workshop", &["Excel"])]
    #[case("secretary and chairperson", &["chairperson", "secretary"])]
    #[case("chairpersons", &[])]
    fn matches_standard_labels(#[case] text: &str, #[case] expected: &[&str]) {
        assert_eq!(run(&CategoryCatalog::standard(), text), set(expected));
    }

    #[rstest]
    #[case("nptel + 4 week", &["nptel + 4 week"])]
    #[case("nptel  4 week", &[])]
    #[case("nptel 4 week", &[])]
    fn label_text_is_literal(#[case] text: &str, #[case] expected: &[&str]) {
        let catalog: CategoryCatalog = [("nptel + 4 week", 20)].into_iter().collect();
        assert_eq!(run(&catalog, text), set(expected));
    }

    #[test]
    fn skips_labels_already_matched() {
        let catalog: CategoryCatalog = [("ncc", 60), ("nss", 60)].into_iter().collect();
        #[expect(clippy::expect_used, reason = "escaped labels always compile")]
        let matcher = CatalogMatcher::new(&catalog).expect("build matcher");
        let mut matched = set(&["ncc"]);
        matcher.apply("nss", &mut matched);
        assert_eq!(matched, set(&["ncc", "nss"]));
    }
}
