//! Compound category rules.
//!
//! A compound category needs two independent signals: a whole token in the
//! whitespace-split text and a phrase anywhere in the text. Rules are plain
//! data evaluated uniformly, so adding a category means adding a row.

use crate::{
    api::MatchedCategorySet,
    catalog::{CatalogError, CategoryCatalog},
    matching::text::tokens,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// `(token, phrase, label)` rows recognised by the activity-points programme.
const STANDARD_RULES: &[(&str, &str, &str)] = &[
    ("ncc", "c certificate", "ncc_c-certificate"),
    ("nptel", "8 week", "nptel + 8 week"),
    ("nptel", "12 week", "nptel + 12 week"),
    ("nptel", "4 week", "nptel + 4 week"),
    ("sports", "1st prize", "sports + 1st prize"),
    ("sports", "2nd prize", "sports + 2nd prize"),
    ("sports", "3rd prize", "sports + 3rd prize"),
    ("cultural", "1st prize", "cultural + 1st prize"),
    ("cultural", "2nd prize", "cultural + 2nd prize"),
    ("cultural", "3rd prize", "cultural + 3rd prize"),
    ("startup", "venture capital", "venture capital funding"),
];

/// A token/phrase pair that adds `label` when both are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompoundRule {
    /// Word that must appear as a whole whitespace-separated token.
    pub token: String,
    /// Text that must appear anywhere, possibly spanning several words.
    pub phrase: String,
    /// Catalog label added when the rule fires.
    pub label: String,
}

impl CompoundRule {
    #[must_use]
    pub fn new(token: impl Into<String>, phrase: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            phrase: phrase.into(),
            label: label.into(),
        }
    }

    /// Ensure the token, phrase, and label are non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyRuleField`] naming the first blank field,
    /// or [`CatalogError::WhitespaceToken`] if the token spans several words.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let blank = [
            ("label", &self.label),
            ("token", &self.token),
            ("phrase", &self.phrase),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty());
        if let Some((field, _)) = blank {
            return Err(CatalogError::EmptyRuleField {
                label: self.label.clone(),
                field,
            });
        }
        if self.token.contains(char::is_whitespace) {
            return Err(CatalogError::WhitespaceToken {
                label: self.label.clone(),
                token: self.token.clone(),
            });
        }
        Ok(())
    }

    fn matches(&self, words: &HashSet<&str>, text: &str) -> bool {
        words.contains(self.token.as_str()) && text.contains(self.phrase.as_str())
    }
}

/// The standard compound rule table.
///
/// # Examples
///
/// ```
/// use activity_points::matching::compound::standard_rules;
///
/// assert!(standard_rules().iter().any(|r| r.label == "ncc_c-certificate"));
/// ```
#[must_use]
pub fn standard_rules() -> Vec<CompoundRule> {
    STANDARD_RULES
        .iter()
        .map(|&(token, phrase, label)| CompoundRule::new(token, phrase, label))
        .collect()
}

/// Evaluates every compound rule against normalised text.
///
/// Rules fire independently; one firing never suppresses another.
///
/// # Examples
///
/// ```
/// use activity_points::api::MatchedCategorySet;
/// use activity_points::matching::compound::CompoundRuleMatcher;
///
/// let matcher = CompoundRuleMatcher::standard();
/// let mut matched = MatchedCategorySet::new();
/// matcher.apply("nptel 8 week course", &mut matched);
/// assert!(matched.contains("nptel + 8 week"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompoundRuleMatcher {
    rules: Vec<CompoundRule>,
}

impl CompoundRuleMatcher {
    /// Build a matcher from `rules`, lowercasing tokens and phrases to line
    /// up with normalised text.
    #[must_use]
    pub fn new(rules: impl IntoIterator<Item = CompoundRule>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .map(|rule| CompoundRule {
                    token: rule.token.to_lowercase(),
                    phrase: rule.phrase.to_lowercase(),
                    label: rule.label,
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn standard() -> Self {
        Self::new(standard_rules())
    }

    /// Drop rules whose label the catalog does not define.
    #[must_use]
    pub fn restricted_to(mut self, catalog: &CategoryCatalog) -> Self {
        self.rules.retain(|rule| {
            let known = catalog.contains(&rule.label);
            if !known {
                debug!(label = %rule.label, "dropping compound rule with no catalog entry");
            }
            known
        });
        self
    }

    #[must_use]
    pub fn rules(&self) -> &[CompoundRule] {
        &self.rules
    }

    /// Add the label of every rule satisfied by `text` to `matched`.
    pub fn apply(&self, text: &str, matched: &mut MatchedCategorySet) {
        let words: HashSet<&str> = tokens(text).collect();
        for rule in &self.rules {
            if rule.matches(&words, text) {
                matched.insert(rule.label.clone());
            }
        }
    }
}
