//! Category matchers and their shared text helpers.

pub mod catalog;
pub mod compound;
pub mod text;

pub use catalog::CatalogMatcher;
pub use compound::{CompoundRule, CompoundRuleMatcher, standard_rules};
