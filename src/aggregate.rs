//! Summing matched categories into a points total.

use crate::{
    api::MatchedCategorySet,
    catalog::{CategoryCatalog, PointValue},
};

/// Sum the catalog values of `matched`.
///
/// Labels absent from the catalog contribute nothing. The total saturates
/// rather than wrapping.
///
/// # Examples
///
/// ```
/// use activity_points::aggregate::total_points;
/// use activity_points::api::MatchedCategorySet;
/// use activity_points::CategoryCatalog;
///
/// let matched: MatchedCategorySet = ["ncc".to_owned(), "nss".to_owned()].into();
/// assert_eq!(total_points(&CategoryCatalog::standard(), &matched), 120);
/// ```
#[must_use]
pub fn total_points(catalog: &CategoryCatalog, matched: &MatchedCategorySet) -> PointValue {
    matched
        .iter()
        .map(|label| catalog.points(label).unwrap_or(0))
        .fold(0, PointValue::saturating_add)
}
