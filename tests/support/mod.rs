#![allow(dead_code, reason = "each test crate uses a subset of helpers")]

use activity_points::{CategoryCatalog, MatchedCategorySet, ScoringPipeline};

#[must_use]
pub fn standard_pipeline() -> ScoringPipeline {
    ScoringPipeline::new(CategoryCatalog::standard())
        .unwrap_or_else(|e| panic!("standard catalog rejected: {e}"))
}

#[must_use]
pub fn labels<'a>(items: impl IntoIterator<Item = &'a str>) -> MatchedCategorySet {
    items.into_iter().map(str::to_owned).collect()
}
