//! Progress towards the programme's required points total.

use crate::{ScoreResult, catalog::PointValue};
use serde::{Deserialize, Serialize};

/// Points a student needs unless configured otherwise.
pub const DEFAULT_REQUIRED_POINTS: PointValue = 100;

/// Earned points measured against a required total.
///
/// `completion_percent` is rounded to the nearest whole percent and capped
/// at 100. A zero requirement is always complete.
///
/// # Examples
///
/// ```
/// use activity_points::ActivityProgress;
///
/// let progress = ActivityProgress::new(45, 100);
/// assert_eq!(progress.completion_percent, 45);
/// assert!(!progress.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityProgress {
    pub earned: PointValue,
    pub required: PointValue,
    pub completion_percent: u8,
}

impl ActivityProgress {
    #[must_use]
    pub fn new(earned: PointValue, required: PointValue) -> Self {
        let completion_percent = if required == 0 {
            100
        } else {
            let earned = u64::from(earned);
            let required = u64::from(required);
            let rounded = (earned * 100 + required / 2) / required;
            u8::try_from(rounded.min(100)).unwrap_or(100)
        };
        Self {
            earned,
            required,
            completion_percent,
        }
    }

    /// Sum the totals of several scored certificates.
    #[must_use]
    pub fn from_results<'a>(
        results: impl IntoIterator<Item = &'a ScoreResult>,
        required: PointValue,
    ) -> Self {
        let earned = results
            .into_iter()
            .map(|result| result.total_points)
            .fold(0, PointValue::saturating_add);
        Self::new(earned, required)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.earned >= self.required
    }
}
