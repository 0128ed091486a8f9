use serde::{Deserialize, Serialize};

/// Headcount at or above which the filter means "this many or more"
pub const HEADCOUNT_OR_MORE: u32 = 5;

/// Inclusive bounds on a room's total price (rate times occupancy)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// `{0, 0}` selects free rooms only
    pub fn is_free_only(&self) -> bool {
        self.min == 0 && self.max == 0
    }

    pub fn contains(&self, total: u64) -> bool {
        if self.is_free_only() {
            total == 0
        } else {
            self.min <= total && total <= self.max
        }
    }
}

/// Search parameters for narrowing the room list; `None` means no constraint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Case-insensitive substring of the room name
    pub search_text: Option<String>,
    /// Exact occupancy below 5, "5 or more" from 5 up
    pub min_headcount: Option<u32>,
    pub price_range: Option<PriceRange>,
    pub discount_only: bool,
}
