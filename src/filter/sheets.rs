//! Draft state of the headcount and price bottom sheets.
//!
//! A sheet is opened from the store, edited freely, and only reaches the
//! store when applied.

use crate::filter::store::FilterStore;
use crate::filter::types::PriceRange;

pub const PEOPLE_MIN: u32 = 1;
pub const PEOPLE_MAX: u32 = 20;
const PEOPLE_DEFAULT: u32 = 4;

pub const PRICE_SLIDER_MAX: u64 = 200_000;
pub const PRICE_STEP: u64 = 1_000;

/// Headcount stepper with quick-pick chips
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeopleSheet {
    people: u32,
}

impl PeopleSheet {
    /// Start from the stored headcount, or 4 when none is set
    pub fn open(store: &FilterStore) -> Self {
        Self {
            people: store.people().unwrap_or(PEOPLE_DEFAULT),
        }
    }

    pub fn people(&self) -> u32 {
        self.people
    }

    pub fn decrement(&mut self) {
        self.people = self.people.saturating_sub(1).max(PEOPLE_MIN);
    }

    pub fn increment(&mut self) {
        self.people = (self.people + 1).min(PEOPLE_MAX);
    }

    /// Quick-pick chip; the "5 or more" chip picks 5
    pub fn pick(&mut self, people: u32) {
        self.people = people.clamp(PEOPLE_MIN, PEOPLE_MAX);
    }

    pub fn apply(&self, store: &mut FilterStore) {
        store.set_people(self.people);
    }
}

/// Preset buttons under the price slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricePreset {
    Free,
    UpTo50k,
    From50kTo100k,
    From100kTo200k,
}

impl PricePreset {
    pub fn range(self) -> PriceRange {
        match self {
            PricePreset::Free => PriceRange::new(0, 0),
            PricePreset::UpTo50k => PriceRange::new(0, 50_000),
            PricePreset::From50kTo100k => PriceRange::new(50_000, 100_000),
            PricePreset::From100kTo200k => PriceRange::new(100_000, PRICE_SLIDER_MAX),
        }
    }
}

/// Dual-handle price slider over `0..=200_000` in steps of 1000
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceSheet {
    min: u64,
    max: u64,
}

impl Default for PriceSheet {
    fn default() -> Self {
        Self {
            min: 0,
            max: PRICE_SLIDER_MAX,
        }
    }
}

impl PriceSheet {
    pub fn open(store: &FilterStore) -> Self {
        store
            .price()
            .map(|r| Self { min: r.min, max: r.max })
            .unwrap_or_default()
    }

    pub fn range(&self) -> PriceRange {
        PriceRange::new(self.min, self.max)
    }

    /// Move the lower handle; it stays one step below the upper handle
    pub fn set_min(&mut self, value: u64) {
        self.min = value.min(self.max.saturating_sub(PRICE_STEP));
    }

    /// Move the upper handle; it stays one step above the lower handle
    pub fn set_max(&mut self, value: u64) {
        self.max = value.max(self.min + PRICE_STEP).min(PRICE_SLIDER_MAX);
    }

    pub fn preset(&mut self, preset: PricePreset) {
        let range = preset.range();
        self.min = range.min;
        self.max = range.max;
    }

    pub fn is_pressed(&self, preset: PricePreset) -> bool {
        self.range() == preset.range()
    }

    pub fn apply(&self, store: &mut FilterStore) {
        store.set_price(self.range());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepper_stays_within_bounds() {
        let mut sheet = PeopleSheet::open(&FilterStore::new());
        assert_eq!(sheet.people(), 4);

        for _ in 0..10 {
            sheet.decrement();
        }
        assert_eq!(sheet.people(), PEOPLE_MIN);

        for _ in 0..30 {
            sheet.increment();
        }
        assert_eq!(sheet.people(), PEOPLE_MAX);
    }

    #[test]
    fn people_sheet_reopens_with_stored_value() {
        let mut store = FilterStore::new();
        let mut sheet = PeopleSheet::open(&store);
        sheet.pick(2);
        sheet.apply(&mut store);

        assert_eq!(PeopleSheet::open(&store).people(), 2);
    }

    #[test]
    fn handles_cannot_cross() {
        let mut sheet = PriceSheet::default();
        sheet.set_max(30_000);
        sheet.set_min(50_000);
        assert_eq!(sheet.range(), PriceRange::new(29_000, 30_000));

        sheet.set_max(10_000);
        assert_eq!(sheet.range(), PriceRange::new(29_000, 30_000));
    }

    #[test]
    fn free_preset_reaches_the_store() {
        let mut store = FilterStore::new();
        let mut sheet = PriceSheet::open(&store);
        sheet.preset(PricePreset::Free);
        assert!(sheet.is_pressed(PricePreset::Free));
        sheet.apply(&mut store);

        assert_eq!(store.price(), Some(PriceRange::new(0, 0)));
        assert_eq!(store.price_chip_label(), "무료");
    }
}
