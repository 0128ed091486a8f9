use chrono::{Datelike, Days, Months, NaiveDate};

/// The month shown by a calendar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// "2026년 3월"
    pub fn label(&self) -> String {
        format!("{}년 {}월", self.year(), self.month())
    }

    pub fn prev(&mut self) {
        if let Some(first) = self.first.checked_sub_months(Months::new(1)) {
            self.first = first;
        }
    }

    pub fn next(&mut self) {
        if let Some(first) = self.first.checked_add_months(Months::new(1)) {
            self.first = first;
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn days_in_month(&self) -> u32 {
        self.first
            .checked_add_months(Months::new(1))
            .map(|next| next.signed_duration_since(self.first).num_days() as u32)
            .unwrap_or(31)
    }

    /// Six Sunday-first weeks covering the month, padded with the
    /// neighbouring months' days
    pub fn weeks(&self) -> Vec<[NaiveDate; 7]> {
        let lead = u64::from(self.first.weekday().num_days_from_sunday());
        let start = self.first - Days::new(lead);

        (0..6u64)
            .map(|w| std::array::from_fn(|d| start + Days::new(w * 7 + d as u64)))
            .collect()
    }

    /// Day numbers laid out Sunday-first, `None` before the 1st
    pub fn day_cells(&self) -> Vec<Option<u32>> {
        let lead = self.first.weekday().num_days_from_sunday() as usize;
        std::iter::repeat(None)
            .take(lead)
            .chain((1..=self.days_in_month()).map(Some))
            .collect()
    }
}
