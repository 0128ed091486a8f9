use crate::error::SelectionError;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use std::collections::BTreeSet;

/// Hours that can never be booked
pub const BLACKOUT_HOURS: [u8; 3] = [3, 4, 5];

pub const LAST_HOUR: u8 = 23;

/// Which hour cells of one day are bookable.
///
/// An hour is disabled when it is a blackout hour, or when the day is today
/// and the hour has already started. The clock is passed in, never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourPolicy {
    date: NaiveDate,
    now: NaiveDateTime,
    blackout: BTreeSet<u8>,
}

impl HourPolicy {
    pub fn new(date: NaiveDate, now: NaiveDateTime) -> Self {
        Self {
            date,
            now,
            blackout: BLACKOUT_HOURS.into_iter().collect(),
        }
    }

    pub fn with_blackout(mut self, hours: impl IntoIterator<Item = u8>) -> Self {
        self.blackout = hours.into_iter().collect();
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Same clock, another day
    pub fn for_date(&self, date: NaiveDate) -> Self {
        Self {
            date,
            ..self.clone()
        }
    }

    /// Same day, another clock reading
    pub fn with_now(&self, now: NaiveDateTime) -> Self {
        Self {
            now,
            ..self.clone()
        }
    }

    pub fn is_today(&self) -> bool {
        self.date == self.now.date()
    }

    pub fn is_disabled(&self, hour: u8) -> bool {
        if hour > LAST_HOUR || self.blackout.contains(&hour) {
            return true;
        }
        self.is_today() && u32::from(hour) <= self.now.hour()
    }

    pub fn disabled_hours(&self) -> Vec<u8> {
        (0..=LAST_HOUR).filter(|h| self.is_disabled(*h)).collect()
    }

    /// Accept a single hour cell
    pub fn check_hour(&self, hour: u8) -> Result<(), SelectionError> {
        if hour > LAST_HOUR {
            return Err(SelectionError::OutOfRange(hour));
        }
        if self.is_disabled(hour) {
            return Err(SelectionError::HourDisabled(hour));
        }
        Ok(())
    }

    /// Accept `start..=end` only if every hour in it is bookable
    pub fn check_range(&self, start: u8, end: u8) -> Result<(), SelectionError> {
        for hour in [start, end] {
            if hour > LAST_HOUR {
                return Err(SelectionError::OutOfRange(hour));
            }
        }
        match (start..=end).find(|h| self.is_disabled(*h)) {
            Some(blocked) => Err(SelectionError::ContainsBlockedHour { start, end, blocked }),
            None => Ok(()),
        }
    }
}
