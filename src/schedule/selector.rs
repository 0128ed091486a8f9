use crate::error::SelectionError;
use crate::schedule::hours::HourPolicy;
use chrono::NaiveDateTime;
use tracing::{debug, warn};

/// Hours picked on one day's grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourSelection {
    Empty,
    /// One hour tapped, waiting for a second tap to close a range
    Anchor { hour: u8 },
    /// Contiguous inclusive interval
    Range { start: u8, end: u8 },
}

impl HourSelection {
    /// The booked interval. A lone anchor books that single hour.
    pub fn interval(&self) -> Option<(u8, u8)> {
        match *self {
            HourSelection::Empty => None,
            HourSelection::Anchor { hour } => Some((hour, hour)),
            HourSelection::Range { start, end } => Some((start, end)),
        }
    }

    pub fn duration_hours(&self) -> u32 {
        self.interval()
            .map_or(0, |(start, end)| u32::from(end - start) + 1)
    }

    pub fn contains(&self, hour: u8) -> bool {
        self.interval()
            .is_some_and(|(start, end)| (start..=end).contains(&hour))
    }

    pub(crate) fn range(start: u8, end: u8) -> Self {
        if start == end {
            HourSelection::Anchor { hour: start }
        } else {
            HourSelection::Range { start, end }
        }
    }
}

/// Tap-to-select hour grid of the reservation screen.
///
/// The first tap anchors, a later tap closes the range forward. Tapping the
/// anchor again clears it, tapping earlier moves the anchor, and any tap on a
/// completed range starts over.
#[derive(Debug, Clone)]
pub struct TimeRangeSelector {
    policy: HourPolicy,
    selection: HourSelection,
}

impl TimeRangeSelector {
    pub fn new(policy: HourPolicy) -> Self {
        Self {
            policy,
            selection: HourSelection::Empty,
        }
    }

    pub fn policy(&self) -> &HourPolicy {
        &self.policy
    }

    pub fn selection(&self) -> HourSelection {
        self.selection
    }

    pub fn duration_hours(&self) -> u32 {
        self.selection.duration_hours()
    }

    /// Switch day; the picked hours do not carry over
    pub fn reset(&mut self, policy: HourPolicy) {
        self.policy = policy;
        self.selection = HourSelection::Empty;
    }

    pub fn clear(&mut self) {
        self.selection = HourSelection::Empty;
    }

    /// Advance the clock; what is already picked stays, later picks see the
    /// new time
    pub fn set_clock(&mut self, now: NaiveDateTime) {
        self.policy = self.policy.with_now(now);
    }

    /// Apply one tap. On error nothing changes.
    pub fn pick(&mut self, hour: u8) -> Result<HourSelection, SelectionError> {
        self.policy.check_hour(hour)?;

        let next = match self.selection {
            HourSelection::Empty | HourSelection::Range { .. } => HourSelection::Anchor { hour },
            HourSelection::Anchor { hour: anchor } if hour == anchor => HourSelection::Empty,
            HourSelection::Anchor { hour: anchor } if hour < anchor => {
                HourSelection::Anchor { hour }
            }
            HourSelection::Anchor { hour: anchor } => {
                if let Err(e) = self.policy.check_range(anchor, hour) {
                    warn!("Rejected hour pick: {}", e);
                    return Err(e);
                }
                HourSelection::Range { start: anchor, end: hour }
            }
        };

        debug!("hour selection {:?} -> {:?}", self.selection, next);
        self.selection = next;
        Ok(next)
    }
}
