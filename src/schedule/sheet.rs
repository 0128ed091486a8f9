use crate::error::SelectionError;
use crate::filter::store::FilterStore;
use crate::schedule::calendar::MonthCursor;
use crate::schedule::hours::{HourPolicy, LAST_HOUR};
use crate::schedule::selector::HourSelection;
use chrono::NaiveDate;
use tracing::warn;

const DRAFT_HOUR: u8 = 1;

/// Date and time bottom sheet of the home screen.
///
/// Hours can be set two ways: tapping cells on the hour grid, or dragging the
/// two slider handles. A tap on an existing range moves whichever end is
/// closer to the tapped hour, so the interval is never dropped by a tap; only
/// [`clear`](Self::clear) or a day change empties it.
///
/// Taps are checked against the hour policy as they happen. Slider drags are
/// not: the handles move freely and the interval is checked on
/// [`apply`](Self::apply).
#[derive(Debug, Clone)]
pub struct DateTimeSheet {
    policy: HourPolicy,
    month: MonthCursor,
    selection: HourSelection,
}

impl DateTimeSheet {
    /// Open on today's date as given by `policy`'s clock
    pub fn open(policy: HourPolicy) -> Self {
        Self {
            month: MonthCursor::containing(policy.date()),
            policy,
            selection: HourSelection::Empty,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.policy.date()
    }

    pub fn month(&self) -> &MonthCursor {
        &self.month
    }

    pub fn month_mut(&mut self) -> &mut MonthCursor {
        &mut self.month
    }

    pub fn selection(&self) -> HourSelection {
        self.selection
    }

    pub fn policy(&self) -> &HourPolicy {
        &self.policy
    }

    /// Slider positions: the picked interval, or the draft default 1..=1
    pub fn slider(&self) -> (u8, u8) {
        self.selection.interval().unwrap_or((DRAFT_HOUR, DRAFT_HOUR))
    }

    pub fn clear(&mut self) {
        self.selection = HourSelection::Empty;
    }

    /// Pick another day. Hours that are no longer bookable on it are dropped.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.policy = self.policy.for_date(date);
        self.month = MonthCursor::containing(date);
        if let Some((start, end)) = self.selection.interval() {
            if self.policy.check_range(start, end).is_err() {
                self.selection = HourSelection::Empty;
            }
        }
    }

    /// Tap an hour cell
    pub fn pick(&mut self, hour: u8) -> Result<HourSelection, SelectionError> {
        self.policy.check_hour(hour)?;

        let (start, end) = match self.selection {
            HourSelection::Empty => (hour, hour),
            HourSelection::Anchor { hour: anchor } => (anchor.min(hour), anchor.max(hour)),
            HourSelection::Range { start, end } => {
                if hour < start {
                    (hour, end)
                } else if hour > end {
                    (start, hour)
                } else if hour - start <= end - hour {
                    (hour, end)
                } else {
                    (start, hour)
                }
            }
        };

        self.commit(start, end)
    }

    /// Drag the start handle; it cannot pass the end handle
    pub fn set_start(&mut self, hour: u8) -> HourSelection {
        let (_, end) = self.slider();
        self.selection = HourSelection::range(hour.min(end), end);
        self.selection
    }

    /// Drag the end handle; it cannot pass the start handle
    pub fn set_end(&mut self, hour: u8) -> HourSelection {
        let (start, _) = self.slider();
        self.selection = HourSelection::range(start, hour.max(start).min(LAST_HOUR));
        self.selection
    }

    /// Write the chosen day and hours into the filter store. The store is
    /// left untouched when the interval holds a disabled hour.
    pub fn apply(&self, store: &mut FilterStore) -> Result<(), SelectionError> {
        let (start, end) = self.slider();
        if let Err(e) = self.policy.check_range(start, end) {
            warn!("Refusing to apply {}~{}: {}", start, end, e);
            return Err(e);
        }
        store.set_datetime(self.date(), start, end);
        Ok(())
    }

    fn commit(&mut self, start: u8, end: u8) -> Result<HourSelection, SelectionError> {
        if let Err(e) = self.policy.check_range(start, end) {
            warn!("Rejected hour range: {}", e);
            return Err(e);
        }
        self.selection = HourSelection::range(start, end);
        Ok(self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn clock() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 7, 1)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap()
    }

    fn tomorrow_sheet() -> DateTimeSheet {
        let now = clock();
        DateTimeSheet::open(HourPolicy::new(now.date().succ_opt().unwrap(), now))
    }

    #[test]
    fn second_tap_closes_a_range_in_either_direction() {
        let mut sheet = tomorrow_sheet();
        sheet.pick(15).unwrap();
        assert_eq!(sheet.pick(12), Ok(HourSelection::Range { start: 12, end: 15 }));
    }

    #[test]
    fn tap_moves_the_closer_end() {
        let mut sheet = tomorrow_sheet();
        sheet.pick(10).unwrap();
        sheet.pick(20).unwrap();

        assert_eq!(sheet.pick(12), Ok(HourSelection::Range { start: 12, end: 20 }));
        assert_eq!(sheet.pick(19), Ok(HourSelection::Range { start: 12, end: 19 }));
        assert_eq!(sheet.pick(21), Ok(HourSelection::Range { start: 12, end: 21 }));
        assert_eq!(sheet.pick(11), Ok(HourSelection::Range { start: 11, end: 21 }));
    }

    #[test]
    fn tapping_the_anchor_keeps_it() {
        let mut sheet = tomorrow_sheet();
        sheet.pick(9).unwrap();
        assert_eq!(sheet.pick(9), Ok(HourSelection::Anchor { hour: 9 }));
    }

    #[test]
    fn extending_over_blackout_is_rejected() {
        let mut sheet = tomorrow_sheet();
        sheet.pick(6).unwrap();
        sheet.pick(8).unwrap();

        assert!(matches!(
            sheet.pick(2),
            Err(SelectionError::ContainsBlockedHour { blocked: 3, .. })
        ));
        assert_eq!(sheet.selection(), HourSelection::Range { start: 6, end: 8 });
    }

    #[test]
    fn slider_handles_clamp_against_each_other() {
        let mut sheet = tomorrow_sheet();
        assert_eq!(sheet.slider(), (1, 1));

        sheet.pick(7).unwrap();
        sheet.set_end(12);
        assert_eq!(sheet.slider(), (7, 12));
        sheet.set_start(9);
        assert_eq!(sheet.slider(), (9, 12));
        sheet.set_end(3);
        assert_eq!(sheet.slider(), (9, 9));
        sheet.set_start(11);
        assert_eq!(sheet.slider(), (9, 9));
    }

    #[test]
    fn slider_drags_from_the_draft_to_an_evening_range() {
        let mut sheet = tomorrow_sheet();
        for hour in 2..=20 {
            sheet.set_end(hour);
        }
        for hour in 2..=18 {
            sheet.set_start(hour);
        }
        assert_eq!(sheet.slider(), (18, 20));
        assert_eq!(sheet.selection(), HourSelection::Range { start: 18, end: 20 });

        let mut store = FilterStore::new();
        sheet.apply(&mut store).unwrap();
        assert_eq!(store.datetime(), Some("2026-07-02 18:00~20:00"));
    }

    #[test]
    fn apply_refuses_a_draft_over_blackout() {
        let mut sheet = tomorrow_sheet();
        sheet.set_end(12);
        assert_eq!(sheet.slider(), (1, 12));

        let mut store = FilterStore::new();
        assert!(matches!(
            sheet.apply(&mut store),
            Err(SelectionError::ContainsBlockedHour { blocked: 3, .. })
        ));
        assert_eq!(store.datetime(), None);
    }

    #[test]
    fn slider_handles_stop_at_the_last_hour() {
        let mut sheet = tomorrow_sheet();
        sheet.pick(20).unwrap();
        sheet.set_end(30);
        assert_eq!(sheet.slider(), (20, 23));
    }

    #[test]
    fn apply_writes_the_label() {
        let mut sheet = tomorrow_sheet();
        sheet.pick(18).unwrap();
        sheet.pick(21).unwrap();

        let mut store = FilterStore::new();
        sheet.apply(&mut store).unwrap();
        assert_eq!(store.datetime(), Some("2026-07-02 18:00~21:00"));
    }

    #[test]
    fn switching_to_today_drops_started_hours() {
        let mut sheet = tomorrow_sheet();
        sheet.pick(10).unwrap();
        sheet.pick(16).unwrap();

        sheet.select_date(clock().date());
        assert_eq!(sheet.selection(), HourSelection::Empty);

        let mut store = FilterStore::new();
        assert!(sheet.apply(&mut store).is_err());
        assert_eq!(store.datetime(), None);
    }
}
