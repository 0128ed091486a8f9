use crate::error::{ReservationError, SelectionError};
use crate::models::{CheckoutPayload, OptionItem, ReserveRequest};
use crate::reservation::price::{compute_total, OPTION_PRICE_PER_HOUR};
use crate::schedule::calendar::MonthCursor;
use crate::schedule::hours::HourPolicy;
use crate::schedule::selector::{HourSelection, TimeRangeSelector};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::{info, warn};

const OPTION_NAMES: [&str; 6] = [
    "Bass",
    "Guitar amp",
    "Acoustic guitar",
    "Keyboard",
    "Electric guitar",
    "Sticks",
];

/// Add-on equipment counters; a count never drops below zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionCounter {
    items: Vec<OptionItem>,
}

impl Default for OptionCounter {
    fn default() -> Self {
        Self::with_names(OPTION_NAMES)
    }
}

impl OptionCounter {
    pub fn with_names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            items: names
                .into_iter()
                .map(|name| OptionItem {
                    name: name.into(),
                    count: 0,
                })
                .collect(),
        }
    }

    pub fn items(&self) -> &[OptionItem] {
        &self.items
    }

    /// Change one counter by `delta`. Returns false, leaving it alone, when
    /// the index is unknown or the count would go negative.
    pub fn adjust(&mut self, index: usize, delta: i32) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };
        match item.count.checked_add_signed(delta) {
            Some(count) => {
                item.count = count;
                true
            }
            None => false,
        }
    }

    pub fn counts(&self) -> Vec<u32> {
        self.items.iter().map(|i| i.count).collect()
    }

    pub fn total(&self) -> u32 {
        self.items.iter().map(|i| i.count).sum()
    }
}

/// The reservation screen: one day, an hour range, headcount and add-ons
#[derive(Debug, Clone)]
pub struct ReservationForm {
    request: ReserveRequest,
    today: NaiveDate,
    month: MonthCursor,
    selector: TimeRangeSelector,
    person_count: u32,
    options: OptionCounter,
}

impl ReservationForm {
    /// Open the form on today's date
    pub fn new(request: ReserveRequest, now: NaiveDateTime) -> Self {
        let today = now.date();
        Self {
            request,
            today,
            month: MonthCursor::containing(today),
            selector: TimeRangeSelector::new(HourPolicy::new(today, now)),
            person_count: 1,
            options: OptionCounter::default(),
        }
    }

    pub fn room_name(&self) -> &str {
        &self.request.room_name
    }

    pub fn hourly_price(&self) -> u64 {
        self.request.hourly_price
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selector.policy().date()
    }

    pub fn month(&self) -> &MonthCursor {
        &self.month
    }

    pub fn month_mut(&mut self) -> &mut MonthCursor {
        &mut self.month
    }

    pub fn selection(&self) -> HourSelection {
        self.selector.selection()
    }

    pub fn policy(&self) -> &HourPolicy {
        self.selector.policy()
    }

    pub fn person_count(&self) -> u32 {
        self.person_count
    }

    pub fn options(&self) -> &OptionCounter {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut OptionCounter {
        &mut self.options
    }

    /// Pick a calendar day; past days are refused and the hours start over
    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), SelectionError> {
        if date < self.today {
            return Err(SelectionError::PastDate);
        }
        let policy = self.selector.policy().for_date(date);
        self.selector.reset(policy);
        self.month = MonthCursor::containing(date);
        Ok(())
    }

    pub fn pick_hour(&mut self, hour: u8) -> Result<HourSelection, SelectionError> {
        self.selector.pick(hour)
    }

    /// Let later picks see the current time
    pub fn set_clock(&mut self, now: NaiveDateTime) {
        self.selector.set_clock(now);
    }

    pub fn increment_people(&mut self) {
        self.person_count += 1;
    }

    pub fn decrement_people(&mut self) {
        self.person_count = self.person_count.saturating_sub(1).max(1);
    }

    pub fn duration_hours(&self) -> u32 {
        self.selector.duration_hours()
    }

    pub fn total_price(&self) -> u64 {
        compute_total(
            self.duration_hours(),
            self.request.hourly_price,
            &self.options.counts(),
            OPTION_PRICE_PER_HOUR,
        )
    }

    /// Build the payment hand-off. Refused while no hour is picked, or when
    /// the picked hours are no longer bookable.
    pub fn checkout(&self) -> Result<CheckoutPayload, ReservationError> {
        let Some((start, end)) = self.selection().interval() else {
            warn!("Checkout blocked: no hours selected");
            return Err(ReservationError::NoHoursSelected);
        };
        self.selector.policy().check_range(start, end)?;

        let payload = CheckoutPayload {
            room_name: self.request.room_name.clone(),
            selected_date: self.selected_date(),
            start_hour: start,
            end_hour: end,
            person_count: self.person_count,
            total_price: self.total_price(),
            options: self.options.items().to_vec(),
        };
        info!(
            "Checkout {} on {} {}..={} for {}",
            payload.room_name, payload.selected_date, start, end, payload.total_price
        );
        Ok(payload)
    }
}
