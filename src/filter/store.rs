use crate::filter::types::{FilterCriteria, PriceRange, HEADCOUNT_OR_MORE};
use chrono::NaiveDate;
use tracing::debug;

/// The user's current search and chip selections.
///
/// Written only through the named setters below; the room filter reads a
/// snapshot of it via [`FilterStore::criteria`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterStore {
    search_text: String,
    datetime: Option<String>,
    people: Option<u32>,
    price: Option<PriceRange>,
    benefit: bool,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Store the applied date/time interval. Display only: rooms carry no
    /// availability data, so this never narrows the list.
    pub fn set_datetime(&mut self, date: NaiveDate, start_hour: u8, end_hour: u8) {
        let label = datetime_label(date, start_hour, end_hour);
        debug!("datetime filter set to {}", label);
        self.datetime = Some(label);
    }

    pub fn set_people(&mut self, people: u32) {
        self.people = (people > 0).then_some(people);
    }

    pub fn set_price(&mut self, range: PriceRange) {
        self.price = Some(range);
    }

    pub fn toggle_benefit(&mut self) {
        self.benefit = !self.benefit;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn datetime(&self) -> Option<&str> {
        self.datetime.as_deref()
    }

    pub fn people(&self) -> Option<u32> {
        self.people
    }

    pub fn price(&self) -> Option<PriceRange> {
        self.price
    }

    pub fn benefit(&self) -> bool {
        self.benefit
    }

    /// Whether the user has narrowed the results in any way
    pub fn has_any_condition(&self) -> bool {
        !self.search_text.trim().is_empty()
            || self.datetime.is_some()
            || self.people.is_some()
            || self.price.is_some()
            || self.benefit
    }

    /// Derive the criteria the room filter applies
    pub fn criteria(&self) -> FilterCriteria {
        let search = self.search_text.trim();
        FilterCriteria {
            search_text: (!search.is_empty()).then(|| search.to_string()),
            min_headcount: self.people,
            price_range: self.price,
            discount_only: self.benefit,
        }
    }

    pub fn datetime_chip_label(&self) -> String {
        self.datetime.clone().unwrap_or_else(|| "날짜 / 시간".to_string())
    }

    pub fn people_chip_label(&self) -> String {
        match self.people {
            Some(n) => format!("{n}인"),
            None => "인원".to_string(),
        }
    }

    pub fn price_chip_label(&self) -> String {
        self.price.map(price_label).unwrap_or_else(|| "가격".to_string())
    }
}

/// "YYYY-MM-DD HH:00~HH:00"
pub fn datetime_label(date: NaiveDate, start_hour: u8, end_hour: u8) -> String {
    format!(
        "{} {:02}:00~{:02}:00",
        date.format("%Y-%m-%d"),
        start_hour,
        end_hour
    )
}

pub fn price_label(range: PriceRange) -> String {
    if range.is_free_only() {
        "무료".to_string()
    } else if range.min == 0 {
        format!("{}원 이하", format_won(range.max))
    } else {
        format!("{}~{}원", format_won(range.min), format_won(range.max))
    }
}

/// Whether a quick-pick headcount chip shows as pressed
pub fn headcount_pressed(chip: u32, or_more: bool, people: u32) -> bool {
    if or_more {
        people >= HEADCOUNT_OR_MORE
    } else {
        people == chip
    }
}

/// Group digits by thousands: 150000 -> "150,000"
pub fn format_won(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
