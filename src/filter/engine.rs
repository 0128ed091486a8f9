use crate::filter::types::{FilterCriteria, HEADCOUNT_OR_MORE};
use crate::models::Room;
use std::cmp::Ordering;
use tracing::debug;

/// Narrow `rooms` down to those matching `criteria`, ordered by numeric id.
///
/// Pure: the input is never touched and the same inputs always give the same
/// output. Criteria are applied literally, so `min > max` simply matches
/// nothing.
pub fn filter_rooms(rooms: &[Room], criteria: &FilterCriteria) -> Vec<Room> {
    let query = criteria
        .search_text
        .as_deref()
        .map(|q| q.trim().to_lowercase())
        .unwrap_or_default();

    let mut list: Vec<Room> = rooms
        .iter()
        .filter(|room| query.is_empty() || room.name.to_lowercase().contains(&query))
        .filter(|room| !criteria.discount_only || room.discount_eligible)
        .filter(|room| matches_headcount(room, criteria.min_headcount))
        .filter(|room| {
            criteria
                .price_range
                .map_or(true, |range| range.contains(room.total_price()))
        })
        .cloned()
        .collect();

    list.sort_by(|a, b| compare_ids(&a.id, &b.id));

    debug!("Filter kept {} of {} rooms", list.len(), rooms.len());
    list
}

fn matches_headcount(room: &Room, headcount: Option<u32>) -> bool {
    match headcount {
        Some(n) if n >= HEADCOUNT_OR_MORE => room.capacity >= HEADCOUNT_OR_MORE,
        Some(n) if n > 0 => room.capacity == n,
        _ => true,
    }
}

/// Numeric ids sort by value; anything non-numeric sorts after them by text
fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<u64>(), b.trim().parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
