/// Surcharge per add-on unit per booked hour
pub const OPTION_PRICE_PER_HOUR: u64 = 1_000;

/// Total price of a booking: every hour pays the base rate plus the add-ons.
///
/// A zero duration gives zero; the caller treats that as an incomplete
/// selection. The arithmetic saturates at `u64::MAX`.
pub fn compute_total(
    duration_hours: u32,
    base_rate_per_hour: u64,
    option_counts: &[u32],
    option_unit_rate: u64,
) -> u64 {
    let options = option_counts
        .iter()
        .fold(0u64, |sum, &c| sum.saturating_add(u64::from(c)));
    let hourly = base_rate_per_hour.saturating_add(options.saturating_mul(option_unit_rate));
    u64::from(duration_hours).saturating_mul(hourly)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_times_rate_plus_options() {
        assert_eq!(compute_total(3, 15_000, &[2, 2], OPTION_PRICE_PER_HOUR), 57_000);
    }

    #[test]
    fn no_options() {
        assert_eq!(compute_total(2, 22_000, &[], OPTION_PRICE_PER_HOUR), 44_000);
        assert_eq!(compute_total(2, 22_000, &[0, 0, 0], OPTION_PRICE_PER_HOUR), 44_000);
    }

    #[test]
    fn zero_duration_is_free() {
        assert_eq!(compute_total(0, 15_000, &[5], OPTION_PRICE_PER_HOUR), 0);
    }

    #[test]
    fn oversized_inputs_saturate() {
        assert_eq!(compute_total(2, u64::MAX, &[], OPTION_PRICE_PER_HOUR), u64::MAX);
        assert_eq!(compute_total(3, 15_000, &[u32::MAX], u64::MAX), u64::MAX);
    }
}
