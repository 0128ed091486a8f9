use crate::filter::store::format_won;
use crate::models::CheckoutPayload;
use chrono::Datelike;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Kakao,
}

/// What the payment screen shows for a checkout
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    pub room_name: String,
    /// "8월 20일"
    pub date_label: String,
    /// "16:00 ~ 19:00"; the end is when the last booked hour finishes
    pub time_label: String,
    pub person_count: u32,
    pub total_label: String,
    pub method: PaymentMethod,
}

impl PaymentSummary {
    pub fn new(payload: &CheckoutPayload, method: PaymentMethod) -> Self {
        let date = payload.selected_date;
        Self {
            room_name: payload.room_name.clone(),
            date_label: format!("{}월 {}일", date.month(), date.day()),
            time_label: format!(
                "{:02}:00 ~ {:02}:00",
                payload.start_hour,
                u32::from(payload.end_hour) + 1
            ),
            person_count: payload.person_count,
            total_label: format!("{}원", format_won(payload.total_price)),
            method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn labels_the_booking() {
        let payload = CheckoutPayload {
            room_name: "사운드룸 연남".to_string(),
            selected_date: NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
            start_hour: 21,
            end_hour: 23,
            person_count: 4,
            total_price: 57_000,
            options: vec![],
        };

        let summary = PaymentSummary::new(&payload, PaymentMethod::default());
        assert_eq!(summary.date_label, "8월 20일");
        assert_eq!(summary.time_label, "21:00 ~ 24:00");
        assert_eq!(summary.total_label, "57,000원");
        assert_eq!(summary.method, PaymentMethod::Card);
    }
}
