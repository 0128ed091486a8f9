use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A point on the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// One bookable practice room, as served by the room list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub open_status: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price_per_hour: u64,
    /// Maximum occupancy; older payloads call this `people`
    #[serde(alias = "people")]
    pub capacity: u32,
    #[serde(default, alias = "discountRate")]
    pub discount_eligible: bool,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub review_count: u32,
}

impl Room {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }

    /// Price of booking the whole room for one hour: rate times occupancy.
    /// A zero capacity counts as one person. Saturates at `u64::MAX`.
    pub fn total_price(&self) -> u64 {
        self.price_per_hour
            .saturating_mul(u64::from(self.capacity.max(1)))
    }
}

/// A bookable sub-room listed on a room's detail screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubRoom {
    pub id: u32,
    pub name: String,
    /// Size class shown next to the name, e.g. "(표준)"
    pub kind: String,
    pub capacity: u32,
    pub price: u64,
}

/// Equipment line on the detail screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub category: String,
    pub name: String,
}

/// Detail screen data for one practice room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetail {
    pub name: String,
    pub score: f32,
    pub review_count: u32,
    pub address: String,
    pub notice: String,
    pub equipments: Vec<Equipment>,
    pub sub_rooms: Vec<SubRoom>,
}

impl RoomDetail {
    /// Build the hand-off payload for reserving one of this room's sub-rooms
    pub fn reserve(&self, sub_room: &SubRoom) -> ReserveRequest {
        ReserveRequest {
            room_name: format!("{} - {}", self.name, sub_room.name),
            hourly_price: sub_room.price,
        }
    }
}

/// Payload handed from the detail screen to the reservation screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveRequest {
    pub room_name: String,
    pub hourly_price: u64,
}

impl Default for ReserveRequest {
    fn default() -> Self {
        Self {
            room_name: "합주실".to_string(),
            hourly_price: 15_000,
        }
    }
}

/// Add-on equipment line and how many units were requested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub name: String,
    pub count: u32,
}

/// Payload handed from the reservation screen to the payment screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayload {
    pub room_name: String,
    pub selected_date: NaiveDate,
    pub start_hour: u8,
    pub end_hour: u8,
    pub person_count: u32,
    pub total_price: u64,
    pub options: Vec<OptionItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_legacy_field_names() {
        let raw = r#"{
            "id": "12",
            "name": "Sound Room",
            "latitude": 37.55,
            "longitude": 126.92,
            "pricePerHour": 8000,
            "people": 6,
            "discountRate": true
        }"#;

        let room: Room = serde_json::from_str(raw).unwrap();
        assert_eq!(room.capacity, 6);
        assert!(room.discount_eligible);
        assert_eq!(room.review_count, 0);
        assert_eq!(room.total_price(), 48_000);
    }

    #[test]
    fn zero_capacity_counts_as_one() {
        let raw = r#"{"id":"1","name":"x","latitude":0,"longitude":0,
            "pricePerHour":9000,"capacity":0}"#;
        let room: Room = serde_json::from_str(raw).unwrap();
        assert_eq!(room.total_price(), 9_000);
    }

    #[test]
    fn huge_rate_saturates_the_total() {
        let raw = r#"{"id":"1","name":"x","latitude":0,"longitude":0,
            "pricePerHour":18446744073709551615,"capacity":2}"#;
        let room: Room = serde_json::from_str(raw).unwrap();
        assert_eq!(room.total_price(), u64::MAX);
    }

    #[test]
    fn reserve_request_names_the_sub_room() {
        let detail = RoomDetail {
            name: "비쥬 합주실 3호점".to_string(),
            score: 4.9,
            review_count: 12,
            address: "서울 마포구".to_string(),
            notice: String::new(),
            equipments: vec![],
            sub_rooms: vec![SubRoom {
                id: 2,
                name: "B Room".to_string(),
                kind: "(표준)".to_string(),
                capacity: 5,
                price: 15_000,
            }],
        };

        let request = detail.reserve(&detail.sub_rooms[0]);
        assert_eq!(request.room_name, "비쥬 합주실 3호점 - B Room");
        assert_eq!(request.hourly_price, 15_000);
    }
}
