use crate::models::Room;
use crate::sources::traits::RoomSource;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

/// Room source serving a fixed snapshot after a simulated network delay
pub struct MockRoomSource {
    rooms: Vec<Room>,
    latency: Duration,
}

impl MockRoomSource {
    /// Create a mock source with the built-in Hongdae / Yeonnam rooms
    pub fn new() -> Self {
        Self::with_rooms(sample_rooms())
    }

    /// Create a mock source serving the given rooms
    pub fn with_rooms(rooms: Vec<Room>) -> Self {
        Self {
            rooms,
            latency: Duration::from_millis(250),
        }
    }

    /// Override the simulated latency
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for MockRoomSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomSource for MockRoomSource {
    async fn fetch_rooms(&self) -> Result<Vec<Room>> {
        tokio::time::sleep(self.latency).await;
        info!("📋 Serving {} mock rooms", self.rooms.len());
        Ok(self.rooms.clone())
    }

    async fn fetch_room_by_id(&self, id: &str) -> Result<Option<Room>> {
        tokio::time::sleep(self.latency / 2).await;
        debug!("Looking up mock room {}", id);
        Ok(self.rooms.iter().find(|r| r.id == id).cloned())
    }

    fn source_name(&self) -> &'static str {
        "Mock"
    }
}

#[allow(clippy::too_many_arguments)]
fn room(
    id: &str,
    name: &str,
    address: &str,
    latitude: f64,
    longitude: f64,
    price_per_hour: u64,
    capacity: u32,
    discount_eligible: bool,
    rating: f32,
    review_count: u32,
) -> Room {
    Room {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        image_url: String::new(),
        open_status: "영업중".to_string(),
        latitude,
        longitude,
        price_per_hour,
        capacity,
        discount_eligible,
        rating,
        review_count,
    }
}

/// Built-in snapshot used when no API is configured
pub fn sample_rooms() -> Vec<Room> {
    vec![
        room(
            "1",
            "빌리브 합주실 홍대점",
            "마포구 와우산로 123",
            37.5551,
            126.9236,
            22_000,
            4,
            true,
            4.8,
            31,
        ),
        room(
            "2",
            "사운드룸 연남",
            "마포구 동교로 456",
            37.5620,
            126.9250,
            18_000,
            6,
            false,
            4.5,
            12,
        ),
        room(
            "3",
            "밴드메이트 스튜디오",
            "서대문구 신촌로 789",
            37.5590,
            126.9370,
            25_000,
            5,
            true,
            4.9,
            58,
        ),
        room(
            "4",
            "그루브 합주실 상수",
            "마포구 독막로 21",
            37.5478,
            126.9227,
            12_000,
            3,
            false,
            4.1,
            7,
        ),
        room(
            "5",
            "비쥬 합주실 3호점",
            "마포구 와우산로 11길 9 B1",
            37.5532,
            126.9268,
            15_000,
            12,
            true,
            4.9,
            12,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_the_snapshot() {
        let source = MockRoomSource::new().with_latency(Duration::ZERO);
        let rooms = source.fetch_rooms().await.unwrap();
        assert_eq!(rooms.len(), 5);
        assert_eq!(source.source_name(), "Mock");
    }

    #[tokio::test]
    async fn finds_rooms_by_id() {
        let source = MockRoomSource::new().with_latency(Duration::ZERO);
        let found = source.fetch_room_by_id("2").await.unwrap();
        assert_eq!(found.map(|r| r.name), Some("사운드룸 연남".to_string()));
        assert!(source.fetch_room_by_id("99").await.unwrap().is_none());
    }
}
