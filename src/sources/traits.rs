use crate::models::Room;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everything that can serve the room list.
/// Implementations return fully normalized rooms or fail as a whole.
#[async_trait]
pub trait RoomSource: Send + Sync {
    /// Fetch every room in one snapshot
    async fn fetch_rooms(&self) -> Result<Vec<Room>>;

    /// Fetch a single room, `None` when no room has this id
    async fn fetch_room_by_id(&self, id: &str) -> Result<Option<Room>>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
