pub mod http;
pub mod mock;
pub mod traits;

pub use http::HttpRoomSource;
pub use mock::MockRoomSource;
pub use traits::RoomSource;
