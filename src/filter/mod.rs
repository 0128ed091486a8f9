pub mod engine;
pub mod sheets;
pub mod store;
pub mod types;

pub use engine::filter_rooms;
pub use sheets::{PeopleSheet, PriceSheet};
pub use store::FilterStore;
pub use types::{FilterCriteria, PriceRange};
