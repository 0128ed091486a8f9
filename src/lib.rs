//! Practice room discovery: room filtering, map markers, hour selection and
//! reservation pricing.

pub mod config;
pub mod error;
pub mod filter;
pub mod home;
pub mod map;
pub mod models;
pub mod reservation;
pub mod schedule;
pub mod sources;

pub use config::Config;
pub use error::{MapError, ReservationError, SelectionError, SourceError};
pub use models::{LatLng, Room};
