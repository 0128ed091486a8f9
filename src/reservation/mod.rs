pub mod form;
pub mod payment;
pub mod price;

pub use form::{OptionCounter, ReservationForm};
pub use payment::{PaymentMethod, PaymentSummary};
pub use price::{compute_total, OPTION_PRICE_PER_HOUR};
