pub mod extraction;
pub mod reservation;

pub use extraction::ExtractedFields;
pub use reservation::{NewReservation, Reservation};
