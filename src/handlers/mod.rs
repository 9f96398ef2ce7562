pub mod ai;
pub mod extract;
pub mod health;
pub mod reservations;
