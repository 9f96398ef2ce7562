pub mod ai;
pub mod extractor;
pub mod reservations;
