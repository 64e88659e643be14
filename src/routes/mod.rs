pub mod places;
pub mod reviews;
