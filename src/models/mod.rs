pub mod places;
pub mod review;
