mod summary;
pub mod views;
