pub mod models;

pub use models::Review;
