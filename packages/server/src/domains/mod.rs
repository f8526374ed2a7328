// Business domains
pub mod games;
pub mod reviews;
pub mod users;
