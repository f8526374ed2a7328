pub mod models;

pub use models::Game;
