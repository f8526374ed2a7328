// HTTP routes
pub mod games;
pub mod health;
pub mod reviews;
pub mod users;

pub use games::*;
pub use health::*;
pub use reviews::*;
pub use users::*;
