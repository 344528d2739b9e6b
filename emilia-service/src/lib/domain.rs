pub mod assistant;
pub mod user;
