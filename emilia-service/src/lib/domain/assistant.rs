//! Stateless helpers behind the assistant endpoints.

pub mod action;
pub mod camelize;
pub mod greeting;
pub mod messages;
