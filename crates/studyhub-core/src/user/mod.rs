//! User domain module.

mod model;

pub use model::{User, UserId};
