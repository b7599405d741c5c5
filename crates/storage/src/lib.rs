pub mod dto;
pub mod error;
pub mod models;
pub mod seed;
pub mod store;
pub mod views;

pub use seed::Seed;
pub use store::{Approval, Store};
