pub mod auth;
pub mod client;
pub mod plans;
pub mod recharges;
pub mod users;

pub use client::*;
