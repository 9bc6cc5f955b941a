pub mod auth;
pub mod plan;
pub mod recharge;
pub mod user;

pub use auth::*;
pub use plan::*;
pub use recharge::*;
pub use user::*;
