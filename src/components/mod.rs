pub mod admin;
pub mod auth;
pub mod common;
pub mod navbar;
pub mod sidebar;
