pub mod session;
pub mod shell;
pub mod ui;

pub use shell::*;
pub use ui::*;
