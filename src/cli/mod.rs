//! Interactive console front end.

pub mod driver;
pub mod menu;

pub use driver::ConsoleDriver;
pub use menu::{render_menu, MenuChoice};
