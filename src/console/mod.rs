//! Text-menu front end.

pub mod dispatcher;
pub mod menu;

pub use dispatcher::{Dispatcher, Flow};
pub use menu::MenuChoice;
