//! `kitbag-console` — text menu driving a [`kitbag_inventory::Backpack`].

pub mod error;
pub mod input;
pub mod menu;
pub mod session;
pub mod table;

pub use error::{ConsoleError, ConsoleResult};
pub use menu::{InvalidChoice, MenuChoice};
pub use session::Session;
