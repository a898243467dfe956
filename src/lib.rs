#![no_std]
// This must go first so the log macros are visible to the other modules
mod fmt;

pub mod config;
pub mod console;
pub mod driver;
pub mod error;
pub mod receiver;

pub use config::RadioConfig;
pub use console::SerialConsole;
pub use driver::Nrf24;
pub use error::{ReceiveError, StartupError};
pub use receiver::{Reception, Receiver};
