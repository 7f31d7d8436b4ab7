//! Command handlers

mod console;
mod simulate;

pub use console::handle_console_command;
pub use simulate::{SimulateParams, handle_simulate_command};
