//! bankdash CLI library
//!
//! Wires configuration, storage, the session store and the cards page store
//! together so the binary and the integration tests drive the same code.

mod app;
mod card_commands;
mod cli;
mod commands;
mod error;
pub mod logger;
mod session_commands;

#[cfg(test)]
mod tests;

pub use app::App;
pub use card_commands::CardCommands;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, CliResult};
pub use session_commands::SessionCommands;
