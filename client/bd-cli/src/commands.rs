use crate::{CardCommands, SessionCommands};

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in, sign out and inspect the stored session
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },

    /// Fetch cards, transactions and balance and print the page state
    Dashboard,

    /// Work with the debit cards on the cards page
    Cards {
        #[command(subcommand)]
        action: CardCommands,
    },
}
