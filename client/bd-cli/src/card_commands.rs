use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum CardCommands {
    /// List the debit cards
    List,

    /// Add a card from the add-card form fields
    Add {
        #[arg(long)]
        holder: String,

        /// 16 digits, spaces and dashes allowed
        #[arg(long)]
        number: String,

        #[arg(long)]
        cvv: String,

        /// Expiry as MM/YY
        #[arg(long)]
        valid_thru: String,

        /// visa or mastercard
        #[arg(long)]
        provider: String,

        #[arg(long, default_value = "")]
        bank: String,
    },

    /// Freeze or unfreeze the card at a position
    Freeze {
        /// Zero-based position in the card list
        position: usize,
    },

    /// Remove the card at a position
    Remove {
        /// Zero-based position in the card list
        position: usize,
    },
}
