use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum SessionCommands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Must match --password
        #[arg(long)]
        password_confirmation: String,
    },

    /// Sign out and clear the stored session
    Logout,

    /// Show the stored session without contacting the server
    Status,

    /// Exchange the refresh token for a new access token
    Refresh,

    /// Validate the stored session and print the signed-in user
    Whoami,

    /// Change profile fields of the signed-in user
    UpdateProfile {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        avatar: Option<String>,
    },
}
