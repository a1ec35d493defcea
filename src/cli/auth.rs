//! Account and session subcommands

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Create a local account and sign in
    Signup {
        /// Account email
        email: String,

        /// Account password
        #[arg(long, env = "UNINOTAS_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Sign in to an existing account
    Login {
        /// Account email
        email: String,

        /// Account password
        #[arg(long, env = "UNINOTAS_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Sign out of the current session
    Logout,

    /// Continue without an account (results cannot be saved)
    Guest,

    /// Show the current session
    Whoami,
}
