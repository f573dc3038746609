use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with email and password.
    Login(AuthLoginArgs),
    /// Register a new account (logs you in on success).
    Register(AuthRegisterArgs),
    /// Clear stored credentials (and invalidate the session server-side).
    Logout,
    /// Show current session status.
    Status,
    /// Trade the stored refresh token for a fresh token pair.
    Refresh,
    /// Delete the logged-in account.
    DeleteAccount,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Account email.
    #[arg(long)]
    pub email: String,
    /// Account password.
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    /// Display name.
    #[arg(long)]
    pub name: String,
    /// Account email.
    #[arg(long)]
    pub email: String,
    /// Account password.
    #[arg(long)]
    pub password: String,
    /// Role tag to request (the service defaults to USER).
    #[arg(long)]
    pub role: Option<String>,
}
