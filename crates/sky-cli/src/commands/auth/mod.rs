use serde::Serialize;
use sky_core::Identity;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

mod delete;
mod login;
mod logout;
mod refresh;
mod register;
mod status;

pub async fn handle(
    action: &AuthCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::run(args, ctx, flags).await,
        AuthCommands::Register(args) => register::run(args, ctx, flags).await,
        AuthCommands::Logout => logout::run(ctx, flags).await,
        AuthCommands::Status => status::run(ctx, flags),
        AuthCommands::Refresh => refresh::run(ctx, flags).await,
        AuthCommands::DeleteAccount => delete::run(ctx, flags).await,
    }
}

/// Session summary returned by login, registration, and refresh.
#[derive(Serialize)]
pub(crate) struct SessionResponse {
    authenticated: bool,
    email: String,
    name: String,
    role: String,
}

impl SessionResponse {
    pub(crate) fn from_identity(identity: &Identity) -> Self {
        Self {
            authenticated: true,
            email: identity.email.clone(),
            name: identity.name.clone(),
            role: identity.role.to_string(),
        }
    }
}
