use sky_core::records::LoginRequest;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::commands::auth::SessionResponse;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &AuthLoginArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let credentials = LoginRequest {
        email: args.email.clone(),
        password: args.password.clone(),
    };

    let response = ctx.client.login(&credentials).await?;
    let identity = ctx
        .session
        .set_from_token(&response.token, response.refresh_token.as_deref())?;

    output(&SessionResponse::from_identity(&identity), flags.format)
}
