use sky_core::records::RegisterRequest;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthRegisterArgs;
use crate::commands::auth::SessionResponse;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &AuthRegisterArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = RegisterRequest {
        name: args.name.clone(),
        email: args.email.clone(),
        password: args.password.clone(),
        role: args.role.clone(),
    };

    let response = ctx.client.register(&user).await?;
    let identity = ctx
        .session
        .set_from_token(&response.token, response.refresh_token.as_deref())?;

    output(&SessionResponse::from_identity(&identity), flags.format)
}
