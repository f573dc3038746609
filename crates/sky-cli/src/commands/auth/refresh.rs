use sky_auth::AuthError;
use sky_auth::token_store::{self, TokenKind};

use crate::cli::GlobalFlags;
use crate::commands::auth::SessionResponse;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let refresh_token =
        token_store::load(TokenKind::Refresh).ok_or(AuthError::MissingRefreshToken)?;

    let response = ctx.client.refresh_session(&refresh_token).await?;
    let identity = ctx
        .session
        .set_from_token(&response.token, response.refresh_token.as_deref())?;

    output(&SessionResponse::from_identity(&identity), flags.format)
}
