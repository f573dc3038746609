use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LogoutResponse {
    logged_out: bool,
}

pub async fn run(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    // Local teardown happens even when the server-side logout fails; a dead
    // backend must not pin a session on this machine.
    if let Err(error) = ctx.client.logout().await {
        tracing::warn!(%error, "server-side logout failed; clearing local session anyway");
    }
    ctx.session.clear()?;

    output(&LogoutResponse { logged_out: true }, flags.format)
}
