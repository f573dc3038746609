use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DeleteAccountResponse {
    deleted: bool,
    email: String,
    message: String,
}

pub async fn run(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let email = ctx
        .session
        .identity()
        .map(|identity| identity.email.clone())
        .ok_or_else(|| anyhow::anyhow!("no session — run `sky auth login`"))?;

    let message = ctx.client.delete_account(&email).await?;
    ctx.session.clear()?;

    output(
        &DeleteAccountResponse {
            deleted: true,
            email,
            message,
        },
        flags.format,
    )
}
