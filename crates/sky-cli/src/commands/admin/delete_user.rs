use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DeleteUserResponse {
    deleted: bool,
    id: i64,
}

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.client.admin_delete_user(id).await?;
    output(&DeleteUserResponse { deleted: true, id }, flags.format)
}
