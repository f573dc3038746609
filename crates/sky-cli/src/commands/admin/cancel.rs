use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let booking = ctx.client.admin_cancel_booking(id).await?;
    output(&booking, flags.format)
}
