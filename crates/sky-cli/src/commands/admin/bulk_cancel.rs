use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(flight_id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = ctx.client.admin_bulk_cancel(flight_id).await?;
    output(&outcome, flags.format)
}
