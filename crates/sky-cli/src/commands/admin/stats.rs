use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let statistics = ctx.client.admin_statistics().await?;
    output(&statistics, flags.format)
}
