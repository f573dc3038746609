use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminRevenueArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &AdminRevenueArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.by_flight {
        let revenue = ctx.client.admin_revenue_by_flight().await?;
        return output(&revenue, flags.format);
    }

    let revenue = ctx.client.admin_revenue_by_date(args.days).await?;
    output(&revenue, flags.format)
}
