use crate::cli::GlobalFlags;
use crate::cli::subcommands::PaymentRefundArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &PaymentRefundArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let receipt = ctx.client.refund_payment(args.id, args.amount).await?;
    output(&receipt, flags.format)
}
