use crate::cli::GlobalFlags;
use crate::cli::subcommands::PaymentCommands;
use crate::context::AppContext;

mod create;
mod for_booking;
mod get;
mod list;
mod refund;

pub async fn handle(
    action: &PaymentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PaymentCommands::Pay(args) => create::run(args, ctx, flags).await,
        PaymentCommands::Get(args) => get::run(args.id, ctx, flags).await,
        PaymentCommands::ForBooking(args) => for_booking::run(args.booking_id, ctx, flags).await,
        PaymentCommands::List(args) => list::run(args, ctx, flags).await,
        PaymentCommands::Refund(args) => refund::run(args, ctx, flags).await,
    }
}
