use crate::cli::GlobalFlags;
use crate::cli::subcommands::BookingBookArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &BookingBookArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let booking = ctx.client.create_booking(args.flight_id, args.seats).await?;
    output(&booking, flags.format)
}
