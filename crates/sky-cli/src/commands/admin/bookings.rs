use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminBookingsArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &AdminBookingsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Some(user) = &args.user {
        let bookings = ctx.client.admin_bookings_by_user(user).await?;
        return output(&bookings, flags.format);
    }
    if let Some(flight_id) = args.flight {
        let bookings = ctx.client.admin_bookings_by_flight(flight_id).await?;
        return output(&bookings, flags.format);
    }

    let page = ctx
        .client
        .admin_bookings(args.page, args.size, &args.sort_by, &args.sort_direction)
        .await?;
    output(&page, flags.format)
}
