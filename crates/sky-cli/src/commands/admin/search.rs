use sky_core::enums::BookingStatus;
use sky_core::records::BookingSearchFilter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminSearchArgs;
use crate::commands::shared::parse::parse_tag;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &AdminSearchArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    // Validate a status filter against the closed set before putting it on
    // the wire.
    let status = args
        .status
        .as_deref()
        .map(|raw| parse_tag::<BookingStatus>(raw, "status"))
        .transpose()?
        .map(|status| status.as_str().to_string());

    let filter = BookingSearchFilter {
        user_email: args.user.clone(),
        flight_id: args.flight,
        status,
        from_date: args.from.clone(),
        to_date: args.to.clone(),
    };

    let bookings = ctx.client.admin_search_bookings(&filter).await?;
    output(&bookings, flags.format)
}
