use sky_core::enums::BookingStatus;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::admin::AdminSetStatusArgs;
use crate::commands::shared::parse::parse_tag;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &AdminSetStatusArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status: BookingStatus = parse_tag(&args.status, "status")?;
    let booking = ctx
        .client
        .admin_update_booking_status(args.id, status)
        .await?;
    output(&booking, flags.format)
}
