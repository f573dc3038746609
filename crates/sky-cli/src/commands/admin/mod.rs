use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::context::AppContext;

mod bookings;
mod bulk_cancel;
mod cancel;
mod dashboard;
mod delete_user;
mod get_booking;
mod get_user;
mod revenue;
mod search;
mod set_role;
mod set_status;
mod stats;
mod users;

pub async fn handle(
    action: &AdminCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AdminCommands::Dashboard => dashboard::run(ctx, flags).await,
        AdminCommands::Bookings(args) => bookings::run(args, ctx, flags).await,
        AdminCommands::Booking(args) => get_booking::run(args.id, ctx, flags).await,
        AdminCommands::SetStatus(args) => set_status::run(args, ctx, flags).await,
        AdminCommands::Cancel(args) => cancel::run(args.id, ctx, flags).await,
        AdminCommands::BulkCancel(args) => bulk_cancel::run(args.flight_id, ctx, flags).await,
        AdminCommands::Search(args) => search::run(args, ctx, flags).await,
        AdminCommands::Stats => stats::run(ctx, flags).await,
        AdminCommands::Revenue(args) => revenue::run(args, ctx, flags).await,
        AdminCommands::Users(args) => users::run(args, ctx, flags).await,
        AdminCommands::User(args) => get_user::run(args.id, ctx, flags).await,
        AdminCommands::SetRole(args) => set_role::run(args, ctx, flags).await,
        AdminCommands::DeleteUser(args) => delete_user::run(args.id, ctx, flags).await,
    }
}
