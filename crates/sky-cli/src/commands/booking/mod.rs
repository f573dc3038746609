use crate::cli::GlobalFlags;
use crate::cli::subcommands::BookingCommands;
use crate::context::AppContext;

mod cancel;
mod create;
mod get;
mod list;

pub async fn handle(
    action: &BookingCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        BookingCommands::Book(args) => create::run(args, ctx, flags).await,
        BookingCommands::List => list::run(ctx, flags).await,
        BookingCommands::Get(args) => get::run(args.id, ctx, flags).await,
        BookingCommands::Cancel(args) => cancel::run(args.id, ctx, flags).await,
    }
}
