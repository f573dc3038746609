use crate::cli::GlobalFlags;
use crate::cli::subcommands::FlightCommands;
use crate::context::AppContext;

mod add;
mod get;
mod list;
mod remove;
mod search;

pub async fn handle(
    action: &FlightCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FlightCommands::List(args) => list::run(args, ctx, flags).await,
        FlightCommands::Search(args) => search::run(args, ctx, flags).await,
        FlightCommands::Get(args) => get::run(args.id, ctx, flags).await,
        FlightCommands::Add(args) => add::run(args, ctx, flags).await,
        FlightCommands::Remove(args) => remove::run(args.id, ctx, flags).await,
    }
}
