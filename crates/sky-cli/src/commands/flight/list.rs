use crate::cli::GlobalFlags;
use crate::cli::subcommands::FlightListArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;
use crate::progress;

pub async fn run(
    args: &FlightListArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let bar = progress::spinner("loading flights");
    let result = ctx.client.list_flights().await;
    bar.finish_and_clear();

    let mut flights = result?;
    let limit = effective_limit(args.limit, flags.limit, ctx.config.general.default_limit);
    flights.truncate(usize::try_from(limit)?);

    output(&flights, flags.format)
}
