use sky_core::records::FlightSearchParams;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FlightSearchArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress;

pub async fn run(
    args: &FlightSearchArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let params = FlightSearchParams {
        source: args.source.clone(),
        destination: args.destination.clone(),
        date: args.date,
    };

    let bar = progress::spinner("searching flights");
    let result = ctx.client.search_flights(&params).await;
    bar.finish_and_clear();

    output(&result?, flags.format)
}
