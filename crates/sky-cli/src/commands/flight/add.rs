use serde::Serialize;
use sky_core::records::NewFlight;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FlightAddArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AddFlightResponse {
    added: bool,
    message: String,
}

pub async fn run(
    args: &FlightAddArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let flight = NewFlight {
        airline: args.airline.clone(),
        source: args.source.clone(),
        destination: args.destination.clone(),
        departure_date: args.date,
        departure_time: args.time.clone(),
        available_seats: args.seats,
        price: args.price,
    };

    let message = ctx.client.add_flight(&flight).await?;
    output(
        &AddFlightResponse {
            added: true,
            message,
        },
        flags.format,
    )
}
