use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct RemoveFlightResponse {
    removed: bool,
    id: i64,
}

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.client.remove_flight(id).await?;
    output(&RemoveFlightResponse { removed: true, id }, flags.format)
}
