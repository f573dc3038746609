use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct CancelBookingResponse {
    cancelled: bool,
    id: i64,
    message: String,
}

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let message = ctx.client.cancel_booking(id).await?;
    output(
        &CancelBookingResponse {
            cancelled: true,
            id,
            message,
        },
        flags.format,
    )
}
