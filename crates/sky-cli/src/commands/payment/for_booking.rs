use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(booking_id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let payment = ctx.client.payment_for_booking(booking_id).await?;
    output(&payment, flags.format)
}
