use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;
use crate::progress;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let bar = progress::spinner("loading bookings");
    let result = ctx.client.user_bookings().await;
    bar.finish_and_clear();

    let mut bookings = result?;
    let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);
    bookings.truncate(usize::try_from(limit)?);

    output(&bookings, flags.format)
}
