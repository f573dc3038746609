use crate::cli::GlobalFlags;
use crate::cli::subcommands::payment::PaymentListArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &PaymentListArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = match &args.user {
        Some(user) => user.clone(),
        None => ctx
            .session
            .identity()
            .map(|identity| identity.email.clone())
            .ok_or_else(|| anyhow::anyhow!("no session — run `sky auth login`"))?,
    };

    let payments = ctx.client.user_payments(&user).await?;
    output(&payments, flags.format)
}
