use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminUsersArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &AdminUsersArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let page = ctx.client.admin_users(args.page, args.size).await?;
    // The user screen only cares about the accounts, not the page envelope.
    output(&page.content, flags.format)
}
