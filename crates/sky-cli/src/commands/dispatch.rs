use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module. The gate
/// for the command has already been enforced in `main`.
pub async fn dispatch(
    command: Commands,
    mut ctx: AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, &mut ctx, flags).await,
        Commands::Flight { action } => commands::flight::handle(&action, &ctx, flags).await,
        Commands::Booking { action } => commands::booking::handle(&action, &ctx, flags).await,
        Commands::Payment { action } => commands::payment::handle(&action, &ctx, flags).await,
        Commands::Admin { action } => commands::admin::handle(&action, &ctx, flags).await,
    }
}
