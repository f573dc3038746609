use sky_core::enums::Role;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::admin::AdminSetRoleArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &AdminSetRoleArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    // Role deserialization folds unknown tags into USER, which would turn an
    // operator typo into a silent demotion, so match explicitly instead.
    let role = match args.role.trim().to_ascii_uppercase().as_str() {
        "ADMIN" => Role::Admin,
        "USER" => Role::User,
        other => anyhow::bail!("invalid role '{other}': expected user or admin"),
    };

    let user = ctx.client.admin_update_user_role(args.id, role).await?;
    output(&user, flags.format)
}
