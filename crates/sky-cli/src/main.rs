use clap::Parser;
use sky_auth::{Fallback, Gate, GateState};

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("sky error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = bootstrap::load_config()?;
    let ctx = context::AppContext::init(config)?;

    enforce_gate(&cli.command, &ctx)?;
    commands::dispatch::dispatch(cli.command, ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SKYLARK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Map each command to the gate it must pass, if any.
///
/// The flight catalog and the login/registration screens are public;
/// everything touching a user's own data needs a session, and the admin
/// console plus catalog mutation need the admin role.
fn required_gate(command: &cli::Commands) -> Option<Gate> {
    use crate::cli::subcommands::{AuthCommands, FlightCommands, PaymentCommands};

    match command {
        cli::Commands::Auth { action } => match action {
            AuthCommands::Login(_) | AuthCommands::Register(_) | AuthCommands::Status => None,
            AuthCommands::Logout | AuthCommands::Refresh | AuthCommands::DeleteAccount => {
                Some(Gate::Authenticated)
            }
        },
        cli::Commands::Flight { action } => match action {
            FlightCommands::List(_) | FlightCommands::Search(_) | FlightCommands::Get(_) => None,
            FlightCommands::Add(_) | FlightCommands::Remove(_) => Some(Gate::Admin),
        },
        cli::Commands::Booking { .. } => Some(Gate::Authenticated),
        cli::Commands::Payment { action } => match action {
            PaymentCommands::Refund(_) => Some(Gate::Admin),
            _ => Some(Gate::Authenticated),
        },
        cli::Commands::Admin { .. } => Some(Gate::Admin),
    }
}

/// Evaluate the command's gate against the current session, refusing the
/// dispatch with a fallback-specific message when denied.
fn enforce_gate(command: &cli::Commands, ctx: &context::AppContext) -> anyhow::Result<()> {
    let Some(gate) = required_gate(command) else {
        return Ok(());
    };

    match gate.evaluate(&ctx.session) {
        GateState::Allowed => Ok(()),
        GateState::Pending => anyhow::bail!("session is not initialized yet"),
        GateState::Denied(Fallback::Login) => {
            anyhow::bail!("not authenticated — run `sky auth login`")
        }
        GateState::Denied(Fallback::Dashboard) => {
            anyhow::bail!("admin role required — run `sky auth status` to see your session")
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn parse(args: &[&str]) -> cli::Cli {
        cli::Cli::try_parse_from(args).expect("cli should parse")
    }

    #[test]
    fn flight_catalog_commands_are_public() {
        let cli = parse(&["sky", "flight", "list"]);
        assert_eq!(required_gate(&cli.command), None);

        let cli = parse(&["sky", "flight", "get", "3"]);
        assert_eq!(required_gate(&cli.command), None);
    }

    #[test]
    fn booking_commands_require_a_session() {
        let cli = parse(&["sky", "booking", "list"]);
        assert_eq!(required_gate(&cli.command), Some(Gate::Authenticated));
    }

    #[test]
    fn admin_and_catalog_mutation_require_admin() {
        let cli = parse(&["sky", "admin", "dashboard"]);
        assert_eq!(required_gate(&cli.command), Some(Gate::Admin));

        let cli = parse(&["sky", "flight", "remove", "3"]);
        assert_eq!(required_gate(&cli.command), Some(Gate::Admin));
    }

    #[test]
    fn refunds_are_admin_only() {
        let cli = parse(&["sky", "payment", "refund", "5", "--amount", "100"]);
        assert_eq!(required_gate(&cli.command), Some(Gate::Admin));
    }
}
