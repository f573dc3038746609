use clap::Subcommand;

use crate::cli::subcommands::{
    AdminCommands, AuthCommands, BookingCommands, FlightCommands, PaymentCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Session lifecycle: login, registration, status, logout.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Flight catalog: list, search, inspect, manage.
    Flight {
        #[command(subcommand)]
        action: FlightCommands,
    },
    /// Bookings of the logged-in user.
    Booking {
        #[command(subcommand)]
        action: BookingCommands,
    },
    /// Payments for bookings.
    Payment {
        #[command(subcommand)]
        action: PaymentCommands,
    },
    /// Administration console.
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}
