use clap::{Args, Subcommand};

/// Booking commands for the logged-in user.
#[derive(Clone, Debug, Subcommand)]
pub enum BookingCommands {
    /// Book seats on a flight.
    Book(BookingBookArgs),
    /// List your bookings.
    List,
    /// Show one booking.
    Get(BookingIdArgs),
    /// Cancel a booking.
    Cancel(BookingIdArgs),
}

#[derive(Clone, Debug, Args)]
pub struct BookingBookArgs {
    /// Flight id to book.
    pub flight_id: i64,
    /// Number of seats.
    #[arg(long, default_value_t = 1)]
    pub seats: u32,
}

#[derive(Clone, Debug, Args)]
pub struct BookingIdArgs {
    /// Booking id.
    pub id: i64,
}
