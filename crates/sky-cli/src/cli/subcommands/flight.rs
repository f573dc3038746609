use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Flight catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FlightCommands {
    /// List the flight catalog.
    List(FlightListArgs),
    /// Search flights by route and date.
    Search(FlightSearchArgs),
    /// Show one flight.
    Get(FlightGetArgs),
    /// Add a flight to the catalog (admin).
    Add(FlightAddArgs),
    /// Remove a flight from the catalog (admin).
    Remove(FlightGetArgs),
}

#[derive(Clone, Debug, Args)]
pub struct FlightListArgs {
    /// Max flights to show.
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct FlightSearchArgs {
    /// Departure airport or city.
    pub source: String,
    /// Arrival airport or city.
    pub destination: String,
    /// Departure date (YYYY-MM-DD).
    pub date: NaiveDate,
}

#[derive(Clone, Debug, Args)]
pub struct FlightGetArgs {
    /// Flight id.
    pub id: i64,
}

#[derive(Clone, Debug, Args)]
pub struct FlightAddArgs {
    #[arg(long)]
    pub airline: String,
    #[arg(long)]
    pub source: String,
    #[arg(long)]
    pub destination: String,
    /// Departure date (YYYY-MM-DD).
    #[arg(long)]
    pub date: NaiveDate,
    /// Departure time, as the service formats it (e.g. "10:30").
    #[arg(long)]
    pub time: String,
    #[arg(long)]
    pub seats: u32,
    #[arg(long)]
    pub price: f64,
}
