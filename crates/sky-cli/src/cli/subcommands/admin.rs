use clap::{Args, Subcommand};

/// Administration commands. All of these sit behind the admin gate.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// Aggregate overview: statistics, recent bookings, revenue by date.
    Dashboard,
    /// Browse bookings (paginated, or filtered by user / flight).
    Bookings(AdminBookingsArgs),
    /// Show one booking.
    Booking(AdminIdArgs),
    /// Transition a booking to a new status.
    SetStatus(AdminSetStatusArgs),
    /// Cancel one booking.
    Cancel(AdminIdArgs),
    /// Cancel every booking on a flight.
    BulkCancel(AdminBulkCancelArgs),
    /// Search bookings by user, flight, status, or date range.
    Search(AdminSearchArgs),
    /// Booking statistics.
    Stats,
    /// Revenue, by flight or by date.
    Revenue(AdminRevenueArgs),
    /// Browse user accounts (paginated).
    Users(AdminUsersArgs),
    /// Show one user account.
    User(AdminIdArgs),
    /// Change a user's role.
    SetRole(AdminSetRoleArgs),
    /// Delete a user account.
    DeleteUser(AdminIdArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AdminIdArgs {
    pub id: i64,
}

#[derive(Clone, Debug, Args)]
pub struct AdminBookingsArgs {
    /// Zero-based page index.
    #[arg(long, default_value_t = 0)]
    pub page: u32,
    /// Page size.
    #[arg(long, default_value_t = 10)]
    pub size: u32,
    /// Sort field.
    #[arg(long, default_value = "id")]
    pub sort_by: String,
    /// Sort direction: ASC or DESC.
    #[arg(long, default_value = "DESC")]
    pub sort_direction: String,
    /// Filter by user email (uses the per-user endpoint, unpaginated).
    #[arg(long, conflicts_with = "flight")]
    pub user: Option<String>,
    /// Filter by flight id (uses the per-flight endpoint, unpaginated).
    #[arg(long)]
    pub flight: Option<i64>,
}

#[derive(Clone, Debug, Args)]
pub struct AdminSetStatusArgs {
    /// Booking id.
    pub id: i64,
    /// Target status: pending, confirmed, paid, cancelled.
    #[arg(long)]
    pub status: String,
}

#[derive(Clone, Debug, Args)]
pub struct AdminBulkCancelArgs {
    /// Flight whose bookings should all be cancelled.
    pub flight_id: i64,
}

#[derive(Clone, Debug, Args)]
pub struct AdminSearchArgs {
    /// Filter by user email.
    #[arg(long)]
    pub user: Option<String>,
    /// Filter by flight id.
    #[arg(long)]
    pub flight: Option<i64>,
    /// Filter by status tag.
    #[arg(long)]
    pub status: Option<String>,
    /// Lower date bound (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<String>,
    /// Upper date bound (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AdminRevenueArgs {
    /// Group revenue by flight instead of by date.
    #[arg(long)]
    pub by_flight: bool,
    /// How many days back to report when grouping by date.
    #[arg(long, default_value_t = 30)]
    pub days: u32,
}

#[derive(Clone, Debug, Args)]
pub struct AdminUsersArgs {
    /// Zero-based page index.
    #[arg(long, default_value_t = 0)]
    pub page: u32,
    /// Page size.
    #[arg(long, default_value_t = 100)]
    pub size: u32,
}

#[derive(Clone, Debug, Args)]
pub struct AdminSetRoleArgs {
    /// User id.
    pub id: i64,
    /// Role tag: user or admin.
    #[arg(long)]
    pub role: String,
}
