use clap::{Args, Subcommand};

/// Payment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PaymentCommands {
    /// Pay for a booking.
    Pay(PaymentPayArgs),
    /// Show one payment.
    Get(PaymentIdArgs),
    /// Show the payment attached to a booking.
    ForBooking(PaymentForBookingArgs),
    /// List payments (yours by default).
    List(PaymentListArgs),
    /// Refund a payment (admin).
    Refund(PaymentRefundArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PaymentPayArgs {
    /// Booking id to pay for.
    pub booking_id: i64,
    /// Amount to charge.
    #[arg(long)]
    pub amount: f64,
    /// Payment method: credit-card, debit-card, upi, net-banking, wallet,
    /// cash-on-delivery.
    #[arg(long, default_value = "credit-card")]
    pub method: String,
    /// Currency (defaults to the configured one).
    #[arg(long)]
    pub currency: Option<String>,
    #[arg(long)]
    pub card_number: Option<String>,
    #[arg(long)]
    pub cvv: Option<String>,
    #[arg(long)]
    pub expiry_month: Option<String>,
    #[arg(long)]
    pub expiry_year: Option<String>,
    #[arg(long)]
    pub upi_id: Option<String>,
    #[arg(long)]
    pub wallet_provider: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct PaymentIdArgs {
    /// Payment id.
    pub id: i64,
}

#[derive(Clone, Debug, Args)]
pub struct PaymentForBookingArgs {
    /// Booking id.
    pub booking_id: i64,
}

#[derive(Clone, Debug, Args)]
pub struct PaymentListArgs {
    /// User to list payments for (defaults to the logged-in user).
    #[arg(long)]
    pub user: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct PaymentRefundArgs {
    /// Payment id to refund.
    pub id: i64,
    /// Refund amount.
    #[arg(long)]
    pub amount: f64,
}
