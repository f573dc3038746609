pub mod admin;
pub mod auth;
pub mod booking;
pub mod flight;
pub mod payment;

pub use admin::{
    AdminBookingsArgs, AdminCommands, AdminRevenueArgs, AdminSearchArgs, AdminUsersArgs,
};
pub use auth::{AuthCommands, AuthLoginArgs, AuthRegisterArgs};
pub use booking::{BookingBookArgs, BookingCommands};
pub use flight::{FlightAddArgs, FlightCommands, FlightListArgs, FlightSearchArgs};
pub use payment::{PaymentCommands, PaymentPayArgs, PaymentRefundArgs};
