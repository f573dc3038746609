//! Pass-through records mirroring the remote resource shapes.
//!
//! The client never mutates these records' invariants. It forwards request
//! fields to the remote service and renders whatever comes back. Seat-count
//! consistency, price arithmetic, and status transitions are all
//! server-authoritative.

mod admin;
mod booking;
mod flight;
mod payment;
mod user;

pub use admin::{AdminBooking, BookingSearchFilter, BookingStatistics, BulkCancelOutcome, Page};
pub use booking::{Booking, BookingRequest};
pub use flight::{Flight, FlightSearchParams, NewFlight};
pub use payment::{Payment, PaymentReceipt, PaymentRequest};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, User};
