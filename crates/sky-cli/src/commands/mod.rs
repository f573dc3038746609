pub mod admin;
pub mod auth;
pub mod booking;
pub mod dispatch;
pub mod flight;
pub mod payment;
pub mod shared;
