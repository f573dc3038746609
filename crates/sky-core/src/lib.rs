//! # sky-core
//!
//! Core types for the Skylark flight-booking client: the decoded user
//! identity, the closed role/status tag sets, and pass-through records
//! mirroring the remote service shapes. No HTTP, no storage, just data.

pub mod enums;
pub mod identity;
pub mod records;

pub use identity::Identity;
