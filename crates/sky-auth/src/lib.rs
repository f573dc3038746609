//! # sky-auth
//!
//! Session handling for the Skylark CLI: base64url payload decoding of the
//! session token into an [`Identity`](sky_core::Identity), OS keychain token
//! storage with file and env fallbacks (`keyring`), the session lifecycle
//! (initialize / set-from-token / clear), and the two command gates.
//!
//! The client performs no cryptographic verification. The token payload is
//! trusted as-is, and every real trust decision is re-made by the remote
//! service on each request.

pub mod claims;
pub mod error;
pub mod guard;
pub mod session;
pub mod token_store;

pub use claims::decode_identity;
pub use error::AuthError;
pub use guard::{Fallback, Gate, GateState};
pub use session::Session;
