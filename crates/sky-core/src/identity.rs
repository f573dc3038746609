use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// Client-side reconstruction of the logged-in user.
///
/// Produced by `sky-auth` from a decoded session token, consumed by the CLI
/// gates and command handlers. Derived on every process start, never stored
/// authoritatively. Contains only data fields, no auth logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Numeric account id (`id` claim). `0` when the claim is absent.
    pub id: i64,
    /// Display name (`name` claim, falling back to the email local-part).
    pub name: String,
    /// Account email (`sub` claim).
    pub email: String,
    /// Role tag (`role` claim). Unknown tags collapse to [`Role::User`].
    pub role: Role,
}

impl Identity {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
