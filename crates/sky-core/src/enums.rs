//! Role and status tag sets mirrored from the remote booking services.
//!
//! All enums serialize with the exact uppercase tags the services use.
//! Record fields that merely echo a server-assigned status stay `String`
//! (the server owns those values); the enums here exist where the client
//! must validate or construct a tag itself.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Account role tag. Closed set: anything the service sends outside it
/// deserializes to [`Role::User`], the least-privileged tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    #[serde(other)]
    User,
}

impl Role {
    /// Map a raw role tag onto the closed set. Unknown or empty tags fall
    /// back to [`Role::User`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "ADMIN" => Self::Admin,
            _ => Self::User,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BookingStatus
// ---------------------------------------------------------------------------

/// Booking status tags accepted by the admin status-transition endpoint.
///
/// Transitions themselves are server-authoritative; the client only
/// validates that an operator-supplied tag belongs to the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Paid,
    Cancelled,
}

impl BookingStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Paid => "PAID",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PaymentMethod
// ---------------------------------------------------------------------------

/// Payment methods the payment service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Upi,
    NetBanking,
    Wallet,
    CashOnDelivery,
}

impl PaymentMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreditCard => "CREDIT_CARD",
            Self::DebitCard => "DEBIT_CARD",
            Self::Upi => "UPI",
            Self::NetBanking => "NET_BANKING",
            Self::Wallet => "WALLET",
            Self::CashOnDelivery => "CASH_ON_DELIVERY",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn role_unknown_tag_defaults_to_user() {
        assert_eq!(Role::from_tag("SUPERUSER"), Role::User);
        assert_eq!(Role::from_tag(""), Role::User);
        assert_eq!(Role::from_tag("ADMIN"), Role::Admin);
    }

    #[test]
    fn role_deserializes_unknown_tag_as_user() {
        let role: Role = serde_json::from_str(r#""MODERATOR""#).expect("role should deserialize");
        assert_eq!(role, Role::User);
    }

    #[test]
    fn role_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""ADMIN""#);
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""USER""#);
    }

    #[test]
    fn booking_status_tags_match_service_spelling() {
        for (status, tag) in [
            (BookingStatus::Pending, "PENDING"),
            (BookingStatus::Confirmed, "CONFIRMED"),
            (BookingStatus::Paid, "PAID"),
            (BookingStatus::Cancelled, "CANCELLED"),
        ] {
            assert_eq!(status.as_str(), tag);
            assert_eq!(serde_json::to_string(&status).unwrap(), format!("\"{tag}\""));
        }
    }

    #[test]
    fn payment_method_uses_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CreditCard).unwrap(),
            r#""CREDIT_CARD""#
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CashOnDelivery).unwrap(),
            r#""CASH_ON_DELIVERY""#
        );
    }
}
