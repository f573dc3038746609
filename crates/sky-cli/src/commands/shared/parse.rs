use serde::de::DeserializeOwned;

/// Parse an uppercase wire tag from relaxed CLI input.
///
/// `confirmed`, `CONFIRMED`, and `cash-on-delivery` all normalize to the
/// tag the services expect before serde-deserialization validates it
/// against the closed set.
pub fn parse_tag<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('-', "_").to_ascii_uppercase();
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use sky_core::enums::{BookingStatus, PaymentMethod};

    use super::parse_tag;

    #[test]
    fn parses_lowercase_status() {
        let status: BookingStatus = parse_tag("confirmed", "status").expect("status should parse");
        assert_eq!(status, BookingStatus::Confirmed);
    }

    #[test]
    fn parses_hyphenated_payment_method() {
        let method: PaymentMethod =
            parse_tag("cash-on-delivery", "method").expect("method should parse");
        assert_eq!(method, PaymentMethod::CashOnDelivery);
    }

    #[test]
    fn errors_on_unknown_tag() {
        let err = parse_tag::<BookingStatus>("SHIPPED", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'SHIPPED'"));
    }
}
