use serde::{Deserialize, Serialize};

use crate::enums::PaymentMethod;

/// Request body for `POST /api/payments`.
///
/// Method-specific fields are optional and omitted from the body when unset;
/// the payment service validates that the fields match the chosen method.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub booking_id: i64,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upi_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_provider: Option<String>,
}

/// Immediate response to a payment or refund initiation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub id: i64,
    pub booking_id: i64,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    pub payment_method: String,
    pub transaction_id: String,
    pub payment_time: String,
    pub message: String,
}

/// Stored payment record as the payment service returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    pub booking_id: i64,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    pub payment_method: String,
    pub transaction_id: String,
    pub payment_time: String,
    pub created_at: String,
    pub updated_at: String,
    pub user_id: String,
    #[serde(default)]
    pub refund_amount: Option<f64>,
    #[serde(default)]
    pub failure_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn payment_request_omits_unset_method_fields() {
        let request = PaymentRequest {
            booking_id: 11,
            amount: 259.0,
            payment_method: PaymentMethod::Upi,
            currency: None,
            card_number: None,
            cvv: None,
            expiry_month: None,
            expiry_year: None,
            upi_id: Some("ada@upi".into()),
            wallet_provider: None,
        };
        let body = serde_json::to_value(&request).expect("request should serialize");
        assert_eq!(
            body,
            serde_json::json!({
                "bookingId": 11,
                "amount": 259.0,
                "paymentMethod": "UPI",
                "upiId": "ada@upi"
            })
        );
    }

    #[test]
    fn parse_payment_without_refund_fields() {
        let raw = r#"{
            "id": 5,
            "bookingId": 11,
            "amount": 259.0,
            "currency": "USD",
            "status": "SUCCESS",
            "paymentMethod": "UPI",
            "transactionId": "txn_8841",
            "paymentTime": "2026-08-01T09:12:44",
            "createdAt": "2026-08-01T09:12:40",
            "updatedAt": "2026-08-01T09:12:44",
            "userId": "ada@example.com"
        }"#;
        let payment: Payment = serde_json::from_str(raw).expect("payment should parse");
        assert_eq!(payment.transaction_id, "txn_8841");
        assert_eq!(payment.refund_amount, None);
        assert_eq!(payment.failure_reason, None);
    }
}
