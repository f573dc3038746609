//! Payment lifecycle client (`/api/payments/*`).

use reqwest::Method;
use sky_core::records::{Payment, PaymentReceipt, PaymentRequest};

use crate::{ApiClient, error::ApiError, http::check_response};

impl ApiClient {
    /// `POST /api/payments`: initiate a payment for a booking.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn create_payment(
        &self,
        payment: &PaymentRequest,
    ) -> Result<PaymentReceipt, ApiError> {
        let resp = check_response(
            self.request(Method::POST, "/api/payments")
                .json(payment)
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `GET /api/payments/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn payment(&self, id: i64) -> Result<Payment, ApiError> {
        let resp = check_response(
            self.request(Method::GET, &format!("/api/payments/{id}"))
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `GET /api/payments/booking/{id}`: the payment attached to a booking.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn payment_for_booking(&self, booking_id: i64) -> Result<Payment, ApiError> {
        let resp = check_response(
            self.request(Method::GET, &format!("/api/payments/booking/{booking_id}"))
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `GET /api/payments/user/{id}`: all payments of a user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn user_payments(&self, user_id: &str) -> Result<Vec<Payment>, ApiError> {
        let resp = check_response(
            self.request(
                Method::GET,
                &format!("/api/payments/user/{}", urlencoding::encode(user_id)),
            )
            .send()
            .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `POST /api/payments/{id}/refund?refundAmount=`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn refund_payment(
        &self,
        payment_id: i64,
        refund_amount: f64,
    ) -> Result<PaymentReceipt, ApiError> {
        let resp = check_response(
            self.request(Method::POST, &format!("/api/payments/{payment_id}/refund"))
                .query(&[("refundAmount", refund_amount)])
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }
}
