//! Booking lifecycle client (`/api/bookings/*`).

use reqwest::Method;
use sky_core::records::{Booking, BookingRequest};

use crate::{ApiClient, error::ApiError, http::check_response};

impl ApiClient {
    /// `POST /api/bookings`: create a booking.
    ///
    /// The wire body is shaped by [`BookingRequest::new`]: the flight id
    /// goes out as a string under `flightId`, the seat count as `numSeats`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn create_booking(
        &self,
        flight_id: i64,
        num_seats: u32,
    ) -> Result<Booking, ApiError> {
        let request = BookingRequest::new(flight_id, num_seats);
        let resp = check_response(
            self.request(Method::POST, "/api/bookings")
                .json(&request)
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `GET /api/bookings/user`: bookings of the authenticated user (the
    /// service derives the user from the presented token).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn user_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        let resp =
            check_response(self.request(Method::GET, "/api/bookings/user").send().await?).await?;
        Ok(resp.json().await?)
    }

    /// `GET /api/bookings/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn booking(&self, id: i64) -> Result<Booking, ApiError> {
        let resp = check_response(
            self.request(Method::GET, &format!("/api/bookings/{id}"))
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `DELETE /api/bookings/cancel/{id}`: returns the service's
    /// confirmation text.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request or status failure.
    pub async fn cancel_booking(&self, id: i64) -> Result<String, ApiError> {
        let resp = check_response(
            self.request(Method::DELETE, &format!("/api/bookings/cancel/{id}"))
                .send()
                .await?,
        )
        .await?;
        Ok(resp.text().await?)
    }
}
