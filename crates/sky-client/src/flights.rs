//! Flight catalog client (`/api/flights/*`).

use reqwest::Method;
use sky_core::records::{Flight, FlightSearchParams, NewFlight};

use crate::{ApiClient, error::ApiError, http::check_response};

impl ApiClient {
    /// `GET /api/flights`: the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn list_flights(&self) -> Result<Vec<Flight>, ApiError> {
        let resp = check_response(self.request(Method::GET, "/api/flights").send().await?).await?;
        Ok(resp.json().await?)
    }

    /// `GET /api/flights/search?source&destination&date`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn search_flights(
        &self,
        params: &FlightSearchParams,
    ) -> Result<Vec<Flight>, ApiError> {
        let resp = check_response(
            self.request(Method::GET, "/api/flights/search")
                .query(params)
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `GET /api/flights/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn flight(&self, id: i64) -> Result<Flight, ApiError> {
        let resp = check_response(
            self.request(Method::GET, &format!("/api/flights/{id}"))
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `POST /api/flights/add` (admin): returns the service's confirmation
    /// text.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request or status failure.
    pub async fn add_flight(&self, flight: &NewFlight) -> Result<String, ApiError> {
        let resp = check_response(
            self.request(Method::POST, "/api/flights/add")
                .json(flight)
                .send()
                .await?,
        )
        .await?;
        Ok(resp.text().await?)
    }

    /// `DELETE /api/admin/flights/{id}` (admin).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request or status failure.
    pub async fn remove_flight(&self, id: i64) -> Result<(), ApiError> {
        check_response(
            self.request(Method::DELETE, &format!("/api/admin/flights/{id}"))
                .send()
                .await?,
        )
        .await?;
        Ok(())
    }
}
