//! Administration client (`/api/admin/*`): paginated booking and user
//! management, status transitions, bulk cancel, statistics, search, revenue.

use std::collections::BTreeMap;

use reqwest::Method;
use sky_core::enums::{BookingStatus, Role};
use sky_core::records::{
    AdminBooking, BookingSearchFilter, BookingStatistics, BulkCancelOutcome, Page, User,
};

use crate::{ApiClient, error::ApiError, http::check_response};

impl ApiClient {
    /// `GET /api/admin/bookings?page&size&sortBy&sortDirection`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn admin_bookings(
        &self,
        page: u32,
        size: u32,
        sort_by: &str,
        sort_direction: &str,
    ) -> Result<Page<AdminBooking>, ApiError> {
        let resp = check_response(
            self.request(Method::GET, "/api/admin/bookings")
                .query(&[
                    ("page", page.to_string()),
                    ("size", size.to_string()),
                    ("sortBy", sort_by.to_string()),
                    ("sortDirection", sort_direction.to_string()),
                ])
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `GET /api/admin/bookings/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn admin_booking(&self, id: i64) -> Result<AdminBooking, ApiError> {
        let resp = check_response(
            self.request(Method::GET, &format!("/api/admin/bookings/{id}"))
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `GET /api/admin/bookings/user/{email}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn admin_bookings_by_user(&self, email: &str) -> Result<Vec<AdminBooking>, ApiError> {
        let resp = check_response(
            self.request(
                Method::GET,
                &format!("/api/admin/bookings/user/{}", urlencoding::encode(email)),
            )
            .send()
            .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `GET /api/admin/bookings/flight/{flightId}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn admin_bookings_by_flight(
        &self,
        flight_id: i64,
    ) -> Result<Vec<AdminBooking>, ApiError> {
        let resp = check_response(
            self.request(
                Method::GET,
                &format!("/api/admin/bookings/flight/{flight_id}"),
            )
            .send()
            .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `PUT /api/admin/bookings/{id}/status?status=`: transition a booking.
    /// The target tag is validated against the closed set by the
    /// [`BookingStatus`] type; whether the transition is legal stays the
    /// service's call.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn admin_update_booking_status(
        &self,
        id: i64,
        status: BookingStatus,
    ) -> Result<AdminBooking, ApiError> {
        let resp = check_response(
            self.request(Method::PUT, &format!("/api/admin/bookings/{id}/status"))
                .query(&[("status", status.as_str())])
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `PUT /api/admin/bookings/{id}/cancel`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn admin_cancel_booking(&self, id: i64) -> Result<AdminBooking, ApiError> {
        let resp = check_response(
            self.request(Method::PUT, &format!("/api/admin/bookings/{id}/cancel"))
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `GET /api/admin/bookings/statistics`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn admin_statistics(&self) -> Result<BookingStatistics, ApiError> {
        let resp = check_response(
            self.request(Method::GET, "/api/admin/bookings/statistics")
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `GET /api/admin/bookings/search` with the filter's set fields as
    /// query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn admin_search_bookings(
        &self,
        filter: &BookingSearchFilter,
    ) -> Result<Vec<AdminBooking>, ApiError> {
        let resp = check_response(
            self.request(Method::GET, "/api/admin/bookings/search")
                .query(filter)
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `GET /api/admin/bookings/recent?limit=`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn admin_recent_bookings(&self, limit: u32) -> Result<Vec<AdminBooking>, ApiError> {
        let resp = check_response(
            self.request(Method::GET, "/api/admin/bookings/recent")
                .query(&[("limit", limit)])
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `GET /api/admin/bookings/revenue/by-flight`: revenue keyed by
    /// flight id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn admin_revenue_by_flight(&self) -> Result<BTreeMap<i64, f64>, ApiError> {
        let resp = check_response(
            self.request(Method::GET, "/api/admin/bookings/revenue/by-flight")
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `GET /api/admin/bookings/revenue/by-date?days=`: revenue keyed by
    /// ISO date.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn admin_revenue_by_date(&self, days: u32) -> Result<BTreeMap<String, f64>, ApiError> {
        let resp = check_response(
            self.request(Method::GET, "/api/admin/bookings/revenue/by-date")
                .query(&[("days", days)])
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `POST /api/admin/bookings/bulk-cancel?flightId=`: cancel every
    /// booking on a flight.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn admin_bulk_cancel(&self, flight_id: i64) -> Result<BulkCancelOutcome, ApiError> {
        let resp = check_response(
            self.request(Method::POST, "/api/admin/bookings/bulk-cancel")
                .query(&[("flightId", flight_id)])
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `GET /api/admin/users?page&size`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn admin_users(&self, page: u32, size: u32) -> Result<Page<User>, ApiError> {
        let resp = check_response(
            self.request(Method::GET, "/api/admin/users")
                .query(&[("page", page), ("size", size)])
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `GET /api/admin/users/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn admin_user(&self, id: i64) -> Result<User, ApiError> {
        let resp = check_response(
            self.request(Method::GET, &format!("/api/admin/users/{id}"))
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `PUT /api/admin/users/{id}/role?role=`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn admin_update_user_role(&self, id: i64, role: Role) -> Result<User, ApiError> {
        let resp = check_response(
            self.request(Method::PUT, &format!("/api/admin/users/{id}/role"))
                .query(&[("role", role.as_str())])
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `DELETE /api/admin/users/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request or status failure.
    pub async fn admin_delete_user(&self, id: i64) -> Result<(), ApiError> {
        check_response(
            self.request(Method::DELETE, &format!("/api/admin/users/{id}"))
                .send()
                .await?,
        )
        .await?;
        Ok(())
    }
}
