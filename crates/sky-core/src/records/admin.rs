use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Spring-style page envelope used by the admin listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub size: u32,
    /// Zero-based page index.
    pub number: u32,
}

/// Booking record as the admin endpoints shape it.
///
/// Not the same wire shape as [`super::Booking`]: here the flight id is
/// numeric, the seat count is `numberOfSeats`, and the amount is
/// `totalPrice`. Mirrored field-for-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBooking {
    pub id: i64,
    pub user_email: String,
    pub flight_id: i64,
    pub booking_date: String,
    pub number_of_seats: u32,
    pub total_price: f64,
    pub status: String,
}

/// Aggregate figures from `GET /api/admin/bookings/statistics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatistics {
    pub total_bookings: u64,
    pub confirmed_bookings: u64,
    pub cancelled_bookings: u64,
    pub pending_bookings: u64,
    pub total_revenue: f64,
    pub bookings_by_status: BTreeMap<String, u64>,
    pub today_bookings: u64,
    pub monthly_revenue: f64,
}

/// Optional filters for `GET /api/admin/bookings/search`. Unset fields are
/// left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSearchFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
}

/// Result of `POST /api/admin/bookings/bulk-cancel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCancelOutcome {
    pub cancelled_bookings: u64,
    pub flight_id: i64,
}
