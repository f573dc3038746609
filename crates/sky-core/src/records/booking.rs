use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/bookings`.
///
/// The booking service expects the flight id as a *string* and the seat
/// count under `numSeats`, regardless of how the caller holds them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub flight_id: String,
    pub num_seats: u32,
}

impl BookingRequest {
    /// Shape a numeric flight id and seat count into the wire format.
    #[must_use]
    pub fn new(flight_id: i64, num_seats: u32) -> Self {
        Self {
            flight_id: flight_id.to_string(),
            num_seats,
        }
    }
}

/// Booking record as the booking service returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    /// Derived by the service from the presented token.
    pub user_email: String,
    pub flight_id: String,
    pub booking_date: NaiveDate,
    pub num_seats: u32,
    pub total_amount: f64,
    /// Server-assigned status tag, carried verbatim.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn booking_request_shapes_flight_id_as_string() {
        let request = BookingRequest::new(3, 2);
        let body = serde_json::to_value(&request).expect("request should serialize");
        assert_eq!(body, serde_json::json!({"flightId": "3", "numSeats": 2}));
    }

    #[test]
    fn parse_booking_record() {
        let raw = r#"{
            "id": 11,
            "userEmail": "ada@example.com",
            "flightId": "3",
            "bookingDate": "2026-08-01",
            "numSeats": 2,
            "totalAmount": 259.0,
            "status": "CONFIRMED"
        }"#;
        let booking: Booking = serde_json::from_str(raw).expect("booking should parse");
        assert_eq!(booking.flight_id, "3");
        assert_eq!(booking.num_seats, 2);
        assert_eq!(booking.status, "CONFIRMED");
    }
}
