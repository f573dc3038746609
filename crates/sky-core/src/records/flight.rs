use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Flight catalog entry as the flight service returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: i64,
    pub airline: String,
    pub source: String,
    pub destination: String,
    /// ISO date (`YYYY-MM-DD`).
    pub departure_date: NaiveDate,
    /// Clock text as the service formats it; carried verbatim.
    pub departure_time: String,
    pub available_seats: u32,
    pub price: f64,
}

/// Query parameters for `GET /api/flights/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightSearchParams {
    pub source: String,
    pub destination: String,
    /// ISO date (`YYYY-MM-DD`).
    pub date: NaiveDate,
}

/// Request body for `POST /api/flights/add` (admin only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFlight {
    pub airline: String,
    pub source: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub departure_time: String,
    pub available_seats: u32,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FIXTURE: &str = r#"{
        "id": 7,
        "airline": "IndiGo",
        "source": "DEL",
        "destination": "BOM",
        "departureDate": "2026-09-14",
        "departureTime": "10:30",
        "availableSeats": 42,
        "price": 129.5
    }"#;

    #[test]
    fn parse_flight_record() {
        let flight: Flight = serde_json::from_str(FIXTURE).expect("flight should parse");
        assert_eq!(flight.id, 7);
        assert_eq!(flight.airline, "IndiGo");
        assert_eq!(flight.departure_date.to_string(), "2026-09-14");
        assert_eq!(flight.departure_time, "10:30");
        assert_eq!(flight.available_seats, 42);
    }
}
