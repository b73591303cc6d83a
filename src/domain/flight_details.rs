//! Flight detail document served by the click handler endpoint.
//!
//! Unknown keys are ignored throughout; upstream adds fields freely.
use super::timezone::Timezone;
use crate::utils::lenient_i64;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightDetails {
    pub aircraft: AircraftInfo,
    pub airline: AirlineInfo,
    pub airport: RouteAirports,
    #[serde(default)]
    pub availability: Vec<String>,
    pub time: FlightTimes,
    #[serde(default)]
    pub trail: Vec<TrailPoint>,
    pub first_timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftInfo {
    pub model: AircraftModel,
    pub country_id: i64,
    pub registration: String,
    #[serde(default)]
    pub images: AircraftImages,
    pub hex: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AircraftModel {
    pub code: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AircraftImages {
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,
    #[serde(default)]
    pub medium: Vec<Thumbnail>,
    #[serde(default)]
    pub large: Vec<Thumbnail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Thumbnail {
    pub src: String,
    pub link: String,
    pub copyright: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AirlineInfo {
    pub name: String,
    pub short: String,
    pub code: CodePair,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodePair {
    pub iata: String,
    pub icao: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteAirports {
    pub origin: RouteAirport,
    pub destination: RouteAirport,
    /// Set when the flight diverted.
    pub real: Option<RouteAirport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteAirport {
    pub name: String,
    pub code: CodePair,
    pub position: AirportPosition,
    pub timezone: Timezone,
    pub website: Option<String>,
    pub info: GateInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportPosition {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: i32,
    pub country: Country,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub code_long: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GateInfo {
    pub terminal: Option<String>,
    pub baggage: Option<String>,
    pub gate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlightTimes {
    pub scheduled: FlightTime,
    pub real: FlightTime,
    pub estimated: FlightTime,
    pub historical: Option<HistoricalTimes>,
}

/// Unix timestamps; either side may be unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlightTime {
    pub departure: Option<i64>,
    pub arrival: Option<i64>,
}

/// Seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoricalTimes {
    #[serde(deserialize_with = "lenient_i64")]
    pub flighttime: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub delay: i64,
}

/// One recorded position along the flight's track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailPoint {
    pub lat: f64,
    pub lng: f64,
    /// Feet.
    pub alt: i32,
    /// Knots.
    pub spd: i32,
    pub ts: i64,
    pub hd: i32,
}

impl TrailPoint {
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.ts, 0).single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = include_str!("../../tests/fixtures/flight_details.json");

    #[test]
    fn test_decode_fixture() {
        let details: FlightDetails = serde_json::from_str(FIXTURE).unwrap();

        assert_eq!(details.aircraft.model.code, "B38M");
        assert_eq!(details.aircraft.images.thumbnails.len(), 1);
        assert_eq!(details.airline.code.icao, "RYR");
        assert_eq!(details.airport.origin.code.iata, "DUB");
        assert_eq!(details.airport.destination.position.country.code_long, "GBR");
        assert!(details.airport.real.is_none());
        assert_eq!(details.airport.origin.info.baggage, None);
        assert_eq!(details.time.real.arrival, None);
        assert_eq!(details.time.historical.map(|h| h.flighttime), Some(3720));
        assert_eq!(details.trail.len(), 2);
        assert_eq!(details.availability, vec!["AGE", "VERTSPEED"]);
        assert_eq!(details.first_timestamp, 1_700_000_000);
    }

    #[test]
    fn test_trail_timestamp() {
        let details: FlightDetails = serde_json::from_str(FIXTURE).unwrap();
        let first = details.trail[0];
        assert_eq!(first.recorded_at().map(|t| t.timestamp()), Some(first.ts));
    }

    #[test]
    fn test_equality_compares_sequences_by_value() {
        let a: FlightDetails = serde_json::from_str(FIXTURE).unwrap();
        let mut b = a.clone();
        assert_eq!(a, b);

        b.trail[1].alt += 100;
        assert_ne!(a, b);
    }
}
