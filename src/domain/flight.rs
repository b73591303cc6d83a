//! Live flight snapshots decoded from the positional feed format.
use super::flight_details::FlightDetails;
use super::DetailCell;
use crate::errors::ApiResult;
use crate::services::FlightRadarApi;
use crate::utils::{parse_field, value_or_sentinel};
use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Feed array index of each decoded field. 6, 7, 14, 15 and 17 are unused.
pub mod index {
    pub const ICAO: usize = 0;
    pub const LATITUDE: usize = 1;
    pub const LONGITUDE: usize = 2;
    pub const HEADING: usize = 3;
    pub const ALTITUDE_FT: usize = 4;
    pub const GROUND_SPEED_KTS: usize = 5;
    pub const AIRCRAFT_CODE: usize = 8;
    pub const REGISTRATION: usize = 9;
    pub const TIME: usize = 10;
    pub const ORIGIN_IATA: usize = 11;
    pub const DESTINATION_IATA: usize = 12;
    pub const NUMBER: usize = 13;
    pub const CALLSIGN: usize = 16;
    pub const AIRLINE_ICAO: usize = 18;
}

pub const FEET_TO_METERS: f64 = 0.3048;
pub const KNOTS_TO_KMH: f64 = 1.852;

/// One aircraft from the live feed.
///
/// Missing or blank feed values are decoded from the sentinel `"2147483647"`:
/// numeric fields hold `i32::MAX` and string fields hold the literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flight {
    id: String,
    icao: String,
    latitude: f64,
    longitude: f64,
    heading: i32,
    altitude_ft: i32,
    altitude_m: f64,
    ground_speed_kts: i32,
    ground_speed_kmh: f64,
    aircraft_code: String,
    registration: String,
    time: i64,
    origin_airport_iata: String,
    destination_airport_iata: String,
    number: String,
    callsign: String,
    airline_icao: String,
    #[serde(skip)]
    details: DetailCell<FlightDetails>,
}

impl Flight {
    /// Decode a feed entry.
    pub fn from_wire(id: impl Into<String>, values: &[Value]) -> ApiResult<Self> {
        let field = |i: usize, name: &'static str| value_or_sentinel(values, i, name);

        let altitude_ft: i32 = parse_field("altitude", &field(index::ALTITUDE_FT, "altitude")?)?;
        let ground_speed_kts: i32 = parse_field(
            "ground_speed",
            &field(index::GROUND_SPEED_KTS, "ground_speed")?,
        )?;

        Ok(Self {
            id: id.into(),
            icao: field(index::ICAO, "icao")?,
            latitude: parse_field("latitude", &field(index::LATITUDE, "latitude")?)?,
            longitude: parse_field("longitude", &field(index::LONGITUDE, "longitude")?)?,
            heading: parse_field("heading", &field(index::HEADING, "heading")?)?,
            altitude_ft,
            altitude_m: altitude_ft as f64 * FEET_TO_METERS,
            ground_speed_kts,
            ground_speed_kmh: ground_speed_kts as f64 * KNOTS_TO_KMH,
            aircraft_code: field(index::AIRCRAFT_CODE, "aircraft_code")?,
            registration: field(index::REGISTRATION, "registration")?,
            time: parse_field("time", &field(index::TIME, "time")?)?,
            origin_airport_iata: field(index::ORIGIN_IATA, "origin_airport_iata")?,
            destination_airport_iata: field(index::DESTINATION_IATA, "destination_airport_iata")?,
            number: field(index::NUMBER, "number")?,
            callsign: field(index::CALLSIGN, "callsign")?,
            airline_icao: field(index::AIRLINE_ICAO, "airline_icao")?,
            details: DetailCell::default(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// ICAO 24-bit address as hex.
    pub fn icao(&self) -> &str {
        &self.icao
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Degrees.
    pub fn heading(&self) -> i32 {
        self.heading
    }

    pub fn altitude_ft(&self) -> i32 {
        self.altitude_ft
    }

    pub fn altitude_m(&self) -> f64 {
        self.altitude_m
    }

    pub fn ground_speed_kts(&self) -> i32 {
        self.ground_speed_kts
    }

    pub fn ground_speed_kmh(&self) -> f64 {
        self.ground_speed_kmh
    }

    pub fn aircraft_code(&self) -> &str {
        &self.aircraft_code
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }

    /// Unix timestamp of the position report.
    pub fn time(&self) -> i64 {
        self.time
    }

    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.time, 0).single()
    }

    pub fn origin_airport_iata(&self) -> &str {
        &self.origin_airport_iata
    }

    pub fn set_origin_airport_iata(&mut self, iata: impl Into<String>) {
        self.origin_airport_iata = iata.into();
    }

    pub fn destination_airport_iata(&self) -> &str {
        &self.destination_airport_iata
    }

    pub fn set_destination_airport_iata(&mut self, iata: impl Into<String>) {
        self.destination_airport_iata = iata.into();
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn callsign(&self) -> &str {
        &self.callsign
    }

    pub fn airline_icao(&self) -> &str {
        &self.airline_icao
    }

    /// Flight details, fetched on first call and cached on this instance.
    pub async fn details(&self, api: &FlightRadarApi) -> ApiResult<&FlightDetails> {
        self.details
            .get_or_try_init(|| api.get_flight_details(&self.id))
            .await
    }

    /// Details if they have already been fetched.
    pub fn cached_details(&self) -> Option<&FlightDetails> {
        self.details.get()
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) {}->{} at {:.4},{:.4} {}ft {}kts hdg {}",
            self.id,
            self.callsign,
            self.aircraft_code,
            self.origin_airport_iata,
            self.destination_airport_iata,
            self.latitude,
            self.longitude,
            self.altitude_ft,
            self.ground_speed_kts,
            self.heading
        )
    }
}
