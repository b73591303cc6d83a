use super::timezone::Timezone;
use super::DetailCell;
use crate::errors::ApiResult;
use crate::services::FlightRadarApi;
use serde::{Deserialize, Serialize};

/// Row of the airport reference list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub name: String,
    pub iata: String,
    pub icao: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    pub country: String,
    /// Feet.
    #[serde(rename = "alt")]
    pub altitude: i32,
    #[serde(skip)]
    details: DetailCell<AirportDetails>,
}

/// The `details` member of the airport traffic-stats document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportDetails {
    pub timezone: Timezone,
    pub visible: bool,
    pub website: Option<String>,
}

impl Airport {
    /// Airport details, fetched on first call and cached on this instance.
    pub async fn details(&self, api: &FlightRadarApi) -> ApiResult<&AirportDetails> {
        self.details
            .get_or_try_init(|| api.get_airport_details(&self.iata))
            .await
    }

    pub fn cached_details(&self) -> Option<&AirportDetails> {
        self.details.get()
    }
}
