//! API facade over the upstream endpoints
use crate::clients::{HttpFetcher, HttpResponse, ReqwestFetcher};
use crate::config::{Endpoints, HttpConfig, TrackerConfig};
use crate::domain::zone::parse_zones;
use crate::domain::{Airline, Airport, AirportDetails, Flight, FlightDetails, Zone};
use crate::errors::{ApiError, ApiResult};
use crate::utils::decode_image;
use image::DynamicImage;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// Keys of the live feed document that are not flights.
pub const FEED_WRAPPER_KEYS: [&str; 3] = ["stats", "version", "full_count"];

/// Asynchronous client for the flight tracking endpoints.
///
/// Cheap to clone; clones share the underlying HTTP fetcher.
#[derive(Clone)]
pub struct FlightRadarApi {
    fetcher: Arc<dyn HttpFetcher>,
    endpoints: Endpoints,
}

impl FlightRadarApi {
    /// Client against the production hosts using reqwest.
    pub fn new() -> ApiResult<Self> {
        Self::with_config(&HttpConfig::default(), Endpoints::default())
    }

    pub fn with_config(http: &HttpConfig, endpoints: Endpoints) -> ApiResult<Self> {
        Ok(Self::with_fetcher(
            Arc::new(ReqwestFetcher::new(http)?),
            endpoints,
        ))
    }

    pub fn with_fetcher(fetcher: Arc<dyn HttpFetcher>, endpoints: Endpoints) -> Self {
        Self { fetcher, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Live flights using the default tracker flags.
    ///
    /// Without an airline or bounds upstream still returns a capped, arbitrary
    /// selection of flights.
    pub async fn list_flights(
        &self,
        airline_icao: Option<&str>,
        bounds: Option<&Zone>,
    ) -> ApiResult<Vec<Flight>> {
        self.list_flights_with(&TrackerConfig::default(), airline_icao, bounds)
            .await
    }

    /// Live flights using explicit tracker flags.
    pub async fn list_flights_with(
        &self,
        config: &TrackerConfig,
        airline_icao: Option<&str>,
        bounds: Option<&Zone>,
    ) -> ApiResult<Vec<Flight>> {
        let url = self.flights_url(config, airline_icao, bounds)?;
        let feed = self.fetch_object(url.as_str()).await?;

        let flights = feed
            .iter()
            .filter(|(key, _)| !FEED_WRAPPER_KEYS.contains(&key.as_str()))
            .map(|(id, entry)| {
                let values = entry.as_array().ok_or_else(|| {
                    ApiError::malformed(format!("feed entry {} is not an array", id))
                })?;
                Flight::from_wire(id.as_str(), values)
            })
            .collect::<ApiResult<Vec<_>>>()?;

        debug!("Decoded {} flights", flights.len());
        Ok(flights)
    }

    /// Feed URL with tracker flags, then airline, then bounds.
    pub fn flights_url(
        &self,
        config: &TrackerConfig,
        airline_icao: Option<&str>,
        bounds: Option<&Zone>,
    ) -> ApiResult<Url> {
        let mut url = Url::parse(&self.endpoints.flights_feed())
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in config.iter() {
                query.append_pair(key, value);
            }
            if let Some(airline) = airline_icao {
                query.append_pair("airline", airline);
            }
            if let Some(zone) = bounds {
                query.append_pair("bounds", &zone.bounds_param());
            }
        }
        Ok(url)
    }

    pub async fn list_airlines(&self) -> ApiResult<Vec<Airline>> {
        let url = self.endpoints.airlines();
        self.fetch_rows(&url).await
    }

    pub async fn list_airports(&self) -> ApiResult<Vec<Airport>> {
        let url = self.endpoints.airports();
        self.fetch_rows(&url).await
    }

    /// Airline logo, trying the CDN first and the operator image second.
    pub async fn get_airline_logo(&self, code: &str, icao: &str) -> Option<DynamicImage> {
        let primary = self.endpoints.airline_logo(code, icao);
        match self.fetch_image(&primary).await {
            Ok(image) => return Some(image),
            Err(e) => warn!("Airline logo {} unavailable, trying fallback: {}", primary, e),
        }

        let fallback = self.endpoints.airline_logo_fallback(icao);
        match self.fetch_image(&fallback).await {
            Ok(image) => Some(image),
            Err(e) => {
                warn!("Airline logo fallback {} unavailable: {}", fallback, e);
                None
            }
        }
    }

    pub async fn get_country_flag(&self, country: &str) -> Option<DynamicImage> {
        let url = self.endpoints.country_flag(&normalize_country(country));
        match self.fetch_image(&url).await {
            Ok(image) => Some(image),
            Err(e) => {
                warn!("Country flag {} unavailable: {}", url, e);
                None
            }
        }
    }

    pub async fn get_zones(&self) -> ApiResult<Vec<Zone>> {
        let raw = self.get_zones_raw().await?;
        let zones = parse_zones(&Value::Object(raw))?;
        debug!("Parsed {} top-level zones", zones.len());
        Ok(zones)
    }

    /// The zone document exactly as served.
    pub async fn get_zones_raw(&self) -> ApiResult<Map<String, Value>> {
        let url = self.endpoints.zones();
        self.fetch_object(&url).await
    }

    pub async fn get_airport_details(&self, iata: &str) -> ApiResult<AirportDetails> {
        let url = self.endpoints.airport_details(iata);
        let mut doc = self.fetch_object(&url).await?;
        let details = doc
            .remove("details")
            .ok_or_else(|| ApiError::malformed(format!("no `details` for airport {}", iata)))?;
        Ok(serde_json::from_value(details)?)
    }

    pub async fn get_flight_details(&self, flight_id: &str) -> ApiResult<FlightDetails> {
        let url = self.endpoints.flight_details(flight_id);
        self.fetch_json(&url).await
    }

    async fn fetch(&self, url: &str) -> ApiResult<HttpResponse> {
        debug!("GET {}", url);
        self.fetcher.get(url).await?.error_for_status(url)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let resp = self.fetch(url).await?;
        Ok(serde_json::from_slice(&resp.body)?)
    }

    async fn fetch_object(&self, url: &str) -> ApiResult<Map<String, Value>> {
        match self.fetch_json::<Value>(url).await? {
            Value::Object(map) => Ok(map),
            other => Err(ApiError::malformed(format!(
                "expected JSON object from {}, got {}",
                url,
                json_kind(&other)
            ))),
        }
    }

    async fn fetch_rows<T: DeserializeOwned>(&self, url: &str) -> ApiResult<Vec<T>> {
        let mut doc = self.fetch_object(url).await?;
        let rows = doc
            .remove("rows")
            .ok_or_else(|| ApiError::malformed(format!("no `rows` in response from {}", url)))?;
        let rows: Vec<T> = serde_json::from_value(rows)?;
        debug!("Decoded {} rows from {}", rows.len(), url);
        Ok(rows)
    }

    async fn fetch_image(&self, url: &str) -> ApiResult<DynamicImage> {
        let resp = self.fetch(url).await?;
        decode_image(&resp.body)
    }
}

/// Lowercase with spaces replaced by hyphens, as used in flag file names.
pub fn normalize_country(country: &str) -> String {
    country.to_lowercase().replace(' ', "-")
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
