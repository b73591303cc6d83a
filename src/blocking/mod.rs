//! Blocking wrapper around [`FlightRadarApi`]
use crate::domain::{Airline, Airport, AirportDetails, Flight, FlightDetails, Zone};
use crate::errors::ApiResult;
use crate::services::FlightRadarApi;
use image::DynamicImage;
use serde_json::{Map, Value};
use std::future::Future;
use tokio::runtime::{Builder, Runtime};

/// Runs facade operations to completion on the calling thread.
///
/// Must not be used from within an async context; call [`FlightRadarApi`]
/// directly there.
pub struct BlockingApi {
    api: FlightRadarApi,
    runtime: Runtime,
}

impl BlockingApi {
    /// Blocking client against the production hosts.
    pub fn new() -> ApiResult<Self> {
        Self::from_api(FlightRadarApi::new()?)
    }

    pub fn from_api(api: FlightRadarApi) -> ApiResult<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { api, runtime })
    }

    pub fn api(&self) -> &FlightRadarApi {
        &self.api
    }

    /// Drive any async facade operation to completion.
    pub fn run<'a, F, Fut, T>(&'a self, op: F) -> T
    where
        F: FnOnce(&'a FlightRadarApi) -> Fut,
        Fut: Future<Output = T>,
    {
        self.runtime.block_on(op(&self.api))
    }

    pub fn list_flights(
        &self,
        airline_icao: Option<&str>,
        bounds: Option<&Zone>,
    ) -> ApiResult<Vec<Flight>> {
        self.run(|api| api.list_flights(airline_icao, bounds))
    }

    pub fn list_airlines(&self) -> ApiResult<Vec<Airline>> {
        self.run(|api| api.list_airlines())
    }

    pub fn list_airports(&self) -> ApiResult<Vec<Airport>> {
        self.run(|api| api.list_airports())
    }

    pub fn get_airline_logo(&self, code: &str, icao: &str) -> Option<DynamicImage> {
        self.run(|api| api.get_airline_logo(code, icao))
    }

    pub fn get_country_flag(&self, country: &str) -> Option<DynamicImage> {
        self.run(|api| api.get_country_flag(country))
    }

    pub fn get_zones(&self) -> ApiResult<Vec<Zone>> {
        self.run(|api| api.get_zones())
    }

    pub fn get_zones_raw(&self) -> ApiResult<Map<String, Value>> {
        self.run(|api| api.get_zones_raw())
    }

    pub fn get_airport_details(&self, iata: &str) -> ApiResult<AirportDetails> {
        self.run(|api| api.get_airport_details(iata))
    }

    pub fn get_flight_details(&self, flight_id: &str) -> ApiResult<FlightDetails> {
        self.run(|api| api.get_flight_details(flight_id))
    }

    /// Blocking form of [`Flight::details`]; shares the flight's cache.
    pub fn flight_details<'f>(&self, flight: &'f Flight) -> ApiResult<&'f FlightDetails> {
        self.run(|api| flight.details(api))
    }

    /// Blocking form of [`Airport::details`]; shares the airport's cache.
    pub fn airport_details<'f>(&self, airport: &'f Airport) -> ApiResult<&'f AirportDetails> {
        self.run(|api| airport.details(api))
    }
}
