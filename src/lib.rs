//! Client for the undocumented Flightradar24 web endpoints.
//!
//! Fetches live flight positions, flight and airport details, airline and
//! airport reference lists, the zone tree used to scope live queries, and
//! logo/flag images.
//!
//! ```no_run
//! use flightradar24::{FlightRadarApi, ApiResult};
//!
//! #[tokio::main]
//! async fn main() -> ApiResult<()> {
//!     let api = FlightRadarApi::new()?;
//!
//!     let zones = api.get_zones().await?;
//!     let europe = zones.iter().find(|z| z.name == "europe");
//!
//!     for flight in api.list_flights(None, europe).await? {
//!         println!("{flight}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`BlockingApi`] offers the same operations for synchronous callers.

pub mod blocking;
pub mod clients;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod utils;

pub use blocking::BlockingApi;
pub use clients::{HttpFetcher, HttpResponse, ReqwestFetcher};
pub use config::{Endpoints, HttpConfig, TrackerConfig};
pub use domain::{Airline, Airport, AirportDetails, Flight, FlightDetails, Timezone, Zone};
pub use errors::{ApiError, ApiResult};
pub use services::FlightRadarApi;
