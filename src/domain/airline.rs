use serde::{Deserialize, Serialize};

/// Row of the airline reference list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Airline {
    #[serde(rename = "Name")]
    pub name: String,
    /// IATA code; empty for operators without one.
    #[serde(rename = "Code", default)]
    pub code: String,
    #[serde(rename = "ICAO")]
    pub icao: String,
}
