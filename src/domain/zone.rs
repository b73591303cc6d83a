//! Geographic zones used to scope live flight queries.
use crate::errors::{ApiError, ApiResult};
use crate::utils::num;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const VERSION_KEY: &str = "version";
const SUBZONES_KEY: &str = "subzones";

/// Named bounding box with optional nested sub-zones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub top_left_lat: f64,
    pub top_left_lon: f64,
    pub bottom_right_lat: f64,
    pub bottom_right_lon: f64,
    #[serde(default)]
    pub sub_zones: Vec<Zone>,
}

impl Zone {
    pub fn new(
        name: impl Into<String>,
        top_left_lat: f64,
        top_left_lon: f64,
        bottom_right_lat: f64,
        bottom_right_lon: f64,
    ) -> Self {
        Self {
            name: name.into(),
            top_left_lat,
            top_left_lon,
            bottom_right_lat,
            bottom_right_lon,
            sub_zones: Vec::new(),
        }
    }

    /// `top,bottom,left,right`, the format the live feed expects.
    pub fn bounds_param(&self) -> String {
        format!(
            "{},{},{},{}",
            self.top_left_lat, self.bottom_right_lat, self.top_left_lon, self.bottom_right_lon
        )
    }

    /// Inverse of [`Zone::bounds_param`]. The result has no sub-zones.
    pub fn from_bounds_param(name: impl Into<String>, param: &str) -> Option<Self> {
        let parts = param
            .split(',')
            .map(|p| p.trim().parse::<f64>().ok())
            .collect::<Option<Vec<_>>>()?;

        match parts.as_slice() {
            &[top, bottom, left, right] => Some(Self::new(name, top, left, bottom, right)),
            _ => None,
        }
    }

    /// Depth-first walk over this zone and every descendant.
    pub fn walk(&self) -> impl Iterator<Item = &Zone> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let zone = stack.pop()?;
            stack.extend(zone.sub_zones.iter().rev());
            Some(zone)
        })
    }
}

/// Parse the upstream zone document.
///
/// Entries missing a bound, or that are not objects, are skipped. The root
/// must be an object.
pub fn parse_zones(root: &Value) -> ApiResult<Vec<Zone>> {
    let map = root
        .as_object()
        .ok_or_else(|| ApiError::malformed("zone document is not a JSON object"))?;
    parse_zone_map(map)
}

fn parse_zone_map(map: &Map<String, Value>) -> ApiResult<Vec<Zone>> {
    let mut zones = Vec::with_capacity(map.len());

    for (name, entry) in map {
        if name == VERSION_KEY {
            continue;
        }
        let Some(descriptor) = entry.as_object() else {
            tracing::trace!("skipping non-object zone entry {}", name);
            continue;
        };
        if let Some(zone) = parse_zone(name, descriptor)? {
            zones.push(zone);
        }
    }

    Ok(zones)
}

fn parse_zone(name: &str, descriptor: &Map<String, Value>) -> ApiResult<Option<Zone>> {
    let (Some(tl_y), Some(tl_x), Some(br_y), Some(br_x)) = (
        descriptor.get("tl_y"),
        descriptor.get("tl_x"),
        descriptor.get("br_y"),
        descriptor.get("br_x"),
    ) else {
        tracing::trace!("skipping zone {} with missing bounds", name);
        return Ok(None);
    };

    let mut zone = Zone::new(
        name,
        bound("tl_y", tl_y)?,
        bound("tl_x", tl_x)?,
        bound("br_y", br_y)?,
        bound("br_x", br_x)?,
    );

    if let Some(children) = descriptor.get(SUBZONES_KEY).and_then(Value::as_object) {
        zone.sub_zones = parse_zone_map(children)?;
    }

    Ok(Some(zone))
}

fn bound(field: &'static str, value: &Value) -> ApiResult<f64> {
    num(value).ok_or_else(|| ApiError::decode(field, value.to_string()))
}
