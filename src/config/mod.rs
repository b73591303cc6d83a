//! Client configuration module
use std::time::Duration;

const CDN_BASE_URL: &str = "https://cdn.flightradar24.com";
const SITE_BASE_URL: &str = "https://www.flightradar24.com";
const DATA_LIVE_BASE_URL: &str = "https://data-live.flightradar24.com";
const DATA_CLOUD_BASE_URL: &str = "https://data-cloud.flightradar24.com";

/// Upstream hosts. Every endpoint URL is derived from one of these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub cdn_base_url: String,
    pub site_base_url: String,
    pub data_live_base_url: String,
    pub data_cloud_base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            cdn_base_url: CDN_BASE_URL.to_string(),
            site_base_url: SITE_BASE_URL.to_string(),
            data_live_base_url: DATA_LIVE_BASE_URL.to_string(),
            data_cloud_base_url: DATA_CLOUD_BASE_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Point every host at the same base URL, e.g. a local mock server.
    pub fn with_base(base_url: impl Into<String>) -> Self {
        let base = base_url.into().trim_end_matches('/').to_string();
        Self {
            cdn_base_url: base.clone(),
            site_base_url: base.clone(),
            data_live_base_url: base.clone(),
            data_cloud_base_url: base,
        }
    }

    pub fn flights_feed(&self) -> String {
        format!("{}/zones/fcgi/feed.js", self.data_cloud_base_url)
    }

    pub fn flight_details(&self, flight_id: &str) -> String {
        format!("{}/clickhandler/?flight={}", self.data_live_base_url, flight_id)
    }

    pub fn airport_details(&self, iata: &str) -> String {
        format!(
            "{}/airports/traffic-stats/?airport={}",
            self.site_base_url, iata
        )
    }

    pub fn airports(&self) -> String {
        format!("{}/_json/airports.php", self.site_base_url)
    }

    pub fn airlines(&self) -> String {
        format!("{}/_json/airlines.php", self.site_base_url)
    }

    pub fn zones(&self) -> String {
        format!("{}/js/zones.js.php", self.site_base_url)
    }

    /// `country` must already be normalized (lowercase, hyphenated).
    pub fn country_flag(&self, country: &str) -> String {
        format!(
            "{}/static/images/data/flags-small/{}.gif",
            self.site_base_url, country
        )
    }

    pub fn airline_logo(&self, code: &str, icao: &str) -> String {
        format!(
            "{}/assets/airlines/logotypes/{}_{}.png",
            self.cdn_base_url, code, icao
        )
    }

    pub fn airline_logo_fallback(&self, icao: &str) -> String {
        format!(
            "{}/static/images/data/operators/{}_logo0.png",
            self.site_base_url, icao
        )
    }
}

/// Settings for the reqwest-backed HTTP fetcher.
#[derive(Clone, Debug)]
pub struct HttpConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!("flightradar24-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Query flags sent with every live flight feed request, in insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackerConfig {
    params: Vec<(String, String)>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        let params = [
            ("faa", "1"),
            ("satellite", "1"),
            ("mlat", "1"),
            ("flarm", "1"),
            ("adsb", "1"),
            ("gnd", "1"),
            ("air", "1"),
            ("vehicles", "1"),
            ("estimated", "1"),
            ("maxage", "14400"),
            ("gliders", "100"),
            ("stats", "1"),
            ("limit", "5000"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self { params }
    }
}

impl TrackerConfig {
    /// A config with no flags at all.
    pub fn empty() -> Self {
        Self { params: Vec::new() }
    }

    /// Replace an existing flag in place, or append a new one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.params.push((key, value)),
        }
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.params.iter().position(|(k, _)| k == key)?;
        Some(self.params.remove(pos).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tracker_config_order() {
        let config = TrackerConfig::default();
        let keys: Vec<&str> = config.iter().map(|(k, _)| k).collect();
        assert_eq!(keys.first(), Some(&"faa"));
        assert_eq!(keys.last(), Some(&"limit"));
        assert_eq!(config.len(), 13);
        assert_eq!(config.get("maxage"), Some("14400"));
        assert_eq!(config.get("gliders"), Some("100"));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut config = TrackerConfig::default();
        config.set("faa", "0");
        assert_eq!(config.iter().next(), Some(("faa", "0")));
        assert_eq!(config.len(), 13);
    }

    #[test]
    fn test_set_appends_new_key() {
        let config = TrackerConfig::empty().with("limit", "10").with("air", "0");
        let pairs: Vec<_> = config.iter().collect();
        assert_eq!(pairs, vec![("limit", "10"), ("air", "0")]);
    }

    #[test]
    fn test_remove() {
        let mut config = TrackerConfig::default();
        assert_eq!(config.remove("stats"), Some("1".to_string()));
        assert_eq!(config.get("stats"), None);
        assert_eq!(config.remove("stats"), None);
    }

    #[test]
    fn test_endpoint_urls() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.airline_logo("WN", "SWA"),
            "https://cdn.flightradar24.com/assets/airlines/logotypes/WN_SWA.png"
        );
        assert_eq!(
            endpoints.airline_logo_fallback("SWA"),
            "https://www.flightradar24.com/static/images/data/operators/SWA_logo0.png"
        );
        assert_eq!(
            endpoints.airport_details("JFK"),
            "https://www.flightradar24.com/airports/traffic-stats/?airport=JFK"
        );
        assert_eq!(
            endpoints.flight_details("2f3a1b"),
            "https://data-live.flightradar24.com/clickhandler/?flight=2f3a1b"
        );
        assert_eq!(
            endpoints.flights_feed(),
            "https://data-cloud.flightradar24.com/zones/fcgi/feed.js"
        );
    }

    #[test]
    fn test_with_base_trims_slash() {
        let endpoints = Endpoints::with_base("http://127.0.0.1:8080/");
        assert_eq!(endpoints.zones(), "http://127.0.0.1:8080/js/zones.js.php");
        assert_eq!(
            endpoints.country_flag("united-states"),
            "http://127.0.0.1:8080/static/images/data/flags-small/united-states.gif"
        );
    }
}
