//! In-process mock of the upstream endpoints.
#![allow(dead_code)]

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use flightradar24::{Endpoints, FlightRadarApi, HttpConfig};
use image::{ImageFormat, Rgba, RgbaImage};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

pub const KNOWN_FLIGHT: &str = "31a5c3e2";

const FEED: &str = include_str!("../fixtures/feed.json");
const ZONES: &str = include_str!("../fixtures/zones.json");
const FLIGHT_DETAILS: &str = include_str!("../fixtures/flight_details.json");

#[derive(Clone, Default)]
pub struct UpstreamState {
    pub feed_queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
    pub detail_hits: Arc<AtomicUsize>,
    pub image_hits: Arc<Mutex<Vec<String>>>,
}

pub struct MockUpstream {
    pub base_url: String,
    pub state: UpstreamState,
}

impl MockUpstream {
    pub fn api(&self) -> FlightRadarApi {
        FlightRadarApi::with_config(&HttpConfig::default(), Endpoints::with_base(&self.base_url))
            .expect("client builds")
    }

    pub fn feed_queries(&self) -> Vec<HashMap<String, String>> {
        self.state.feed_queries.lock().unwrap().clone()
    }

    pub fn detail_hits(&self) -> usize {
        self.state.detail_hits.load(Ordering::SeqCst)
    }

    pub fn image_hits(&self) -> Vec<String> {
        self.state.image_hits.lock().unwrap().clone()
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub async fn spawn() -> MockUpstream {
    init_tracing();

    let state = UpstreamState::default();
    let app = Router::new()
        .route("/zones/fcgi/feed.js", get(feed))
        .route("/clickhandler/", get(flight_details))
        .route("/airports/traffic-stats/", get(airport_details))
        .route("/_json/airports.php", get(airports))
        .route("/_json/airlines.php", get(airlines))
        .route("/js/zones.js.php", get(zones))
        .route("/assets/airlines/logotypes/:file", get(cdn_logo))
        .route("/static/images/data/operators/:file", get(operator_logo))
        .route("/static/images/data/flags-small/:file", get(flag))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock upstream");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service())
            .await
            .expect("mock upstream");
    });

    MockUpstream {
        base_url: format!("http://{}", addr),
        state,
    }
}

pub fn encode(format: ImageFormat) -> Vec<u8> {
    let img = RgbaImage::from_pixel(4, 3, Rgba([0, 51, 153, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, format).expect("encode image");
    out.into_inner()
}

fn raw_json(body: &'static str) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

async fn feed(
    State(state): State<UpstreamState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.feed_queries.lock().unwrap().push(params);
    raw_json(FEED)
}

async fn flight_details(
    State(state): State<UpstreamState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.detail_hits.fetch_add(1, Ordering::SeqCst);
    match params.get("flight").map(String::as_str) {
        Some(KNOWN_FLIGHT) => raw_json(FLIGHT_DETAILS),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn airport_details(
    State(state): State<UpstreamState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.detail_hits.fetch_add(1, Ordering::SeqCst);
    match params.get("airport").map(String::as_str) {
        Some("DUB") => Json(json!({
            "details": {
                "timezone": {
                    "name": "Europe/Dublin",
                    "offset": 0,
                    "offsetHours": "0:00",
                    "abbr": "GMT",
                    "abbrName": "Greenwich Mean Time",
                    "isDst": false
                },
                "visible": true,
                "website": "https://www.dublinairport.com/"
            },
            "stats": {"arrivals": {"total": 412}}
        }))
        .into_response(),
        Some("XXX") => Json(json!({"stats": {}})).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn airports() -> Json<Value> {
    Json(json!({
        "version": 1700000000,
        "rows": [
            {"name": "Dublin Airport", "iata": "DUB", "icao": "EIDW", "lat": 53.421333,
             "lon": -6.270075, "country": "Ireland", "alt": 242},
            {"name": "London Heathrow Airport", "iata": "LHR", "icao": "EGLL", "lat": 51.4706,
             "lon": -0.461941, "country": "United Kingdom", "alt": 83}
        ]
    }))
}

async fn airlines() -> Json<Value> {
    Json(json!({
        "version": 1700000000,
        "rows": [
            {"Name": "Aer Lingus", "Code": "EI", "ICAO": "EIN"},
            {"Name": "Ryanair", "Code": "FR", "ICAO": "RYR"},
            {"Name": "Southwest Airlines", "Code": "WN", "ICAO": "SWA"}
        ]
    }))
}

async fn zones() -> Response {
    raw_json(ZONES)
}

async fn cdn_logo(State(state): State<UpstreamState>, Path(file): Path<String>) -> Response {
    state.image_hits.lock().unwrap().push(format!("cdn/{}", file));
    match file.as_str() {
        "WN_SWA.png" => image_response("image/png", encode(ImageFormat::Png)),
        "EI_EIN.png" => image_response("image/png", b"<html>moved</html>".to_vec()),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn operator_logo(State(state): State<UpstreamState>, Path(file): Path<String>) -> Response {
    state.image_hits.lock().unwrap().push(format!("operators/{}", file));
    match file.as_str() {
        "EIN_logo0.png" => image_response("image/png", encode(ImageFormat::Png)),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn flag(State(state): State<UpstreamState>, Path(file): Path<String>) -> Response {
    state.image_hits.lock().unwrap().push(format!("flags/{}", file));
    match file.as_str() {
        "united-states.gif" => image_response("image/gif", encode(ImageFormat::Gif)),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

fn image_response(content_type: &'static str, body: Vec<u8>) -> Response {
    ([(header::CONTENT_TYPE, content_type)], body).into_response()
}
