//! Remote lookup: city name → location id → current weather
//!
//! Two sequential calls against an OpenWeatherMap-compatible API. Each call
//! makes exactly one request; there are no retries and no timeouts.
//!
//! - [`GeocodeClient`] resolves free text to a [`LocationId`]
//! - [`WeatherClient`] fetches current conditions for an id
//! - [`WeatherService`] chains the two into one `Result`

mod geocode;
mod weather;

use std::fmt;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

pub use geocode::GeocodeClient;
pub use weather::WeatherClient;

use crate::state::WeatherReport;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const USER_AGENT: &str = concat!("skycast/", env!("CARGO_PKG_VERSION"));

/// Any failure in either remote call.
///
/// The UI does not distinguish these; they exist for logs and tests.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("provider returned {0}")]
    Status(StatusCode),
    #[error("no location matches {0:?}")]
    NotFound(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Opaque key produced by geocoding and consumed by the weather call
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LocationId(pub u64);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unit system requested from the provider
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    /// Kelvin
    Standard,
}

impl Units {
    pub fn as_query(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }
}

/// Where and how to reach the provider
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    /// Scheme and host, without a trailing slash
    pub base_url: String,
    pub api_key: String,
    pub units: Units,
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            units: Units::default(),
        }
    }

    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// The two-step pipeline behind every submission
#[derive(Clone, Debug)]
pub struct WeatherService {
    geocode: GeocodeClient,
    weather: WeatherClient,
}

impl WeatherService {
    pub fn new(config: ProviderConfig) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::from_parts(
            GeocodeClient::new(http.clone(), config.clone()),
            WeatherClient::new(http, config),
        ))
    }

    pub fn from_parts(geocode: GeocodeClient, weather: WeatherClient) -> Self {
        Self { geocode, weather }
    }

    /// Resolve `city`, then fetch its weather. The weather call is only made
    /// once geocoding has produced an id.
    pub async fn lookup(&self, city: &str) -> Result<WeatherReport, LookupError> {
        let id = self.geocode.fetch_location_id(city).await?;
        tracing::debug!(city, %id, "Resolved location");
        self.weather.fetch_weather(id).await
    }
}

/// Send a GET and decode the JSON body, mapping failures onto `LookupError`.
async fn get_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, LookupError> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::Status(status));
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| LookupError::Malformed(e.to_string()))
}
