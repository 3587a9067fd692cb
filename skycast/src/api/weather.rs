use serde::Deserialize;

use super::{LocationId, LookupError, ProviderConfig, get_json};
use crate::state::WeatherReport;

const WEATHER_PATH: &str = "/data/2.5/weather";

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    #[serde(default)]
    weather: Vec<Condition>,
    main: MainReadings,
}

#[derive(Debug, Deserialize)]
struct Condition {
    main: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
}

/// Fetches current conditions for a resolved location id
#[derive(Clone, Debug)]
pub struct WeatherClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl WeatherClient {
    pub fn new(http: reqwest::Client, config: ProviderConfig) -> Self {
        Self { http, config }
    }

    /// Temperature is returned exactly as the provider sent it.
    pub async fn fetch_weather(&self, id: LocationId) -> Result<WeatherReport, LookupError> {
        let id = id.to_string();
        let request = self.http.get(self.config.endpoint(WEATHER_PATH)).query(&[
            ("id", id.as_str()),
            ("units", self.config.units.as_query()),
            ("appid", self.config.api_key.as_str()),
        ]);

        let data: CurrentResponse = get_json(request).await?;

        let condition = data
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::Malformed("no weather condition in response".into()))?;

        Ok(WeatherReport {
            location: data.name,
            weather: condition.main,
            temperature: data.main.temp,
        })
    }
}
