use serde::Deserialize;

use super::{LocationId, LookupError, ProviderConfig, get_json};

const FIND_PATH: &str = "/data/2.5/find";

#[derive(Debug, Deserialize)]
struct FindResponse {
    #[serde(default)]
    list: Vec<FindResult>,
}

#[derive(Debug, Deserialize)]
struct FindResult {
    id: u64,
}

/// Resolves a free-text city name to the provider's location id
#[derive(Clone, Debug)]
pub struct GeocodeClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl GeocodeClient {
    pub fn new(http: reqwest::Client, config: ProviderConfig) -> Self {
        Self { http, config }
    }

    /// First match wins. An empty match list is `LookupError::NotFound`.
    pub async fn fetch_location_id(&self, city: &str) -> Result<LocationId, LookupError> {
        let request = self
            .http
            .get(self.config.endpoint(FIND_PATH))
            .query(&[("q", city), ("appid", self.config.api_key.as_str())]);

        let data: FindResponse = get_json(request).await?;

        data.list
            .into_iter()
            .next()
            .map(|r| LocationId(r.id))
            .ok_or_else(|| LookupError::NotFound(city.to_string()))
    }
}
