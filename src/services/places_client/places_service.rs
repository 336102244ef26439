use std::{env, time::Duration};

use serde_json::Value;
use tracing::{debug, error};

use super::types::{
    place_params::PlaceParams,
    places_search_input::{NearbySearchInput, PlaceDetailsInput, TextSearchInput},
    places_service_error::PlacesServiceError,
};

pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";
pub const HOST_ENV: &str = "GOOGLE_MAPS_HOST";
pub const DEFAULT_HOST: &str = "https://maps.googleapis.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Statuses Google reports for a request that succeeded.
const SUCCESS_STATUSES: [&str; 2] = ["OK", "ZERO_RESULTS"];

#[derive(Clone, Debug)]
pub struct PlacesServiceConfig {
    pub api_key: Option<String>,
    pub host: String,
    /// `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for PlacesServiceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            host: DEFAULT_HOST.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl PlacesServiceConfig {
    /// Reads `GOOGLE_MAPS_API_KEY` and `GOOGLE_MAPS_HOST` once. A missing key
    /// is not an error here; it surfaces when an operation needs one.
    pub fn from_env() -> Self {
        let non_empty = |name: &str| env::var(name).ok().filter(|v| !v.is_empty());

        Self {
            api_key: non_empty(API_KEY_ENV),
            host: non_empty(HOST_ENV)
                .map(|h| h.strip_suffix('/').map(str::to_string).unwrap_or(h))
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Endpoint {
    TextSearch,
    NearbySearch,
    Details,
}

impl Endpoint {
    fn path(self) -> &'static str {
        match self {
            Endpoint::TextSearch => "/maps/api/place/textsearch/json",
            Endpoint::NearbySearch => "/maps/api/place/nearbysearch/json",
            Endpoint::Details => "/maps/api/place/details/json",
        }
    }
}

/// The client is built before any request exists, so a failure here is a setup
/// problem rather than a transport one.
fn client_setup_error(e: reqwest::Error) -> PlacesServiceError {
    PlacesServiceError::Configuration(format!("Failed to build HTTP client: {}", e))
}

#[derive(Clone)]
pub struct PlacesService {
    config: PlacesServiceConfig,
    client: reqwest::Client,
}

impl PlacesService {
    pub fn new(config: PlacesServiceConfig) -> Result<Self, PlacesServiceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(client_setup_error)?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &PlacesServiceConfig {
        &self.config
    }

    pub async fn text_search(&self, input: TextSearchInput) -> Result<Value, PlacesServiceError> {
        let key = self.resolve_api_key(input.api_key.as_deref())?;
        self.get_json(Endpoint::TextSearch, input.to_params(key)).await
    }

    pub async fn nearby_search(
        &self,
        input: NearbySearchInput,
    ) -> Result<Value, PlacesServiceError> {
        let key = self.resolve_api_key(input.api_key.as_deref())?;
        self.get_json(Endpoint::NearbySearch, input.to_params(key)).await
    }

    pub async fn place_details(
        &self,
        input: PlaceDetailsInput,
    ) -> Result<Value, PlacesServiceError> {
        let key = self.resolve_api_key(input.api_key.as_deref())?;
        self.get_json(Endpoint::Details, input.to_params(key)).await
    }

    fn resolve_api_key<'a>(
        &'a self,
        explicit: Option<&'a str>,
    ) -> Result<&'a str, PlacesServiceError> {
        explicit
            .filter(|k| !k.is_empty())
            .or(self.config.api_key.as_deref().filter(|k| !k.is_empty()))
            .ok_or_else(|| {
                PlacesServiceError::Configuration(format!(
                    "Google Maps API key not found. Set {} or pass api_key",
                    API_KEY_ENV
                ))
            })
    }

    async fn get_json(
        &self,
        endpoint: Endpoint,
        params: PlaceParams,
    ) -> Result<Value, PlacesServiceError> {
        debug!("GET {}{}", self.config.host, endpoint.path());

        let url = format!(
            "{}{}?{}",
            self.config.host,
            endpoint.path(),
            params.to_query_string()
        );

        // Errors carry the URL, and with it the key; strip it before logging.
        let resp = self.client.get(&url).send().await.map_err(|e| {
            let e = e.without_url();
            error!("Request to {:?} failed: {}", endpoint, e);
            PlacesServiceError::Transport(format!("Failed to send request: {}", e))
        })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| {
            PlacesServiceError::Transport(format!(
                "Failed to get response body: {}",
                e.without_url()
            ))
        })?;

        let body = match serde_json::from_str::<Value>(&text) {
            Ok(body) => body,
            Err(_) => {
                return Err(PlacesServiceError::Upstream {
                    status: status.as_u16(),
                    body: Value::String(text),
                })
            }
        };

        let reported = body.get("status").and_then(Value::as_str);
        let reported_failure = reported.is_some_and(|s| !SUCCESS_STATUSES.contains(&s));

        if !status.is_success() || reported_failure {
            error!(
                "{:?} returned HTTP {} with status {:?}",
                endpoint,
                status.as_u16(),
                reported
            );
            return Err(PlacesServiceError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
