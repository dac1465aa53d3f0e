//! Nearby search Lambda - Proxies `GET /nearby` to the Maps nearby search API.
//!
//! Query parameters:
//! - `location` - `lat,lng` of the search centre (required)
//! - `radius` - search radius in meters (required)
//! - `name` - term matched against place names (optional)
//!
//! Success returns the upstream payload as JSON with status 200. Any failure
//! returns 400 with the body `Error`.

use lambda_http::{Body, Error, Request, RequestExt, Response};
use shared::http::{error_response, json_response};
use shared::{Config, MapsClient, QueryParams};
use std::sync::Arc;
use tracing::{error, info};

/// Application state, built once per cold start.
pub struct AppState {
    /// Maps client over the process-wide transport
    pub maps: MapsClient,
    /// Maps API key attached to every lookup
    pub api_key: String,
}

impl AppState {
    /// Build state from configuration, resolving the API key.
    pub async fn new(config: &Config) -> Result<Self, Error> {
        let api_key = shared::resolve_api_key(config).await?;
        let maps = MapsClient::with_base_url(reqwest::Client::new(), &config.base_url)?;

        Ok(Self { maps, api_key })
    }

    /// Build state from an already-constructed client and key.
    pub fn with_client(maps: MapsClient, api_key: impl Into<String>) -> Self {
        Self {
            maps,
            api_key: api_key.into(),
        }
    }
}

/// Inbound nearby search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NearbyQuery {
    pub location: Option<String>,
    pub radius: Option<String>,
    pub name: Option<String>,
}

impl NearbyQuery {
    /// Read the recognized keys from the request's query string.
    ///
    /// A repeated key resolves to its last value.
    pub fn from_request(event: &Request) -> Self {
        let params = event.query_string_parameters();
        let last = |key: &str| {
            params
                .all(key)
                .and_then(|values| values.last().map(|v| v.to_string()))
        };
        Self {
            location: last("location"),
            radius: last("radius"),
            name: last("name"),
        }
    }

    /// Build the outbound parameters for the nearby search endpoint.
    ///
    /// `location` and `radius` are forwarded as given (empty when absent);
    /// `name` is only added when non-empty.
    pub fn into_params(self, api_key: &str) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert("location".to_string(), self.location.unwrap_or_default());
        params.insert("radius".to_string(), self.radius.unwrap_or_default());
        params.insert("key".to_string(), api_key.to_string());

        if let Some(name) = self.name.filter(|n| !n.is_empty()) {
            params.insert("name".to_string(), name);
        }

        params
    }
}

/// Run one nearby search and shape the proxy response.
pub async fn search(state: &AppState, query: NearbyQuery) -> Result<Response<Body>, Error> {
    let params = query.into_params(&state.api_key);

    match state.maps.nearby_search(&params).await {
        Ok(results) => {
            info!(
                status = %results.status,
                results = results.results.len(),
                "Nearby search complete"
            );
            json_response(200, &results)
        }
        Err(e) => {
            error!(
                error = %e,
                upstream_status = e.upstream_status(),
                "Nearby search failed"
            );
            error_response(&e)
        }
    }
}

/// Lambda entry point for API Gateway proxy requests.
pub async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    let query = NearbyQuery::from_request(&event);
    search(&state, query).await
}
