//! Client for the Google Maps geocoding and places endpoints.
//!
//! Every lookup has the same shape: GET the endpoint with the caller's
//! query parameters, require a 200, decode the body into the endpoint's
//! schema. [`MapsClient::query`] implements that once; the named methods
//! only pick the schema.

use std::collections::BTreeMap;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::models::{FindPlaceResponse, GeocodeResponse, NearbySearchResponse};
use crate::{Error, Result};

/// Outbound query parameters. Inserting an existing name replaces its value.
pub type QueryParams = BTreeMap<String, String>;

/// A Maps API endpoint, identified by the schema it answers with.
pub trait Endpoint: DeserializeOwned {
    /// Path relative to the API base URL.
    const PATH: &'static str;
}

impl Endpoint for GeocodeResponse {
    const PATH: &'static str = "geocode/json";
}

impl Endpoint for FindPlaceResponse {
    const PATH: &'static str = "place/findplacefromtext/json";
}

impl Endpoint for NearbySearchResponse {
    const PATH: &'static str = "place/nearbysearch/json";
}

/// Maps API client over a shared HTTP transport.
///
/// The transport is created once per process and reused for every call;
/// cloning the client shares its connection pool.
#[derive(Debug, Clone)]
pub struct MapsClient {
    http: Client,
    base_url: Url,
}

impl MapsClient {
    /// Create a client over an existing transport and base URL.
    pub fn with_base_url(http: Client, base_url: &str) -> Result<Self> {
        // Exactly one trailing slash, so joining keeps the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| Error::Config(format!("invalid base URL '{}': {}", base_url, e)))?;

        Ok(Self { http, base_url })
    }

    /// Full URL of an endpoint.
    pub fn endpoint_url<T: Endpoint>(&self) -> Result<Url> {
        self.base_url
            .join(T::PATH)
            .map_err(|e| Error::Config(format!("invalid endpoint path '{}': {}", T::PATH, e)))
    }

    /// Run one lookup against the endpoint answering with `T`.
    ///
    /// The caller supplies every parameter the endpoint needs, `key` included.
    pub async fn query<T: Endpoint>(&self, params: &QueryParams) -> Result<T> {
        let url = self.endpoint_url::<T>()?;

        let request = self
            .http
            .get(url)
            .query(params)
            .build()
            .map_err(Error::Request)?;

        debug!(endpoint = T::PATH, params = params.len(), "Querying Maps API");

        let response = self.http.execute(request).await.map_err(Error::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(endpoint = T::PATH, status = status.as_u16(), "Maps API status not OK");
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(Error::BodyRead)?;

        serde_json::from_slice(&body).map_err(Error::Decode)
    }

    /// Geocode an address. Requires `address` and `key`.
    pub async fn geocode(&self, params: &QueryParams) -> Result<GeocodeResponse> {
        self.query(params).await
    }

    /// Find a place from a text query. Requires `input`, `inputtype` and `key`.
    pub async fn find_place(&self, params: &QueryParams) -> Result<FindPlaceResponse> {
        self.query(params).await
    }

    /// Search places around a point.
    ///
    /// Requires `location`, `radius` and `key`. Nearby search always returns
    /// every data field of each place; use [`MapsClient::find_place`] when only a
    /// few fields are needed.
    pub async fn nearby_search(&self, params: &QueryParams) -> Result<NearbySearchResponse> {
        self.query(params).await
    }
}
