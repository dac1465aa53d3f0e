//! Shared library for the places proxy Lambda functions.
//!
//! This crate provides configuration, error types, the Maps API result schemas
//! and the outbound Maps API client used by the Lambda functions.

pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod places;
pub mod secrets;

pub use config::{ApiKeySource, Config};
pub use error::{Error, Result};
pub use models::{FindPlaceResponse, GeocodeResponse, NearbySearchResponse};
pub use places::{Endpoint, MapsClient, QueryParams};
pub use secrets::{get_secret, resolve_api_key};
