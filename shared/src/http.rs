//! HTTP helpers for Lambda functions.

use lambda_http::{Body, Response};
use serde::Serialize;

use crate::Error;

/// Body sent to the caller for any failure.
pub const GENERIC_ERROR_BODY: &str = "Error";

/// Create a JSON response with the given status code and data.
pub fn json_response<T: Serialize>(status: u16, data: &T) -> Result<Response<Body>, lambda_http::Error> {
    let body = serde_json::to_string(data).map_err(Error::Serialization)?;
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))?)
}

/// Create a plain-text response with the given status code and body.
pub fn text_response(status: u16, body: impl Into<String>) -> Result<Response<Body>, lambda_http::Error> {
    Ok(Response::builder()
        .status(status)
        .header("content-type", "text/plain")
        .body(Body::from(body.into()))?)
}

/// Create the generic failure response for an error.
///
/// The caller only ever sees the error's status code and a fixed body.
pub fn error_response(error: &Error) -> Result<Response<Body>, lambda_http::Error> {
    text_response(error.status_code(), GENERIC_ERROR_BODY)
}
