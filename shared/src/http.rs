//! HTTP helpers for the ingestion Lambda.
//!
//! Success bodies can only be built from a [`ResultsWrapper`], so a bare response
//! record never leaves the API boundary.

use lambda_http::{Body, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, warn};
use validator::Validate;

use crate::error::ValidationError;
use crate::models::{ErrorResponse, ResultsWrapper};

/// Create a JSON response with the given status code and enveloped results.
pub fn json_response<T: Serialize>(
    status: u16,
    data: &ResultsWrapper<T>,
) -> Result<Response<Body>, lambda_http::Error> {
    build(status, serde_json::to_string(data)?)
}

/// Create an error response with the given status code and message.
pub fn error_response(
    status: u16,
    message: impl Into<String>,
) -> Result<Response<Body>, lambda_http::Error> {
    build(status, serde_json::to_string(&ErrorResponse::new(message))?)
}

/// Turn the outcome of an API operation into the HTTP response.
///
/// Successes use `status`; failures use the error's own status code and are logged.
pub fn outcome_response<T: Serialize>(
    status: u16,
    outcome: crate::Result<ResultsWrapper<T>>,
) -> Result<Response<Body>, lambda_http::Error> {
    match outcome {
        Ok(wrapped) => json_response(status, &wrapped),
        Err(e) => {
            let status = e.status_code();
            if status >= 500 {
                error!("Request failed: {}", e);
            } else {
                warn!("Request rejected: {}", e);
            }
            error_response(status, e.to_string())
        }
    }
}

fn build(status: u16, body: String) -> Result<Response<Body>, lambda_http::Error> {
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))?)
}

/// Decode a JSON request body and apply its field rules.
pub fn decode_body<T: DeserializeOwned + Validate>(body: &[u8]) -> Result<T, ValidationError> {
    if body.is_empty() {
        return Err(ValidationError::Request("missing request body".to_string()));
    }
    let parsed: T = serde_json::from_slice(body)
        .map_err(|e| ValidationError::Request(format!("invalid request body: {}", e)))?;
    parsed.validate()?;
    Ok(parsed)
}

/// Parse and validate the request body, returning a 400 response on failure.
///
/// Returns `Ok(Ok(T))` on success, `Ok(Err(Response))` when the body is rejected,
/// or `Err(lambda_http::Error)` if the rejection itself cannot be rendered.
pub fn parse_json_body<T: DeserializeOwned + Validate>(
    body: &Body,
) -> Result<Result<T, Response<Body>>, lambda_http::Error> {
    match decode_body(body.as_ref()) {
        Ok(parsed) => Ok(Ok(parsed)),
        Err(e) => Ok(Err(error_response(400, e.to_string())?)),
    }
}

/// Macro to parse request body, returning early with 400 on parse error.
///
/// Usage:
/// ```ignore
/// let request: MyRequest = parse_body!(event.body());
/// ```
#[macro_export]
macro_rules! parse_body {
    ($body:expr) => {
        match shared::http::parse_json_body($body)? {
            Ok(parsed) => parsed,
            Err(response) => return Ok(response),
        }
    };
}
