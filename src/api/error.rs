//! Mapping of ticket service responses to crate errors.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{DeskError, Result};

/// Pass 2xx responses through; anything else becomes `DeskError::Api`
/// carrying the status code and response body.
pub async fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body
    };

    tracing::debug!(status = status.as_u16(), %message, "ticket service returned an error");
    Err(DeskError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Decode a JSON body, reporting schema mismatches as `DeskError::Decode`
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| DeskError::Decode(e.to_string()))
}

/// Treat a 404 for an id-addressed endpoint as a missing ticket
pub(crate) fn not_found_as_missing(err: DeskError, id: &str) -> DeskError {
    match err {
        DeskError::Api { status, .. } if status == StatusCode::NOT_FOUND.as_u16() => {
            DeskError::TicketNotFound(id.to_string())
        }
        other => other,
    }
}
