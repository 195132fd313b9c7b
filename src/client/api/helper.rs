use crate::{client::model::error::ApiError, model::api::ErrorDto};
use dioxus_logger::tracing;
use reqwasm::http::{Request, RequestCredentials, Response};
use serde::de::DeserializeOwned;

/// Decodes a JSON success body, or maps an error response to `ApiError`.
///
/// Error bodies are expected as `{ "error": "..." }`; anything else falls back to a
/// generic message carrying the status.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response.json::<T>().await.map_err(|e| ApiError {
            status: 500,
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        let message = match response.json::<ErrorDto>().await {
            Ok(error_dto) => error_dto.error,
            Err(_) => format!("Request failed with status {}", status),
        };

        tracing::error!("API request failed ({}): {}", status, message);
        Err(ApiError { status, message })
    }
}

/// Create a GET request with credentials
pub fn get(url: &str) -> Request {
    Request::get(url).credentials(RequestCredentials::Include)
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })
}
