//! HTTP plumbing shared by the API adapters

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use verdict_application::{Deadline, ProviderError};
use verdict_domain::preview;

/// Longest error body kept in a [`ProviderError::Status`]
const MAX_ERROR_BODY: usize = 500;

/// Send `request` bounded by the time left on `deadline` and decode a JSON body
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    deadline: &Deadline,
) -> Result<T, ProviderError> {
    if deadline.is_expired() {
        return Err(ProviderError::DeadlineExceeded);
    }

    let response = request
        .timeout(deadline.remaining())
        .send()
        .await
        .map_err(map_transport_error)?;

    let response = check_status(response).await?;

    response
        .json::<T>()
        .await
        .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
}

async fn check_status(response: Response) -> Result<Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ProviderError::Status {
        status: status.as_u16(),
        body: preview(&body, MAX_ERROR_BODY),
    })
}

fn map_transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::DeadlineExceeded
    } else {
        ProviderError::Transport(e.to_string())
    }
}

/// Reject answers that are empty after trimming
pub(crate) fn non_empty(answer: String) -> Result<String, ProviderError> {
    if answer.trim().is_empty() {
        Err(ProviderError::EmptyAnswer)
    } else {
        Ok(answer)
    }
}
