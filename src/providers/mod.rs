//! Completion clients, one per backend

pub mod openai;
pub mod azure;

pub use openai::OpenAiClient;
pub use azure::{AzureClient, AzureSearchClient};

use log::{error, trace};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Send a prepared request and read the whole body as text
pub(crate) async fn send(
  request: reqwest::RequestBuilder
, provider: &str
) -> Result<(StatusCode, String), crate::error::Error>
{   let response = request
      .send()
      .await
      .map_err(|e| {
        error!("{} HTTP error: {}", provider, e);
        crate::error::Error::HttpError(e.to_string())
      })?;

    let status = response.status();
    trace!("{} response status: {}", provider, status);

    let body = response.text().await.map_err(|e| {
      error!("{} body read error: {}", provider, e);
      crate::error::Error::HttpError(e.to_string())
    })?;
    Ok((status, body))
}

/// Decode a successful body, turning anything else into an error
pub(crate) fn decode<T: DeserializeOwned>(
  status: StatusCode
, body: &str
, provider: &str
) -> Result<T, crate::error::Error>
{   if !status.is_success()
    {   error!("{} API error {}: {}", provider, status, body);
        return Err(crate::error::Error::ApiError
        {   status: status.as_u16()
          , body: body.to_string()
        });
    }

    serde_json::from_str(body).map_err(|e| {
      error!("{} parse error: {}", provider, e);
      crate::error::Error::ParseError(e.to_string())
    })
}
