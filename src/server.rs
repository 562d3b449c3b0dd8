//! HTTP boundary: one POST endpoint in front of the completion service

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Form, Router};
use log::{debug, error, info};

use crate::client::CompletionService;
use crate::request::PromptRequest;

pub const COMPLETION_ROUTE: &str = "/api/httpTriggerOpenAI";

pub fn router(service: Arc<CompletionService>) -> Router
{   Router::new()
      .route(COMPLETION_ROUTE, post(handle_completion))
      .with_state(service)
}

/// Serve the router until the listener fails
pub async fn serve(
  listener: tokio::net::TcpListener
, service: Arc<CompletionService>
) -> std::io::Result<()>
{   if let Ok(addr) = listener.local_addr()
    {   info!("Listening on {} (POST {})", addr, COMPLETION_ROUTE);
    }
    axum::serve(listener, router(service)).await
}

async fn handle_completion(
  State(service): State<Arc<CompletionService>>
, request: Request
) -> Response
{   let fields = match read_form(request).await
    {   Ok(fields) => fields
      , Err(rejection) => return rejection
    };
    let prompt = PromptRequest::from_form(&fields);
    debug!(
      "Prompt request: system={:?} user={:?} temperature={} retrieval={}",
      prompt.system_prompt,
      prompt.user_prompt,
      prompt.temperature,
      prompt.use_retrieval
    );

    match service.complete(&prompt).await
    {   Ok(content) => content.into_response()
      , Err(e) => {
          error!("{}", e);
          (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// Collect form fields from either a urlencoded or a multipart body.
/// The first value wins when a name repeats.
async fn read_form(request: Request)
  -> Result<HashMap<String, String>, Response>
{   let is_multipart = request.headers()
      .get(header::CONTENT_TYPE)
      .and_then(|v| v.to_str().ok())
      .map(|v| v.starts_with("multipart/form-data"))
      .unwrap_or(false);

    let mut fields = HashMap::new();
    if !is_multipart
    {   let Form(pairs) = Form::<Vec<(String, String)>>
          ::from_request(request, &())
          .await
          .map_err(IntoResponse::into_response)?;
        for (name, value) in pairs
        {   fields.entry(name).or_insert(value);
        }
        return Ok(fields);
    }

    let bad_field = |e: axum::extract::multipart::MultipartError| {
      (StatusCode::BAD_REQUEST, e.to_string()).into_response()
    };
    let mut multipart = Multipart::from_request(request, &())
      .await
      .map_err(IntoResponse::into_response)?;
    while let Some(field) = multipart.next_field().await.map_err(bad_field)?
    {   let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await.map_err(bad_field)?;
        fields.entry(name).or_insert(value);
    }
    Ok(fields)
}
