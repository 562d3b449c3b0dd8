use log::{debug, warn};

use crate::config::{CredentialPresence, Credentials};
use crate::providers::{AzureClient, AzureSearchClient, OpenAiClient};
use crate::request::{PromptRequest, ProviderResponse};
use crate::Backend;

/// Pick the backend for a request. First matching rule wins:
/// managed + retrieval, then managed, then standard.
pub fn select_backend(
  presence: CredentialPresence
, use_retrieval: bool
) -> Backend
{   if presence.managed && use_retrieval && presence.retrieval
    {   Backend::ManagedRetrieval
    } else if presence.managed
    {   Backend::Managed
    } else
    {   Backend::Standard
    }
}

/// True when retrieval was asked for but the selector fell back to
/// the plain managed deployment
pub fn retrieval_downgraded(backend: Backend, use_retrieval: bool) -> bool
{   use_retrieval && backend == Backend::Managed
}

/// Main relay interface: owns the credentials and the HTTP pool
pub struct CompletionService
{   credentials: Credentials
  , http_client: reqwest::Client
}

impl CompletionService
{   pub fn new(credentials: Credentials) -> Self
    {   debug!("Creating CompletionService");
        CompletionService
        {   credentials
          , http_client: reqwest::Client::new()
        }
    }

    pub fn credentials(&self) -> &Credentials
    {   &self.credentials
    }

    pub fn backend_for(&self, request: &PromptRequest) -> Backend
    {   let backend = select_backend(
          self.credentials.presence(),
          request.use_retrieval
        );
        if retrieval_downgraded(backend, request.use_retrieval)
        {   warn!(
              "Retrieval requested but search credentials are \
               incomplete, using {:?}",
              backend
            );
        }
        backend
    }

    /// Issue one call to the selected backend and return its text
    pub async fn complete(
      &self
    , request: &PromptRequest
    ) -> Result<String, crate::error::Error>
    {   let backend = self.backend_for(request);
        debug!("Completing with backend {:?}", backend);

        let response = match backend
        {   Backend::Standard => {
              let client = OpenAiClient::new(
                self.credentials.openai()?,
                self.http_client.clone()
              );
              ProviderResponse::Standard(client.complete(request).await?)
            }
          , Backend::Managed => {
              let client = AzureClient::new(
                self.credentials.azure()?,
                self.http_client.clone()
              );
              ProviderResponse::Managed(client.complete(request).await?)
            }
          , Backend::ManagedRetrieval => {
              let client = AzureSearchClient::new(
                self.credentials.azure()?,
                self.credentials.search()?,
                self.http_client.clone()
              );
              ProviderResponse::ManagedRetrieval(
                client.complete(request).await?
              )
            }
        };

        let content = crate::normalize::normalize(&response);
        if backend.extracts_json()
        {   let parsed = crate::extract::extract_json_if_present(&content);
            debug!("After parse: {}", parsed);
            Ok(parsed)
        } else
        {   Ok(content)
        }
    }
}

/// One-shot helper for callers without a long-lived service
pub async fn select_and_complete(
  request: &PromptRequest
, credentials: Credentials
) -> Result<String, crate::error::Error>
{   CompletionService::new(credentials).complete(request).await
}
