use log::{debug, error, trace};

use crate::config::{AzureSettings, SearchSettings};
use crate::request::{
  ChatCompletion, CompletionPayload, ExtensionsCompletion, PromptRequest
};

fn deployment_url(settings: &AzureSettings, extensions: bool) -> String
{   format!(
      "{}/openai/deployments/{}/{}chat/completions?api-version={}",
      settings.endpoint,
      settings.deployment,
      if extensions { "extensions/" } else { "" },
      settings.api_version
    )
}

/// Client for a managed deployment's chat completion endpoint
pub struct AzureClient
{   settings: AzureSettings
  , http_client: reqwest::Client
}

impl AzureClient
{   pub fn new(
      settings: AzureSettings
    , http_client: reqwest::Client
    ) -> Self
    {   AzureClient
        {   settings
          , http_client
        }
    }

    pub fn url(&self) -> String
    {   deployment_url(&self.settings, false)
    }

    pub async fn complete(
      &self
    , request: &PromptRequest
    ) -> Result<ChatCompletion, crate::error::Error>
    {   let payload = CompletionPayload::new(request);
        let url = self.url();
        debug!("Azure OpenAI completion via {}", url);
        trace!("Azure OpenAI request: {:?}", payload);

        let (status, body) = super::send(
          self.http_client
            .post(&url)
            .header("api-key", &self.settings.api_key)
            .json(&payload),
          "Azure OpenAI"
        ).await?;

        super::decode(status, &body, "Azure OpenAI")
    }
}

/// Client for a managed deployment grounded on a search index
pub struct AzureSearchClient
{   settings: AzureSettings
  , search: SearchSettings
  , http_client: reqwest::Client
}

impl AzureSearchClient
{   pub fn new(
      settings: AzureSettings
    , search: SearchSettings
    , http_client: reqwest::Client
    ) -> Self
    {   AzureSearchClient
        {   settings
          , search
          , http_client
        }
    }

    pub fn url(&self) -> String
    {   deployment_url(&self.settings, true)
    }

    /// Same deployment without the extensions segment
    pub fn chat_url(&self) -> String
    {   deployment_url(&self.settings, false)
    }

    pub async fn complete(
      &self
    , request: &PromptRequest
    ) -> Result<ExtensionsCompletion, crate::error::Error>
    {   let payload = CompletionPayload::new(request)
          .with_search(&self.search);
        let url = self.url();
        debug!(
          "Azure OpenAI BYOD completion via {} (index {})",
          url, self.search.index_name
        );
        // dataSources carries the search key
        trace!("Azure OpenAI BYOD messages: {:?}", payload.messages);

        let (status, body) = super::send(
          self.http_client
            .post(&url)
            .header("api-key", &self.settings.api_key)
            .header("chatgpt_url", self.chat_url())
            .header("chatgpt_key", &self.settings.api_key)
            .json(&payload),
          "Azure OpenAI BYOD"
        ).await?;

        // Provider-reported errors come back as content, even on
        // a failing status
        if !status.is_success()
        {   if let Ok(reported)
              = serde_json::from_str::<ExtensionsCompletion>(&body)
            {   if reported.error.is_some()
                {   error!(
                      "Azure OpenAI BYOD error {}: {}",
                      status, body
                    );
                    return Ok(reported);
                }
            }
        }

        super::decode(status, &body, "Azure OpenAI BYOD")
    }
}
