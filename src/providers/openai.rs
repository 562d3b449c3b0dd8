use log::{debug, trace};

use crate::config::OpenAiSettings;
use crate::request::{ChatCompletion, CompletionPayload, PromptRequest};

/// The standard provider always runs this model
pub const STANDARD_MODEL: &str = "gpt-3.5-turbo";

/// Client for the standard provider's chat completion endpoint
pub struct OpenAiClient
{   settings: OpenAiSettings
  , http_client: reqwest::Client
}

impl OpenAiClient
{   pub fn new(
      settings: OpenAiSettings
    , http_client: reqwest::Client
    ) -> Self
    {   OpenAiClient
        {   settings
          , http_client
        }
    }

    pub fn url(&self) -> String
    {   format!("{}/chat/completions", self.settings.api_base)
    }

    pub async fn complete(
      &self
    , request: &PromptRequest
    ) -> Result<ChatCompletion, crate::error::Error>
    {   let payload = CompletionPayload::new(request)
          .with_model(STANDARD_MODEL);
        let url = self.url();
        debug!("OpenAI completion via {}", url);
        trace!("OpenAI request: {:?}", payload);

        let (status, body) = super::send(
          self.http_client
            .post(&url)
            .header(
              "Authorization",
              format!("Bearer {}", self.settings.api_key)
            )
            .json(&payload),
          "OpenAI"
        ).await?;

        super::decode(status, &body, "OpenAI")
    }
}
