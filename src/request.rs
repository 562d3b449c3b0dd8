//! Prompt request, outbound payload and provider response types

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use log::warn;

pub const MAX_TOKENS: u32 = 1024;

/// What the caller asked for. Built by the HTTP layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptRequest
{   pub system_prompt: String
  , pub user_prompt: String
  , pub temperature: f32
  , pub use_retrieval: bool
}

impl PromptRequest
{   pub fn new(
      system_prompt: impl Into<String>
    , user_prompt: impl Into<String>
    ) -> Self
    {   PromptRequest
        {   system_prompt: system_prompt.into()
          , user_prompt: user_prompt.into()
          , temperature: 0.0
          , use_retrieval: false
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self
    {   self.temperature = temperature;
        self
    }

    pub fn with_retrieval(mut self, use_retrieval: bool) -> Self
    {   self.use_retrieval = use_retrieval;
        self
    }

    /// Build from submitted form fields. Missing fields fall back
    /// to empty / 0 / false.
    pub fn from_form(fields: &HashMap<String, String>) -> Self
    {   let text = |name: &str| {
          fields.get(name).cloned().unwrap_or_default()
        };
        let temperature = match fields.get("temperature")
        {   Some(raw) if !raw.trim().is_empty() => {
              raw.trim().parse::<f32>().unwrap_or_else(|_| {
                warn!("Unparseable temperature {:?}, using 0", raw);
                0.0
              })
            }
          , _ => 0.0
        };
        let flag = |name: &str| {
          fields.get(name).map(|v| v == "true").unwrap_or(false)
        };
        PromptRequest
        {   system_prompt: text("systemPrompt")
          , user_prompt: text("userPrompt")
          , temperature
          , use_retrieval: flag("useRetrieval") || flag("useBYOD")
        }
    }
}

// ===== Outbound Types =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchParameters
{   pub endpoint: String
  , pub key: String
  , #[serde(rename = "indexName")]
    pub index_name: String
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSource
{   #[serde(rename = "type")]
    pub kind: String
  , pub parameters: SearchParameters
}

/// Request body shared by every backend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionPayload
{   #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>
  , pub max_tokens: u32
  , pub temperature: f32
  , pub messages: Vec<ChatMessage>
  , #[serde(rename = "dataSources", skip_serializing_if = "Vec::is_empty")]
    pub data_sources: Vec<DataSource>
}

impl CompletionPayload
{   pub fn new(request: &PromptRequest) -> Self
    {   CompletionPayload
        {   model: None
          , max_tokens: MAX_TOKENS
          , temperature: request.temperature
          , messages: vec![
              ChatMessage
              {   role: "system".to_string()
                , content: request.system_prompt.clone()
              }
            , ChatMessage
              {   role: "user".to_string()
                , content: request.user_prompt.clone()
              }
            ]
          , data_sources: vec![]
        }
    }

    pub fn with_model(mut self, model: &str) -> Self
    {   self.model = Some(model.to_string());
        self
    }

    pub fn with_search(
      mut self
    , search: &crate::config::SearchSettings
    ) -> Self
    {   self.data_sources.push(DataSource
        {   kind: "AzureCognitiveSearch".to_string()
          , parameters: SearchParameters
            {   endpoint: search.endpoint.clone()
              , key: search.key.clone()
              , index_name: search.index_name.clone()
            }
        });
        self
    }
}

// ===== Response Types =====
// Everything defaults so a well-formed but sparse body still decodes.

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where D: serde::Deserializer<'de>
    , T: Default + Deserialize<'de>
{   Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResponseMessage
{   #[serde(default)]
    pub role: Option<String>
  , #[serde(default)]
    pub content: Option<String>
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChatChoice
{   #[serde(default)]
    pub message: Option<ResponseMessage>
  , #[serde(default)]
    pub finish_reason: Option<String>
}

/// Chat completion body from the standard and managed providers
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChatCompletion
{   #[serde(default, deserialize_with = "null_as_default")]
    pub choices: Vec<ChatChoice>
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExtensionsChoice
{   #[serde(default, deserialize_with = "null_as_default")]
    pub messages: Vec<ResponseMessage>
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProviderError
{   #[serde(default)]
    pub code: Option<serde_json::Value>
  , #[serde(default)]
    pub message: Option<String>
}

/// Body from the retrieval (extensions) endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExtensionsCompletion
{   #[serde(default, deserialize_with = "null_as_default")]
    pub choices: Vec<ExtensionsChoice>
  , #[serde(default)]
    pub error: Option<ProviderError>
}

/// Raw provider answer, tagged by the backend that produced it
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderResponse
{   Standard(ChatCompletion)
  , Managed(ChatCompletion)
  , ManagedRetrieval(ExtensionsCompletion)
}
