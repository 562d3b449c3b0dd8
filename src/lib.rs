pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod normalize;
pub mod extract;
pub mod client;
pub mod server;

pub use client::{
  retrieval_downgraded, select_and_complete, select_backend, CompletionService
};
pub use config::{CredentialPresence, Credentials};
pub use request::PromptRequest;

/*

prompt-relay: one HTTP endpoint in front of three chat completion
backends.

  form fields -> PromptRequest
              -> select_backend (credentials present + retrieval flag)
              -> OpenAiClient | AzureClient | AzureSearchClient
              -> normalize
              -> extract_json (standard and managed only)
              -> plain text

*/

/// Enum representing the upstream completion backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend
{   /// Public OpenAI API, fixed model
    Standard
  , /// Azure OpenAI deployment
    Managed
  , /// Azure OpenAI deployment grounded on a Cognitive Search index
    ManagedRetrieval
}

impl Backend
{   /// Whether the normalized text goes through JSON extraction
    pub fn extracts_json(&self) -> bool
    {   !matches!(self, Backend::ManagedRetrieval)
    }
}
