//! Credential configuration for the completion backends

use log::debug;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_ENDPOINT: &str = "OPENAI_ENDPOINT";
pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
pub const OPENAI_API_VERSION: &str = "OPENAI_API_VERSION";
pub const OPENAI_API_BASE: &str = "OPENAI_API_BASE";
pub const AZURE_COGNITIVE_SEARCH_ENDPOINT: &str
  = "AZURE_COGNITIVE_SEARCH_ENDPOINT";
pub const AZURE_COGNITIVE_SEARCH_KEY: &str
  = "AZURE_COGNITIVE_SEARCH_KEY";
pub const AZURE_COGNITIVE_SEARCH_INDEX: &str
  = "AZURE_COGNITIVE_SEARCH_INDEX";

pub const DEFAULT_OPENAI_API_BASE: &str
  = "https://api.openai.com/v1";
pub const DEFAULT_API_VERSION: &str = "2023-08-01-preview";

/// Every credential the relay knows about. Loaded once,
/// never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credentials
{   pub api_key: Option<String>
  , pub endpoint: Option<String>
  , pub model: Option<String>
  , pub api_version: Option<String>
  , /// Base URL of the standard provider (for proxies and tests)
    pub api_base: Option<String>
  , pub search_endpoint: Option<String>
  , pub search_key: Option<String>
  , pub search_index: Option<String>
}

/// Resolved settings for the standard provider
#[derive(Debug, Clone, PartialEq)]
pub struct OpenAiSettings
{   pub api_key: String
  , pub api_base: String
}

/// Resolved settings for the managed provider
#[derive(Debug, Clone, PartialEq)]
pub struct AzureSettings
{   pub api_key: String
  , pub endpoint: String
  , pub deployment: String
  , pub api_version: String
}

/// Resolved settings for the retrieval index
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings
{   pub endpoint: String
  , pub key: String
  , pub index_name: String
}

/// Which credential groups are complete
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CredentialPresence
{   pub managed: bool
  , pub retrieval: bool
}

impl Credentials
{   /// Load credentials from the process environment
    pub fn from_env() -> Self
    {   Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load credentials through an arbitrary lookup.
    /// Empty values count as absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where F: Fn(&str) -> Option<String>
    {   let get = |name: &str| {
          lookup(name).filter(|v| !v.is_empty())
        };
        let credentials = Credentials
        {   api_key: get(OPENAI_API_KEY)
          , endpoint: get(OPENAI_ENDPOINT)
          , model: get(OPENAI_MODEL)
          , api_version: get(OPENAI_API_VERSION)
          , api_base: get(OPENAI_API_BASE)
          , search_endpoint: get(AZURE_COGNITIVE_SEARCH_ENDPOINT)
          , search_key: get(AZURE_COGNITIVE_SEARCH_KEY)
          , search_index: get(AZURE_COGNITIVE_SEARCH_INDEX)
        };
        debug!("Loaded credentials: {:?}", credentials.presence());
        credentials
    }

    pub fn presence(&self) -> CredentialPresence
    {   CredentialPresence
        {   managed: self.api_key.is_some()
              && self.endpoint.is_some()
              && self.model.is_some()
          , retrieval: self.search_endpoint.is_some()
              && self.search_key.is_some()
              && self.search_index.is_some()
        }
    }

    pub fn openai(&self)
      -> Result<OpenAiSettings, crate::error::Error>
    {   Ok(OpenAiSettings
        {   api_key: require(&self.api_key, OPENAI_API_KEY)?
          , api_base: self.api_base.clone()
              .unwrap_or_else(|| DEFAULT_OPENAI_API_BASE.to_string())
              .trim_end_matches('/')
              .to_string()
        })
    }

    pub fn azure(&self)
      -> Result<AzureSettings, crate::error::Error>
    {   Ok(AzureSettings
        {   api_key: require(&self.api_key, OPENAI_API_KEY)?
          , endpoint: require(&self.endpoint, OPENAI_ENDPOINT)?
              .trim_end_matches('/')
              .to_string()
          , deployment: require(&self.model, OPENAI_MODEL)?
          , api_version: self.api_version.clone()
              .unwrap_or_else(|| DEFAULT_API_VERSION.to_string())
        })
    }

    pub fn search(&self)
      -> Result<SearchSettings, crate::error::Error>
    {   Ok(SearchSettings
        {   endpoint: require(
              &self.search_endpoint,
              AZURE_COGNITIVE_SEARCH_ENDPOINT
            )?
          , key: require(&self.search_key, AZURE_COGNITIVE_SEARCH_KEY)?
          , index_name: require(
              &self.search_index,
              AZURE_COGNITIVE_SEARCH_INDEX
            )?
        })
    }
}

fn require(value: &Option<String>, name: &str)
  -> Result<String, crate::error::Error>
{   value.clone().ok_or_else(|| {
      crate::error::Error::MissingCredential(name.to_string())
    })
}
