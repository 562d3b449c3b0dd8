/// Custom error type for relay operations
/// Implements Clone so tests can compare results directly
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error
{   /// A credential required by the selected backend is absent
    #[error("Missing {0} in environment variables.")]
    MissingCredential(String)
  , /// Transport failure before a response was received
    #[error("HTTP error: {0}")]
    HttpError(String)
  , /// Provider answered with a non-success status
    #[error("API error ({status}): {body}")]
    ApiError
    {   status: u16
      , body: String
    }
  , /// Provider body was not the JSON we expected
    #[error("Parse error: {0}")]
    ParseError(String)
}

impl Error
{   /// True for failures that came from talking to a provider,
    /// false for local configuration problems.
    pub fn is_upstream(&self) -> bool
    {   !matches!(self, Error::MissingCredential(_))
    }
}
