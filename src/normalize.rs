//! Provider response normalization

use log::{debug, error};

use crate::request::{ChatCompletion, ExtensionsCompletion, ProviderResponse};

/// Reduce any provider response to the assistant's text.
/// Never fails; missing fields give an empty string.
pub fn normalize(response: &ProviderResponse) -> String
{   match response
    {   ProviderResponse::Standard(completion)
      | ProviderResponse::Managed(completion) => {
          chat_content(completion)
        }
      , ProviderResponse::ManagedRetrieval(completion) => {
          extensions_content(completion)
        }
    }
}

fn chat_content(completion: &ChatCompletion) -> String
{   let content = completion.choices.first()
      .and_then(|c| c.message.as_ref())
      .and_then(|m| m.content.as_deref())
      .map(|c| c.trim().to_string())
      .unwrap_or_default();
    debug!("Completion output: {}", content);
    content
}

fn extensions_content(completion: &ExtensionsCompletion) -> String
{   if let Some(err) = &completion.error
    {   error!("Retrieval completion error: {:?}", err);
        return err.message.clone().unwrap_or_default();
    }

    let message = |index: usize| {
      completion.choices.first()
        .and_then(|c| c.messages.get(index))
        .and_then(|m| m.content.as_deref())
        .map(|c| c.trim().to_string())
        .unwrap_or_default()
    };

    debug!("Retrieval citations: {}", message(0));
    let content = message(1);
    debug!("Retrieval output: {}", content);
    content
}
