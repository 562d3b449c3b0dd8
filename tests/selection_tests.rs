use prompt_relay::{select_backend, Backend, CredentialPresence, Credentials};

fn some(present: bool, value: &str) -> Option<String>
{   if present { Some(value.to_string()) } else { None }
}

/// Credentials with each managed / search key toggled by a bit
fn credentials(managed_bits: u8, search_bits: u8) -> Credentials
{   Credentials
    {   api_key: some(managed_bits & 0b001 != 0, "key")
      , endpoint: some(managed_bits & 0b010 != 0, "https://example")
      , model: some(managed_bits & 0b100 != 0, "gpt-35")
      , search_endpoint: some(search_bits & 0b001 != 0, "https://search")
      , search_key: some(search_bits & 0b010 != 0, "search-key")
      , search_index: some(search_bits & 0b100 != 0, "docs")
      , ..Default::default()
    }
}

#[test]
fn test_incomplete_managed_keys_select_standard()
{   for managed_bits in 0..0b111
    {   for search_bits in 0..=0b111
        {   for use_retrieval in [false, true]
            {   let presence
                  = credentials(managed_bits, search_bits).presence();
                assert_eq!(
                  select_backend(presence, use_retrieval),
                  Backend::Standard,
                  "managed={:03b} search={:03b} retrieval={}",
                  managed_bits, search_bits, use_retrieval
                );
            }
        }
    }
}

#[test]
fn test_incomplete_search_keys_downgrade_to_managed()
{   for search_bits in 0..0b111
    {   let presence = credentials(0b111, search_bits).presence();
        assert_eq!(select_backend(presence, true), Backend::Managed);
    }
}

#[test]
fn test_full_keys_select_by_flag()
{   let presence = credentials(0b111, 0b111).presence();
    assert_eq!(
      select_backend(presence, true),
      Backend::ManagedRetrieval
    );
    assert_eq!(select_backend(presence, false), Backend::Managed);
}

#[test]
fn test_presence_from_lookup_ignores_empty_values()
{   let credentials = Credentials::from_lookup(|name| match name
    {   "OPENAI_API_KEY" => Some("key".to_string())
      , "OPENAI_ENDPOINT" => Some("".to_string())
      , "OPENAI_MODEL" => Some("gpt-35".to_string())
      , _ => None
    });
    assert_eq!(credentials.endpoint, None);
    assert_eq!(
      credentials.presence(),
      CredentialPresence { managed: false, retrieval: false }
    );
}

#[test]
fn test_missing_credential_names_the_variable()
{   let err = Credentials::default().openai().unwrap_err();
    assert_eq!(
      err.to_string(),
      "Missing OPENAI_API_KEY in environment variables."
    );
    assert!(!err.is_upstream());

    let err = credentials(0b111, 0b011).search().unwrap_err();
    assert_eq!(
      err,
      prompt_relay::error::Error::MissingCredential(
        "AZURE_COGNITIVE_SEARCH_INDEX".to_string()
      )
    );
}

#[test]
fn test_settings_defaults()
{   let credentials = Credentials
    {   api_key: Some("key".to_string())
      , endpoint: Some("https://example.openai.azure.com/".to_string())
      , model: Some("gpt-35".to_string())
      , ..Default::default()
    };
    let azure = credentials.azure().unwrap();
    assert_eq!(azure.endpoint, "https://example.openai.azure.com");
    assert_eq!(azure.api_version, "2023-08-01-preview");

    let openai = credentials.openai().unwrap();
    assert_eq!(openai.api_base, "https://api.openai.com/v1");
}

#[test]
fn test_missing_key_fails_without_io()
{   let request = prompt_relay::PromptRequest::new("s", "u");
    let result = tokio_test::block_on(
      prompt_relay::select_and_complete(&request, Credentials::default())
    );
    assert_eq!(
      result,
      Err(prompt_relay::error::Error::MissingCredential(
        "OPENAI_API_KEY".to_string()
      ))
    );
}

#[test]
fn test_downgrade_only_reported_for_managed_fallback()
{   use prompt_relay::retrieval_downgraded;

    assert!(retrieval_downgraded(Backend::Managed, true));
    assert!(!retrieval_downgraded(Backend::Standard, true));
    assert!(!retrieval_downgraded(Backend::ManagedRetrieval, true));
    assert!(!retrieval_downgraded(Backend::Managed, false));

    // managed keys incomplete: standard, which is not a downgrade
    let backend = select_backend(credentials(0b011, 0b111).presence(), true);
    assert_eq!(backend, Backend::Standard);
    assert!(!retrieval_downgraded(backend, true));
}
