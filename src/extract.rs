//! Pull an embedded JSON object out of model prose

use std::sync::LazyLock;
use regex::{Captures, Regex};

static OBJECT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(?:[^{}]|\{[^{}]*\})*\}")
      .expect("object pattern is valid")
});

static QUOTED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""[^"]*""#).expect("quoted pattern is valid")
});

/// First brace-balanced object (one nesting level) in `text`, with raw
/// newlines inside quoted strings escaped. Empty when nothing matches.
pub fn extract_json(text: &str) -> String
{   match OBJECT_PATTERN.find(text)
    {   Some(found) => {
          QUOTED_PATTERN
            .replace_all(found.as_str(), |caps: &Captures| {
              caps[0].replace('\n', "\\n")
            })
            .into_owned()
        }
      , None => String::new()
    }
}

/// Run [`extract_json`] only on text that holds both braces
pub fn extract_json_if_present(text: &str) -> String
{   if !text.is_empty() && text.contains('{') && text.contains('}')
    {   extract_json(text)
    } else
    {   text.to_string()
    }
}
