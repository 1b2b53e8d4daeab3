use crate::domain::faq::entity::FaqEntry;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Deserializer, Value};
use thiserror::Error;
use validator::Validate;

lazy_static! {
    static ref FENCED_BLOCK: Regex = Regex::new(r"(?is)```(?:json)?\s*(.*?)\s*```").unwrap();
}

#[derive(Debug, Error)]
pub enum FaqParseError {
    #[error("response is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("expected a JSON array of FAQs, got {0}")]
    UnexpectedShape(&'static str),
    #[error("response contained no FAQs")]
    Empty,
    #[error("FAQ #{index} is invalid: {reason}")]
    InvalidEntry { index: usize, reason: String },
}

fn unfenced(raw: &str) -> &str {
    let trimmed = raw.trim();
    FENCED_BLOCK
        .captures(trimmed)
        .and_then(|c| c.get(1))
        .map_or(trimmed, |inner| inner.as_str())
}

fn looks_like_faqs(value: &Value) -> bool {
    match value {
        Value::Array(items) => !items.is_empty() && items.iter().all(Value::is_object),
        Value::Object(map) => map.get("faqs").is_some_and(Value::is_array),
        _ => false,
    }
}

/// Finds the JSON value embedded in free-form model output.
///
/// Every `[` or `{` is tried as the start of a value and decoding stops at
/// the end of that value, so prose on either side is ignored. The first
/// FAQ-shaped value wins; otherwise the first value that decoded at all.
fn decode_embedded_json(text: &str) -> Result<Value, serde_json::Error> {
    let mut fallback = None;
    let mut first_error = None;

    for (start, _) in text.match_indices(['[', '{']) {
        match Deserializer::from_str(&text[start..])
            .into_iter::<Value>()
            .next()
        {
            Some(Ok(value)) if looks_like_faqs(&value) => return Ok(value),
            Some(Ok(value)) => {
                fallback.get_or_insert(value);
            }
            Some(Err(e)) => {
                first_error.get_or_insert(e);
            }
            None => {}
        }
    }

    match (fallback, first_error) {
        (Some(value), _) => Ok(value),
        (None, Some(e)) => Err(e),
        (None, None) => serde_json::from_str(text),
    }
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decodes and validates a model response into FAQ entries.
///
/// Accepts a bare array or an object wrapping it under `faqs`. Every entry
/// must carry a non-blank `question` and `answer` (whitespace is trimmed); one
/// bad entry rejects the whole response.
pub fn parse_faq_response(raw: &str) -> Result<Vec<FaqEntry>, FaqParseError> {
    let value = decode_embedded_json(unfenced(raw))?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("faqs") {
            Some(Value::Array(items)) => items,
            _ => return Err(FaqParseError::UnexpectedShape("an object without a `faqs` array")),
        },
        other => return Err(FaqParseError::UnexpectedShape(shape_name(&other))),
    };

    if items.is_empty() {
        return Err(FaqParseError::Empty);
    }

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let decoded: FaqEntry =
                serde_json::from_value(item).map_err(|e| FaqParseError::InvalidEntry {
                    index,
                    reason: e.to_string(),
                })?;
            let entry = FaqEntry::new(decoded.question.trim(), decoded.answer.trim());
            entry
                .validate()
                .map_err(|e| FaqParseError::InvalidEntry {
                    index,
                    reason: e.to_string(),
                })?;
            Ok(entry)
        })
        .collect()
}
