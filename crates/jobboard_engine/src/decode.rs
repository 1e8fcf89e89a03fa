use serde_json::Value;

use crate::{FailureKind, FetchError, JobDetailRecord, JobSummaryRecord, ListBody, ListResponse};

/// Classifies a list body. `null`, `false`, `[]` and objects carrying a
/// `message` are the resource's way of saying there is nothing to show.
pub fn decode_list(bytes: &[u8], total_pages: u32) -> Result<ListResponse, FetchError> {
    let value: Value = serde_json::from_slice(bytes).map_err(decode_error)?;
    let body = match value {
        Value::Null | Value::Bool(false) => ListBody::Empty { message: None },
        Value::Array(items) if items.is_empty() => ListBody::Empty { message: None },
        Value::Array(items) => {
            let jobs: Vec<JobSummaryRecord> =
                serde_json::from_value(Value::Array(items)).map_err(decode_error)?;
            ListBody::Jobs(jobs)
        }
        Value::Object(map) if map.contains_key("message") => ListBody::Empty {
            message: map
                .get("message")
                .and_then(Value::as_str)
                .map(ToOwned::to_owned),
        },
        other => {
            return Err(FetchError::new(
                FailureKind::Decode,
                format!("unexpected list body: {}", kind_of(&other)),
            ))
        }
    };
    Ok(ListResponse { body, total_pages })
}

pub fn decode_detail(bytes: &[u8]) -> Result<JobDetailRecord, FetchError> {
    serde_json::from_slice(bytes).map_err(decode_error)
}

/// Upper bound on the page count taken from a response header.
pub const MAX_TOTAL_PAGES: u32 = 1000;

/// Reads `X-WP-TotalPages` the lenient way browsers do with `parseInt`:
/// leading digits count, anything else (or zero) falls back to one page.
/// Counts above [`MAX_TOTAL_PAGES`] are clamped to it.
pub fn parse_total_pages(header: Option<&str>) -> u32 {
    let Some(raw) = header else {
        return 1;
    };
    let raw = raw.trim_start();
    let digits = &raw[..raw
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(raw.len())];
    if digits.is_empty() {
        return 1;
    }
    match digits.parse::<u32>() {
        Ok(0) => 1,
        Ok(pages) => pages.min(MAX_TOTAL_PAGES),
        // Only overflow is left once the digits are known to be non-empty.
        Err(_) => MAX_TOTAL_PAGES,
    }
}

/// Treats JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    let value = <Option<T> as serde::Deserialize>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

fn decode_error(err: serde_json::Error) -> FetchError {
    FetchError::new(FailureKind::Decode, err.to_string())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
