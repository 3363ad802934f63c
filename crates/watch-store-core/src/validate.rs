use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use watch_store_models::{HistoryEntry, ViewableItem};

fn has_string_field(value: &Value, field: &str) -> bool {
    value.get(field).map(Value::is_string).unwrap_or(false)
}

/// Shape check for a stored catalog record: an object with string-typed
/// `title`, `slug`, `thumbnail`, `rating`, `year` and a `type` of exactly
/// `"movie"` or `"series"`.
pub fn is_viewable_item(value: &Value) -> bool {
    if !value.is_object() {
        return false;
    }

    let kind_ok = matches!(
        value.get("type").and_then(Value::as_str),
        Some("movie") | Some("series")
    );

    kind_ok
        && has_string_field(value, "title")
        && has_string_field(value, "slug")
        && has_string_field(value, "thumbnail")
        && has_string_field(value, "rating")
        && has_string_field(value, "year")
}

/// A viewable item with a string-typed `watchedAt` on top.
pub fn is_history_entry(value: &Value) -> bool {
    is_viewable_item(value) && has_string_field(value, "watchedAt")
}

/// Decodes a raw stored string into a list of catalog records. Anything
/// that is not a JSON array reads as empty; elements failing the shape
/// check are dropped silently.
pub fn decode_items(raw: &str) -> Vec<ViewableItem> {
    decode_list(raw, is_viewable_item)
}

/// Same as [`decode_items`] for history entries. An entry whose
/// `watchedAt` passes the shape check but is not a parseable timestamp
/// fails the typed decode and is dropped like any other invalid element.
pub fn decode_history(raw: &str) -> Vec<HistoryEntry> {
    decode_list(raw, is_history_entry)
}

fn decode_list<T>(raw: &str, accept: fn(&Value) -> bool) -> Vec<T>
where
    T: DeserializeOwned,
{
    let parsed: Value = match serde_json::from_str(raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!("Stored list is not valid JSON, treating as empty: {}", e);
            return Vec::new();
        }
    };

    let Value::Array(elements) = parsed else {
        debug!("Stored list is not a JSON array, treating as empty");
        return Vec::new();
    };

    elements
        .into_iter()
        .filter(accept)
        .filter_map(|element| serde_json::from_value(element).ok())
        .collect()
}
