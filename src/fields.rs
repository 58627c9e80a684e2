//! Independent optional-field readers over a decoded JSON object.
//!
//! Each reader looks at one key and returns `None` when the key is missing or
//! holds a value of the wrong shape. Readers never fail a whole record.

use serde_json::{Map, Value};
use url::Url;

pub fn string(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key)?.as_str().map(str::to_string)
}

/// A list of strings. Any non-string entry makes the whole field absent.
pub fn string_list(object: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    object
        .get(key)?
        .as_array()?
        .iter()
        .map(|value| value.as_str().map(str::to_string))
        .collect()
}

/// Only integer literals are accepted; `4.0` and `4.5` are both absent.
pub fn int(object: &Map<String, Value>, key: &str) -> Option<i64> {
    object.get(key)?.as_i64()
}

pub fn url(object: &Map<String, Value>, key: &str) -> Option<Url> {
    Url::parse(object.get(key)?.as_str()?).ok()
}

/// A list of URLs. Entries that do not parse are dropped.
pub fn url_list(object: &Map<String, Value>, key: &str) -> Option<Vec<Url>> {
    let list = string_list(object, key)?;
    Some(list.iter().filter_map(|s| Url::parse(s).ok()).collect())
}

/// Entries of an array that are JSON objects; other entries are skipped.
pub fn objects(values: &[Value]) -> impl Iterator<Item = &Map<String, Value>> {
    values.iter().filter_map(Value::as_object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn missing_and_mismatched_fields_are_absent() {
        let obj = object(json!({ "title": 5, "stars": "many", "tags": "swift" }));
        assert_eq!(string(&obj, "title"), None);
        assert_eq!(string(&obj, "description"), None);
        assert_eq!(int(&obj, "stars"), None);
        assert_eq!(string_list(&obj, "tags"), None);
    }

    #[test]
    fn string_list_rejects_mixed_entries() {
        let obj = object(json!({ "ids": ["a", 1], "ok": ["a", "b"] }));
        assert_eq!(string_list(&obj, "ids"), None);
        assert_eq!(
            string_list(&obj, "ok"),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn fractional_stars_are_absent() {
        let obj = object(json!({ "a": 42, "b": 4.5, "c": 4.0 }));
        assert_eq!(int(&obj, "a"), Some(42));
        assert_eq!(int(&obj, "b"), None);
        assert_eq!(int(&obj, "c"), None);
    }

    #[test]
    fn url_list_drops_unparsable_entries() {
        let obj = object(json!({ "screenshots": ["http://a", "not a url", "http://b"] }));
        let urls = url_list(&obj, "screenshots").unwrap();
        let urls: Vec<_> = urls.iter().map(Url::as_str).collect();
        assert_eq!(urls, vec!["http://a/", "http://b/"]);
    }

    #[test]
    fn invalid_url_is_absent() {
        let obj = object(json!({ "source": "nope", "itunes": "https://apps.apple.com/app/id1" }));
        assert_eq!(url(&obj, "source"), None);
        assert!(url(&obj, "itunes").is_some());
    }
}
