//! Builders for requests and completion payloads used across tests.

use serde_json::{json, Value};

use crate::domain::request::{Gender, NameRequest, Origin, Style};

/// A classic request for `count` girl names of any origin.
pub fn request(count: i64) -> NameRequest {
    request_from(Origin::Any, count, vec![])
}

/// A classic request with an explicit origin and exclusion list.
pub fn request_from(origin: Origin, count: i64, exclude: Vec<String>) -> NameRequest {
    NameRequest::new(Gender::Girl, Style::Classic, origin, count, exclude)
        .expect("test request is valid")
}

/// A JSON object shaped like a single model item.
pub fn item(name: &str, meaning: &str, origin: &str) -> Value {
    json!({ "name": name, "meaning": meaning, "origin": origin })
}

/// A JSON array completion listing `names` with placeholder meanings.
pub fn completion(names: &[&str]) -> String {
    let items: Vec<Value> = names
        .iter()
        .map(|name| item(name, "lovely", "English"))
        .collect();
    Value::Array(items).to_string()
}
