//! Remote metadata fetching
//!
//! Blocking GETs against the metadata hosts. There is no retry, timeout
//! override or caching; any failure is returned to the caller as-is.

use crate::error::PruneError;
use serde_json::Value;
use std::io::Read;

fn get(url: &str) -> Result<ureq::Response, PruneError> {
    tracing::debug!("GET {}", url);
    ureq::get(url).call().map_err(|e| PruneError::Http {
        url: url.to_string(),
        source: Box::new(e),
    })
}

/// Fetch a URL and decode the body as JSON
pub fn fetch_json(url: &str) -> Result<Value, PruneError> {
    let response = get(url)?;
    let value = serde_json::from_reader(response.into_reader())?;
    Ok(value)
}

/// Fetch a URL whose body must be a top-level JSON array
pub fn fetch_json_array(url: &str) -> Result<Vec<Value>, PruneError> {
    match fetch_json(url)? {
        Value::Array(items) => {
            tracing::debug!("{} entries from {}", items.len(), url);
            Ok(items)
        }
        other => Err(PruneError::Schema(format!(
            "expected a JSON array from {}, got {}",
            url,
            json_kind(&other)
        ))),
    }
}

/// Fetch a URL and return the raw body
pub fn fetch_bytes(url: &str) -> Result<Vec<u8>, PruneError> {
    let response = get(url)?;
    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .map_err(|source| PruneError::Body {
            url: url.to_string(),
            source,
        })?;
    Ok(body)
}

/// Short name of a JSON value's type, for error messages
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&json!(null)), "null");
        assert_eq!(json_kind(&json!([1, 2])), "array");
        assert_eq!(json_kind(&json!({"Icon": "x"})), "object");
        assert_eq!(json_kind(&json!("x")), "string");
        assert_eq!(json_kind(&json!(3)), "number");
    }

    #[test]
    fn test_fetch_json_array() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/Material.json");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"[{"Icon": "UI_ItemIcon_202"}, {"Icon": "UI_ItemIcon_203"}]"#);
        });

        let items = fetch_json_array(&server.url("/Material.json")).unwrap();
        mock.assert();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["Icon"], "UI_ItemIcon_203");
    }

    #[test]
    fn test_fetch_json_array_rejects_object() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/Avatar.json");
            then.status(200).body(r#"{"Icon": "UI_AvatarIcon_Ayaka"}"#);
        });

        match fetch_json_array(&server.url("/Avatar.json")) {
            Err(PruneError::Schema(message)) => assert!(message.contains("object")),
            other => panic!("expected Schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_success_status_is_http_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing.json");
            then.status(404).body("Not Found");
        });
        server.mock(|when, then| {
            when.method(GET).path("/broken.xaml");
            then.status(500).body("oops");
        });

        let result = fetch_json(&server.url("/missing.json"));
        match result {
            Err(PruneError::Http { url, .. }) => assert!(url.ends_with("/missing.json")),
            other => panic!("expected Http error, got {:?}", other),
        }

        let result = fetch_bytes(&server.url("/broken.xaml"));
        assert!(matches!(result, Err(PruneError::Http { .. })));
    }

    #[test]
    fn test_undecodable_body_is_json_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/Material.json");
            then.status(200).body("<html>rate limited</html>");
        });

        let result = fetch_json(&server.url("/Material.json"));
        assert!(matches!(result, Err(PruneError::Json(_))));
    }

    #[test]
    fn test_fetch_bytes_returns_body_verbatim() {
        let body = "<ResourceDictionary>\r\n</ResourceDictionary>";
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/Uri.xaml");
            then.status(200).body(body);
        });

        let bytes = fetch_bytes(&server.url("/Uri.xaml")).unwrap();
        assert_eq!(bytes, body.as_bytes());
    }
}
