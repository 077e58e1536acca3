//! Send payload module
//!
//! [`Payload`] is what `send` accepts. The variant decides how the body is
//! encoded and which `Content-Type` it gets:
//! - `Text`: HTML if it looks like markup, plain text otherwise
//! - `Binary`: `application/octet-stream`
//! - `Structured`: serialized to JSON, `application/json`

use hyper::body::Bytes;
use serde::Serialize;

use super::body::ResponseBody;
use super::mime::OCTET_STREAM;
use crate::error::HelperError;

pub const TEXT_HTML: &str = "text/html; charset=utf-8";
pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const APPLICATION_JSON: &str = "application/json";

/// Data accepted by `send`
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Text(String),
    Binary(Bytes),
    Structured(serde_json::Value),
}

impl Payload {
    /// Structured payload from any serializable value
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, HelperError> {
        Ok(Self::Structured(serde_json::to_value(value)?))
    }

    /// `Content-Type` inferred from the variant and, for text, its content
    pub fn sniff_content_type(&self) -> &'static str {
        match self {
            Self::Text(text) if looks_like_html(text) => TEXT_HTML,
            Self::Text(_) => TEXT_PLAIN,
            Self::Binary(_) => OCTET_STREAM,
            Self::Structured(_) => APPLICATION_JSON,
        }
    }

    /// Encode into a response body
    pub fn into_body(self) -> ResponseBody {
        match self {
            Self::Text(text) => ResponseBody::Text(text),
            Self::Binary(bytes) => ResponseBody::Binary(bytes),
            Self::Structured(value) => ResponseBody::Text(value.to_string()),
        }
    }

    /// Content type and encoded body in one step
    pub fn into_parts(self) -> (&'static str, ResponseBody) {
        let content_type = self.sniff_content_type();
        (content_type, self.into_body())
    }
}

/// HTML signature check
///
/// Markup if the trimmed text starts with `<`, or the text contains
/// `<!DOCTYPE html>` or `<html` anywhere. Matching is case-sensitive.
pub fn looks_like_html(text: &str) -> bool {
    text.trim().starts_with('<') || text.contains("<!DOCTYPE html>") || text.contains("<html")
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Binary(Bytes::from(bytes))
    }
}

impl From<&[u8]> for Payload {
    fn from(bytes: &[u8]) -> Self {
        Self::Binary(Bytes::copy_from_slice(bytes))
    }
}

impl From<Bytes> for Payload {
    fn from(bytes: Bytes) -> Self {
        Self::Binary(bytes)
    }
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        Self::Structured(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_html_signatures() {
        assert!(looks_like_html("<h1>x</h1>"));
        assert!(looks_like_html("   \n\t<div>indented</div>"));
        assert!(looks_like_html("prefix <!DOCTYPE html> suffix"));
        assert!(looks_like_html("text before <html lang=\"en\">"));
    }

    #[test]
    fn test_plain_text_not_html() {
        assert!(!looks_like_html("hello world"));
        assert!(!looks_like_html("a < b"));
        assert!(!looks_like_html(""));
        // signature match is case-sensitive
        assert!(!looks_like_html("x <HTML>"));
        assert!(!looks_like_html("x <!doctype html>"));
    }

    #[test]
    fn test_sniff_content_type() {
        assert_eq!(Payload::from("<p>hi</p>").sniff_content_type(), TEXT_HTML);
        assert_eq!(Payload::from("hi").sniff_content_type(), TEXT_PLAIN);
        assert_eq!(Payload::from(vec![0u8, 1]).sniff_content_type(), OCTET_STREAM);
        assert_eq!(
            Payload::from(json!({"ok": true})).sniff_content_type(),
            APPLICATION_JSON
        );
    }

    #[test]
    fn test_binary_that_looks_like_html_stays_binary() {
        let payload = Payload::from(&b"<html></html>"[..]);
        assert_eq!(payload.sniff_content_type(), OCTET_STREAM);
    }

    #[test]
    fn test_structured_body_is_json_text() {
        let (content_type, body) = Payload::from(json!({"name": "bun", "n": [1, 2]})).into_parts();
        assert_eq!(content_type, APPLICATION_JSON);
        let parsed: serde_json::Value = serde_json::from_str(body.as_text().unwrap()).unwrap();
        assert_eq!(parsed, json!({"name": "bun", "n": [1, 2]}));
    }

    #[test]
    fn test_structured_string_is_quoted() {
        let body = Payload::from(json!("hello")).into_body();
        assert_eq!(body.as_text(), Some("\"hello\""));
    }

    #[test]
    fn test_json_from_serializable() {
        #[derive(Serialize)]
        struct User {
            id: u32,
            name: &'static str,
        }

        let payload = Payload::json(&User { id: 7, name: "ada" }).unwrap();
        assert_eq!(payload, Payload::Structured(json!({"id": 7, "name": "ada"})));
    }

    #[test]
    fn test_json_keeps_field_order() {
        #[derive(Serialize)]
        struct Account {
            name: &'static str,
            id: u32,
            active: bool,
        }

        let body = Payload::json(&Account { name: "ada", id: 7, active: true })
            .unwrap()
            .into_body();
        assert_eq!(body.as_text(), Some(r#"{"name":"ada","id":7,"active":true}"#));
    }

    #[test]
    fn test_json_serialization_failure_is_error() {
        struct Broken;

        impl Serialize for Broken {
            fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
                Err(S::Error::custom("cannot encode"))
            }
        }

        let err = Payload::json(&Broken).unwrap_err();
        assert!(matches!(err, HelperError::Serialize(_)));
        assert!(err.to_string().contains("cannot encode"));
    }

    #[test]
    fn test_json_non_string_keys_fail() {
        let mut map = HashMap::new();
        map.insert(vec![1u8], "v");
        assert!(Payload::json(&map).is_err());
    }
}
