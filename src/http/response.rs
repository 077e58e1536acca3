//! Pending response module
//!
//! [`PendingResponse`] is the value the helper holds between chained calls.
//! Every adjustment consumes the old value and returns a rebuilt one, so a
//! held response is never edited behind the helper's back.

use hyper::header::{HeaderMap, HeaderName, HeaderValue};
use hyper::{Response, StatusCode};

use super::body::ResponseBody;

/// Response value returned by terminal calls
pub type HttpResponse = Response<ResponseBody>;

/// In-progress description of an outgoing response
///
/// The default value is status 200 with no headers and an empty body.
#[derive(Debug, Clone, Default)]
pub struct PendingResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: ResponseBody,
}

impl PendingResponse {
    /// Response with no headers
    pub fn new(status: StatusCode, body: ResponseBody) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body,
        }
    }

    /// Rebuild with the status replaced
    #[must_use]
    pub fn with_status(self, status: StatusCode) -> Self {
        Self { status, ..self }
    }

    /// Rebuild with one header set, replacing every earlier value of that name
    #[must_use]
    pub fn with_header(self, name: HeaderName, value: HeaderValue) -> Self {
        let mut headers = self.headers;
        headers.insert(name, value);
        Self {
            status: self.status,
            headers,
            body: self.body,
        }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub const fn body(&self) -> &ResponseBody {
        &self.body
    }

    /// Materialize a response value; the pending value stays untouched
    pub fn to_response(&self) -> HttpResponse {
        let mut response = Response::new(self.body.clone());
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers.clone();
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::header::{CONTENT_TYPE, SET_COOKIE};

    #[test]
    fn test_default_is_empty_ok() {
        let pending = PendingResponse::default();
        assert_eq!(pending.status(), StatusCode::OK);
        assert!(pending.headers().is_empty());
        assert!(pending.body().is_empty());
    }

    #[test]
    fn test_with_status_preserves_headers_and_body() {
        let pending = PendingResponse::new(StatusCode::OK, ResponseBody::Text("x".to_string()))
            .with_header(CONTENT_TYPE, HeaderValue::from_static("text/plain"))
            .with_status(StatusCode::NOT_FOUND);

        assert_eq!(pending.status(), StatusCode::NOT_FOUND);
        assert_eq!(pending.headers()[CONTENT_TYPE], "text/plain");
        assert_eq!(pending.body().as_text(), Some("x"));
    }

    #[test]
    fn test_with_header_last_write_wins() {
        let pending = PendingResponse::default()
            .with_header(SET_COOKIE, HeaderValue::from_static("a=1"))
            .with_header(SET_COOKIE, HeaderValue::from_static("b=2"));

        let values: Vec<_> = pending.headers().get_all(SET_COOKIE).iter().collect();
        assert_eq!(values, vec![&HeaderValue::from_static("b=2")]);
    }

    #[test]
    fn test_header_names_case_insensitive() {
        let pending = PendingResponse::default().with_header(
            HeaderName::from_static("content-type"),
            HeaderValue::from_static("text/csv"),
        );
        assert_eq!(pending.headers().get("Content-Type").unwrap(), "text/csv");
    }

    #[test]
    fn test_to_response() {
        let pending = PendingResponse::new(StatusCode::CREATED, ResponseBody::Text("made".to_string()))
            .with_header(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        let response = pending.to_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[CONTENT_TYPE], "text/plain");
        assert_eq!(response.body().as_text(), Some("made"));

        // still usable after materializing
        assert_eq!(pending.body().as_text(), Some("made"));
    }
}
