//! Chainable response helper
//!
//! Create one [`ResponseHelper`] per request. Chaining calls (`status`,
//! `content_type`, `cookie`) adjust the held response; terminal calls
//! (`send`, `html`, `send_file`, `redirect`) build a response value and keep
//! a copy as the held state.
//!
//! # Example
//! ```
//! use fetch_helper::ResponseHelper;
//! use hyper::StatusCode;
//!
//! let mut helper = ResponseHelper::new();
//! let response = helper.status(StatusCode::CREATED).send("created");
//! assert_eq!(response.status(), StatusCode::CREATED);
//! assert_eq!(response.headers()["content-type"], "text/plain; charset=utf-8");
//! ```

use std::io;
use std::path::Path;

use hyper::header::{HeaderName, HeaderValue, CONTENT_TYPE, LOCATION, SET_COOKIE};
use hyper::StatusCode;
use serde::Serialize;
use tokio::fs;

use crate::error::HelperError;
use crate::http::payload::TEXT_HTML;
use crate::http::{cookie, mime, CookieOptions, HttpResponse, Payload, PendingResponse, ResponseBody};
use crate::logger;

const FILE_NOT_FOUND: &str = "File not found";
const FILE_READ_ERROR: &str = "Error reading file";

/// Outcome of checking a file before serving it
#[derive(Debug)]
enum FileLookup {
    Found,
    NotFound,
    Failed(io::Error),
}

/// Builds responses for a single request
#[derive(Debug, Default)]
pub struct ResponseHelper {
    current: Option<PendingResponse>,
    /// Set by `status`, consumed by the next terminal call
    chained_status: Option<StatusCode>,
}

impl ResponseHelper {
    pub const fn new() -> Self {
        Self {
            current: None,
            chained_status: None,
        }
    }

    /// The held response, if any call has produced one
    pub const fn current(&self) -> Option<&PendingResponse> {
        self.current.as_ref()
    }

    /// The held response as a response value
    ///
    /// Useful when a chain ends on a chaining call, e.g. after `cookie`.
    pub fn response(&self) -> Option<HttpResponse> {
        self.current.as_ref().map(PendingResponse::to_response)
    }

    /// Respond with `data`, inferring `Content-Type` from it
    ///
    /// Uses the status set by an earlier chaining call, 200 otherwise. A
    /// status left on the held response by a previous terminal call is not
    /// reused. Any headers or cookies set earlier are discarded.
    pub fn send(&mut self, data: impl Into<Payload>) -> HttpResponse {
        let status = self.chained_status.unwrap_or(StatusCode::OK);
        self.send_with_status(data, status)
    }

    /// Respond with `data` and an explicit status
    pub fn send_with_status(&mut self, data: impl Into<Payload>, status: StatusCode) -> HttpResponse {
        let (content_type, body) = data.into().into_parts();
        let pending = PendingResponse::new(status, body)
            .with_header(CONTENT_TYPE, HeaderValue::from_static(content_type));
        self.replace(pending)
    }

    /// Serialize `value` to JSON and send it
    pub fn send_json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<HttpResponse, HelperError> {
        Ok(self.send(Payload::json(value)?))
    }

    /// Respond with `content` labelled as HTML, whatever it looks like
    pub fn html(&mut self, content: impl Into<String>) -> HttpResponse {
        self.send(Payload::Text(content.into()));
        self.force_html()
    }

    pub fn html_with_status(&mut self, content: impl Into<String>, status: StatusCode) -> HttpResponse {
        self.send_with_status(Payload::Text(content.into()), status);
        self.force_html()
    }

    fn force_html(&mut self) -> HttpResponse {
        self.rebuild(|pending| pending.with_header(CONTENT_TYPE, HeaderValue::from_static(TEXT_HTML)))
            .to_response()
    }

    /// Respond with the file at `path`, streamed from disk
    ///
    /// A missing file becomes a 404 response and any other access failure is
    /// logged and becomes a 500 response; neither is returned as an error.
    pub async fn send_file(&mut self, path: impl AsRef<Path>) -> HttpResponse {
        let path = path.as_ref();

        match lookup_file(path).await {
            FileLookup::Found => {
                let content_type = mime::from_path(path);
                let pending = PendingResponse::new(StatusCode::OK, ResponseBody::File(path.to_path_buf()))
                    .with_header(CONTENT_TYPE, HeaderValue::from_static(content_type));
                self.replace(pending)
            }
            FileLookup::NotFound => self.status(StatusCode::NOT_FOUND).send(FILE_NOT_FOUND),
            FileLookup::Failed(e) => {
                logger::log_error(&format!("Error reading file '{}': {e}", path.display()));
                self.status(StatusCode::INTERNAL_SERVER_ERROR).send(FILE_READ_ERROR)
            }
        }
    }

    /// Set `Content-Type` on the held response
    ///
    /// Creates an empty 200 response when nothing is held yet.
    pub fn content_type(&mut self, content_type: &str) -> Result<&mut Self, HelperError> {
        let value = header_value(&CONTENT_TYPE, content_type)?;
        self.rebuild(|pending| pending.with_header(CONTENT_TYPE, value));
        Ok(self)
    }

    /// Set the status of the held response
    pub fn status(&mut self, status: StatusCode) -> &mut Self {
        self.rebuild(|pending| pending.with_status(status));
        self.chained_status = Some(status);
        self
    }

    /// Set a cookie on the held response
    ///
    /// Only one cookie is kept: a second call replaces the `Set-Cookie`
    /// header written by the first.
    pub fn cookie(&mut self, name: &str, value: &str, options: &CookieOptions) -> Result<&mut Self, HelperError> {
        let value = header_value(&SET_COOKIE, &cookie::serialize(name, value, options))?;
        self.rebuild(|pending| pending.with_header(SET_COOKIE, value));
        Ok(self)
    }

    /// Redirect to `url` with 302 Found
    pub fn redirect(&mut self, url: &str) -> Result<HttpResponse, HelperError> {
        self.redirect_with_status(url, StatusCode::FOUND)
    }

    /// Redirect to `url` with a bodyless response, dropping earlier headers
    pub fn redirect_with_status(&mut self, url: &str, status: StatusCode) -> Result<HttpResponse, HelperError> {
        let location = header_value(&LOCATION, url)?;
        let pending = PendingResponse::new(status, ResponseBody::Empty).with_header(LOCATION, location);
        Ok(self.replace(pending))
    }

    fn replace(&mut self, pending: PendingResponse) -> HttpResponse {
        let response = pending.to_response();
        self.current = Some(pending);
        self.chained_status = None;
        response
    }

    fn rebuild(&mut self, f: impl FnOnce(PendingResponse) -> PendingResponse) -> &PendingResponse {
        let pending = f(self.current.take().unwrap_or_default());
        self.current.insert(pending)
    }
}

async fn lookup_file(path: &Path) -> FileLookup {
    match fs::metadata(path).await {
        Ok(metadata) if metadata.is_file() => FileLookup::Found,
        // directories are not servable
        Ok(_) => FileLookup::NotFound,
        Err(e) if e.kind() == io::ErrorKind::NotFound => FileLookup::NotFound,
        Err(e) => FileLookup::Failed(e),
    }
}

fn header_value(name: &HeaderName, value: &str) -> Result<HeaderValue, HelperError> {
    HeaderValue::from_str(value).map_err(|source| HelperError::InvalidHeader {
        name: name.as_str().to_string(),
        source,
    })
}
