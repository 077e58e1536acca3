//! Error types

use hyper::header::InvalidHeaderValue;
use thiserror::Error;

/// Errors surfaced to callers of the response helper
///
/// File access failures are never reported here; `send_file` turns them
/// into 404/500 responses.
#[derive(Debug, Error)]
pub enum HelperError {
    /// A value passed as structured data could not be serialized to JSON
    #[error("failed to serialize response body: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A value is not allowed in an HTTP header
    #[error("invalid value for header {name}")]
    InvalidHeader {
        name: String,
        #[source]
        source: InvalidHeaderValue,
    },
}
