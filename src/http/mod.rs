//! HTTP response layer
//!
//! Value types the helper assembles responses from: bodies, send payloads,
//! cookies and the extension-based MIME table. Nothing here performs I/O
//! except the lazily opened file stream in [`body`].

pub mod body;
pub mod cookie;
pub mod mime;
pub mod payload;
pub mod response;

// Re-export commonly used types
pub use body::{into_hyper, BoxedBody, ResponseBody};
pub use cookie::{CookieOptions, SameSite};
pub use payload::Payload;
pub use response::{HttpResponse, PendingResponse};
