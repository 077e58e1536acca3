//! fetch_helper: chainable HTTP responses for hyper handlers
//!
//! [`ResponseHelper`] builds the response for one request: set status,
//! headers and cookies by chaining, then finish with a body. `Content-Type`
//! is inferred from the body, or from the file extension for files.
//!
//! ```
//! use fetch_helper::{into_hyper, ResponseHelper};
//!
//! let mut res = ResponseHelper::new();
//! let response = res.html("<h1>Hello!</h1>");
//! assert_eq!(response.headers()["content-type"], "text/html; charset=utf-8");
//!
//! // ready to return from a hyper service
//! let _hyper_response = into_hyper(response);
//! ```

pub mod error;
pub mod helper;
pub mod http;
pub mod logger;

pub use error::HelperError;
pub use helper::ResponseHelper;
pub use http::{into_hyper, CookieOptions, HttpResponse, Payload, PendingResponse, ResponseBody, SameSite};
