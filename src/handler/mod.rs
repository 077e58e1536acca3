//! Request handler module
//!
//! The demo server's request handling: one `ResponseHelper` per request,
//! plus static files from the configured public directory.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
