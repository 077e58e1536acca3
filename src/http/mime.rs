//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.

use std::ffi::OsStr;
use std::path::Path;

/// Fallback for unknown or missing extensions
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Get MIME Content-Type based on file extension
///
/// Matching is case-insensitive.
///
/// # Examples
/// ```
/// use fetch_helper::http::mime::get_content_type;
/// assert_eq!(get_content_type(Some("html")), "text/html");
/// assert_eq!(get_content_type(Some("JPEG")), "image/jpeg");
/// assert_eq!(get_content_type(None), "application/octet-stream");
/// ```
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    let extension = extension.map(str::to_ascii_lowercase);
    match extension.as_deref() {
        // Text
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("txt") => "text/plain",

        // JavaScript/JSON
        Some("js") => "application/javascript",
        Some("json") => "application/json",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",

        // Documents
        Some("pdf") => "application/pdf",

        // Default
        _ => OCTET_STREAM,
    }
}

/// Get MIME Content-Type for a file path
///
/// The extension is whatever follows the last `.` of the file name, so a
/// dotfile such as `.png` counts as `png`. Names without a dot fall back to
/// `application/octet-stream`.
pub fn from_path(path: &Path) -> &'static str {
    let extension = path
        .file_name()
        .and_then(OsStr::to_str)
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext);
    get_content_type(extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(get_content_type(Some("html")), "text/html");
        assert_eq!(get_content_type(Some("css")), "text/css");
        assert_eq!(get_content_type(Some("js")), "application/javascript");
        assert_eq!(get_content_type(Some("json")), "application/json");
        assert_eq!(get_content_type(Some("png")), "image/png");
        assert_eq!(get_content_type(Some("jpg")), "image/jpeg");
        assert_eq!(get_content_type(Some("jpeg")), "image/jpeg");
        assert_eq!(get_content_type(Some("gif")), "image/gif");
        assert_eq!(get_content_type(Some("svg")), "image/svg+xml");
        assert_eq!(get_content_type(Some("pdf")), "application/pdf");
        assert_eq!(get_content_type(Some("txt")), "text/plain");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(get_content_type(Some("PNG")), "image/png");
        assert_eq!(get_content_type(Some("Html")), "text/html");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(get_content_type(Some("mp4")), OCTET_STREAM);
        assert_eq!(get_content_type(Some("xyz")), OCTET_STREAM);
        assert_eq!(get_content_type(None), OCTET_STREAM);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(from_path(Path::new("public/logo.png")), "image/png");
        assert_eq!(from_path(Path::new("archive.tar.gz")), OCTET_STREAM);
        assert_eq!(from_path(Path::new("Makefile")), OCTET_STREAM);
        assert_eq!(from_path(Path::new("docs/README.TXT")), "text/plain");
    }

    #[test]
    fn test_from_path_dotfiles() {
        assert_eq!(from_path(Path::new(".png")), "image/png");
        assert_eq!(from_path(Path::new("public/.hidden.css")), "text/css");
        assert_eq!(from_path(Path::new("trailing.")), OCTET_STREAM);
        assert_eq!(from_path(Path::new("release.d/notes")), OCTET_STREAM);
    }
}
