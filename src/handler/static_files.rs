//! Static file serving module
//!
//! Maps `/static/...` paths onto the public directory and hands the file to
//! [`ResponseHelper::send_file`].

use std::path::{Component, Path};

use hyper::StatusCode;

use fetch_helper::{logger, HttpResponse, ResponseHelper};

pub const STATIC_PREFIX: &str = "/static/";

/// Serve a file from `public_dir` for a `/static/...` request path
pub async fn serve_public_file(res: &mut ResponseHelper, public_dir: &str, path: &str) -> HttpResponse {
    let relative = path.strip_prefix(STATIC_PREFIX).unwrap_or(path);

    if !is_safe_relative(relative) {
        logger::log_warning(&format!("Path traversal attempt blocked: {path}"));
        return res.status(StatusCode::NOT_FOUND).send("File not found");
    }

    res.send_file(Path::new(public_dir).join(relative)).await
}

/// Only plain file names below the public directory are allowed
fn is_safe_relative(relative: &str) -> bool {
    !relative.is_empty()
        && Path::new(relative)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

/// Get default homepage HTML
pub fn get_default_homepage() -> String {
    String::from(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>fetch_helper demo</title>
</head>
<body>
    <h1>fetch_helper</h1>
    <p>Every response on this server is built by a fresh <code>ResponseHelper</code>.</p>
    <ul>
        <li><a href="/hello">/hello</a> - plain text</li>
        <li><a href="/json">/json</a> - structured data as JSON</li>
        <li><a href="/bytes">/bytes</a> - binary body</li>
        <li><a href="/report.csv">/report.csv</a> - explicit content type</li>
        <li><a href="/login">/login</a> - sets a cookie</li>
        <li><a href="/old-home">/old-home</a> - permanent redirect</li>
        <li><a href="/static/index.html">/static/...</a> - files from the public directory</li>
    </ul>
</body>
</html>"#,
    )
}
