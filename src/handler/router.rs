//! Request dispatch module
//!
//! Entry point for the demo server's requests. Each request gets its own
//! [`ResponseHelper`]; the path match below is a usage showcase, not a router.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use hyper::{Method, Request, Response, StatusCode, Version};
use serde::Serialize;

use fetch_helper::http::{into_hyper, BoxedBody};
use fetch_helper::logger::{self, AccessLogEntry};
use fetch_helper::{CookieOptions, HelperError, HttpResponse, ResponseHelper, SameSite};

use crate::config::Config;
use crate::handler::static_files::{self, STATIC_PREFIX};

#[derive(Serialize)]
struct ServerStatus {
    name: &'static str,
    version: &'static str,
    routes: [&'static str; 7],
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    config: Arc<Config>,
) -> Result<Response<BoxedBody>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let mut entry = AccessLogEntry::new(peer_addr.ip().to_string(), method.to_string(), path.clone());
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.referer = header_text(&req, &hyper::header::REFERER);
    entry.user_agent = header_text(&req, &hyper::header::USER_AGENT);
    drop(req);

    let response = route_request(&method, &path, &config).await;

    if config.logging.access_log {
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        entry.record_response(&response);
        logger::log_access(&entry, &config.logging.access_log_format);
    }

    Ok(into_hyper(response))
}

/// Build the response for one request
pub async fn route_request(method: &Method, path: &str, config: &Config) -> HttpResponse {
    let mut res = ResponseHelper::new();

    if *method != Method::GET && *method != Method::HEAD {
        logger::log_warning(&format!("Method not allowed: {method}"));
        return res
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .send("405 Method Not Allowed");
    }

    let result = match path {
        "/" => Ok(res.html(static_files::get_default_homepage())),
        "/hello" => Ok(res.send("Hello from fetch_helper!")),
        "/json" => res.send_json(&server_status()),
        "/bytes" => Ok(res.send(vec![0xca, 0xfe, 0xba, 0xbe])),
        "/report.csv" => csv_report(&mut res),
        "/login" => login(&mut res),
        "/old-home" => res.redirect_with_status("/", StatusCode::MOVED_PERMANENTLY),
        _ if path.starts_with(STATIC_PREFIX) => {
            Ok(static_files::serve_public_file(&mut res, &config.resources.public_dir, path).await)
        }
        _ => Ok(res.status(StatusCode::NOT_FOUND).send("404 Not Found")),
    };

    result.unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to build response for {path}: {e}"));
        ResponseHelper::new().send_with_status("500 Internal Server Error", StatusCode::INTERNAL_SERVER_ERROR)
    })
}

const fn server_status() -> ServerStatus {
    ServerStatus {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        routes: ["/", "/hello", "/json", "/bytes", "/report.csv", "/login", "/old-home"],
    }
}

/// Text body relabelled as CSV after sniffing
fn csv_report(res: &mut ResponseHelper) -> Result<HttpResponse, HelperError> {
    res.send("id,name\n1,ada\n2,grace\n");
    Ok(res
        .content_type("text/csv; charset=utf-8")?
        .response()
        .unwrap_or_default())
}

/// Cookie set after the body, since `send` starts a fresh response
fn login(res: &mut ResponseHelper) -> Result<HttpResponse, HelperError> {
    res.send("Logged in");
    let options = CookieOptions::new()
        .path("/")
        .max_age(3600)
        .http_only(true)
        .same_site(SameSite::Lax);
    Ok(res
        .cookie("session", "demo-session", &options)?
        .response()
        .unwrap_or_default())
}

fn header_text<B>(req: &Request<B>, name: &hyper::header::HeaderName) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
